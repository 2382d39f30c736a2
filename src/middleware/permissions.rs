//! Autorización por permiso
//!
//! Cada router de recurso se protege con un permiso opaco que debe venir
//! en el token: `empresas`, `personal`, `maquinas`, `mantenciones`,
//! `estadisticas`. Los catálogos solo exigen autenticación.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::models::auth::AuthenticatedUser;
use crate::utils::errors::AppError;

pub async fn verificar(
    request: Request,
    next: Next,
    permiso: &'static str,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| AppError::Unauthorized("Usuario no autenticado".to_string()))?;

    if !user.tiene_permiso(permiso) {
        return Err(AppError::Forbidden(format!(
            "Se requiere el permiso '{}'",
            permiso
        )));
    }

    Ok(next.run(request).await)
}
