//! Autenticación por JWT
//!
//! Verifica el token Bearer y deja un `AuthenticatedUser` como extensión
//! del request. Los tokens se emiten fuera de esta API; los claims son la
//! fuente de verdad de rol, empresa y permisos.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::models::auth::{AuthenticatedUser, Rol};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt;

pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::Unauthorized("Token de autorización requerido".to_string())
        })?;

    let token = jwt::extract_token_from_header(auth_header)?;
    let claims = jwt::verify_token(token, &state.config.jwt_secret)?;

    let rol = Rol::from_str(&claims.rol).ok_or_else(|| {
        AppError::Unauthorized(format!("Rol desconocido en el token: {}", claims.rol))
    })?;
    let user_id: i32 = claims.sub.parse().map_err(|_| {
        AppError::Unauthorized("El identificador de usuario del token no es válido".to_string())
    })?;

    let user = AuthenticatedUser {
        user_id,
        nombre: claims.nombre,
        rol,
        empresa_id: claims.empresa_id,
        permisos: claims.permisos,
    };

    tracing::debug!("Usuario autenticado: {} (rol {})", user.user_id, rol.as_str());
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
