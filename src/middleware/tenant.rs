//! Resolución del alcance de empresa
//!
//! Debe ejecutarse después de `auth_middleware`. Deja un `TenantScope`
//! como extensión: sin restricción para administradores, restringido a la
//! empresa del token para el resto.

use axum::{extract::Request, middleware::Next, response::Response};

use crate::models::auth::{AuthenticatedUser, TenantScope};
use crate::utils::errors::AppError;

pub async fn tenant_middleware(mut request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .cloned()
        .ok_or_else(|| AppError::Unauthorized("Usuario no autenticado".to_string()))?;

    let scope = TenantScope::para(&user)?;
    request.extensions_mut().insert(scope);

    Ok(next.run(request).await)
}
