//! Middleware de la API
//!
//! Orden de ejecución sobre `/api`: autenticación JWT → resolución del
//! alcance de empresa → permiso del recurso (cuando el router lo exige).

pub mod auth;
pub mod cors;
pub mod permissions;
pub mod tenant;

pub use auth::auth_middleware;
pub use cors::{cors_middleware, cors_middleware_with_origins};
pub use tenant::tenant_middleware;
