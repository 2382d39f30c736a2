//! Sistema de manejo de errores
//!
//! Todos los errores de la aplicación se convierten en una respuesta JSON
//! con el formato `{error, message, details?, code?}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error estándar de la API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, details) = match self {
            AppError::Database(ref e) => {
                // El detalle del error de la base se expone para diagnóstico
                tracing::error!("Error de base de datos: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database Error",
                    "Ocurrió un error al consultar la base de datos".to_string(),
                    Some(serde_json::json!({ "sql_error": e.to_string() })),
                )
            }
            AppError::Validation(ref e) => (
                StatusCode::BAD_REQUEST,
                "Validation Error",
                "Los datos enviados no son válidos".to_string(),
                Some(serde_json::json!({ "fields": e.to_string() })),
            ),
            AppError::Unauthorized(message) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized", message, None)
            }
            AppError::Forbidden(message) => (StatusCode::FORBIDDEN, "Forbidden", message, None),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, "Not Found", message, None),
            AppError::Conflict(message) => (StatusCode::CONFLICT, "Conflict", message, None),
            AppError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, "Bad Request", message, None)
            }
            AppError::Internal(message) => {
                tracing::error!("Error interno: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    message,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
            code: Some(status.as_u16().to_string()),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errores_de_cliente_mapean_a_4xx() {
        let casos = vec![
            (
                AppError::BadRequest("page inválido".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Unauthorized("sin token".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::Forbidden("sin permiso".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::NotFound("no existe".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::Conflict("duplicado".to_string()),
                StatusCode::CONFLICT,
            ),
        ];

        for (error, esperado) in casos {
            assert_eq!(error.into_response().status(), esperado);
        }
    }

    #[test]
    fn errores_de_servidor_mapean_a_500() {
        let error = AppError::Internal("algo falló".to_string());
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let error = AppError::Database(sqlx::Error::PoolClosed);
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
