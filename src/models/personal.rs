//! Modelo de Personal

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Trabajador de una empresa - mapea a la tabla `personal`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Personal {
    pub id: i32,
    pub nombre: String,
    pub rut: String,
    pub cargo: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub empresa_id: i32,
    pub eliminado: bool,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePersonalRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener entre 2 y 255 caracteres"))]
    pub nombre: String,
    #[validate(length(min = 8, max = 20, message = "El RUT debe tener entre 8 y 20 caracteres"))]
    pub rut: String,
    #[validate(length(max = 100))]
    pub cargo: Option<String>,
    #[validate(email(message = "El email no es válido"))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub telefono: Option<String>,
    /// Obligatorio para usuarios sin restricción de empresa
    pub empresa_id: Option<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePersonalRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener entre 2 y 255 caracteres"))]
    pub nombre: Option<String>,
    #[validate(length(min = 8, max = 20, message = "El RUT debe tener entre 8 y 20 caracteres"))]
    pub rut: Option<String>,
    #[validate(length(max = 100))]
    pub cargo: Option<String>,
    #[validate(email(message = "El email no es válido"))]
    pub email: Option<String>,
    #[validate(length(max = 30))]
    pub telefono: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PersonalResponse {
    pub id: i32,
    pub nombre: String,
    pub rut: String,
    pub cargo: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub empresa_id: i32,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Personal> for PersonalResponse {
    fn from(personal: Personal) -> Self {
        Self {
            id: personal.id,
            nombre: personal.nombre,
            rut: personal.rut,
            cargo: personal.cargo,
            email: personal.email,
            telefono: personal.telefono,
            empresa_id: personal.empresa_id,
            fecha_creacion: personal.fecha_creacion,
        }
    }
}
