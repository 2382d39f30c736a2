//! Modelo de Empresa

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Empresa dueña de maquinaria - mapea a la tabla `empresas`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Empresa {
    pub id: i32,
    pub nombre: String,
    pub rut: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub eliminado: bool,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEmpresaRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener entre 2 y 255 caracteres"))]
    pub nombre: String,
    #[validate(length(min = 8, max = 20, message = "El RUT debe tener entre 8 y 20 caracteres"))]
    pub rut: Option<String>,
    #[validate(length(max = 500))]
    pub direccion: Option<String>,
    #[validate(length(max = 30))]
    pub telefono: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateEmpresaRequest {
    #[validate(length(min = 2, max = 255, message = "El nombre debe tener entre 2 y 255 caracteres"))]
    pub nombre: Option<String>,
    #[validate(length(min = 8, max = 20, message = "El RUT debe tener entre 8 y 20 caracteres"))]
    pub rut: Option<String>,
    #[validate(length(max = 500))]
    pub direccion: Option<String>,
    #[validate(length(max = 30))]
    pub telefono: Option<String>,
}

/// Respuesta pública (sin el flag de borrado)
#[derive(Debug, Serialize)]
pub struct EmpresaResponse {
    pub id: i32,
    pub nombre: String,
    pub rut: Option<String>,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Empresa> for EmpresaResponse {
    fn from(empresa: Empresa) -> Self {
        Self {
            id: empresa.id,
            nombre: empresa.nombre,
            rut: empresa.rut,
            direccion: empresa.direccion,
            telefono: empresa.telefono,
            fecha_creacion: empresa.fecha_creacion,
        }
    }
}
