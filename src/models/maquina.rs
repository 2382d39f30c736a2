//! Modelo de Máquina

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Máquina de una empresa - mapea a la tabla `maquinas`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Maquina {
    pub id: i32,
    pub codigo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub empresa_id: i32,
    pub disponible: bool,
    /// Vencimiento de la revisión técnica; vencida cuando es anterior a hoy
    pub vencimiento_revision_tecnica: Option<NaiveDate>,
    pub eliminado: bool,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaquinaRequest {
    #[validate(length(min = 1, max = 50, message = "El código debe tener entre 1 y 50 caracteres"))]
    pub codigo: String,
    #[validate(length(max = 100))]
    pub marca: Option<String>,
    #[validate(length(max = 100))]
    pub modelo: Option<String>,
    /// Obligatorio para usuarios sin restricción de empresa
    pub empresa_id: Option<i32>,
    pub disponible: Option<bool>,
    pub vencimiento_revision_tecnica: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaquinaRequest {
    #[validate(length(min = 1, max = 50, message = "El código debe tener entre 1 y 50 caracteres"))]
    pub codigo: Option<String>,
    #[validate(length(max = 100))]
    pub marca: Option<String>,
    #[validate(length(max = 100))]
    pub modelo: Option<String>,
    pub disponible: Option<bool>,
    pub vencimiento_revision_tecnica: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct MaquinaResponse {
    pub id: i32,
    pub codigo: String,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub empresa_id: i32,
    pub disponible: bool,
    pub vencimiento_revision_tecnica: Option<NaiveDate>,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Maquina> for MaquinaResponse {
    fn from(maquina: Maquina) -> Self {
        Self {
            id: maquina.id,
            codigo: maquina.codigo,
            marca: maquina.marca,
            modelo: maquina.modelo,
            empresa_id: maquina.empresa_id,
            disponible: maquina.disponible,
            vencimiento_revision_tecnica: maquina.vencimiento_revision_tecnica,
            fecha_creacion: maquina.fecha_creacion,
        }
    }
}
