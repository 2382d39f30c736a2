//! Modelo de Mantención

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Registro de mantención - mapea a la tabla `mantenciones`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Mantencion {
    pub id: i32,
    pub fecha_inicio: NaiveDate,
    pub maquina_id: i32,
    pub tipo_mantencion_id: i32,
    pub estado_mantencion_id: i32,
    pub costo: Option<f64>,
    pub descripcion: Option<String>,
    pub eliminado: bool,
    pub fecha_creacion: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMantencionRequest {
    pub fecha_inicio: NaiveDate,
    pub maquina_id: i32,
    pub tipo_mantencion_id: i32,
    pub estado_mantencion_id: i32,
    #[validate(range(min = 0.0, message = "El costo no puede ser negativo"))]
    pub costo: Option<f64>,
    #[validate(length(max = 1000))]
    pub descripcion: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMantencionRequest {
    pub fecha_inicio: Option<NaiveDate>,
    pub maquina_id: Option<i32>,
    pub tipo_mantencion_id: Option<i32>,
    pub estado_mantencion_id: Option<i32>,
    #[validate(range(min = 0.0, message = "El costo no puede ser negativo"))]
    pub costo: Option<f64>,
    #[validate(length(max = 1000))]
    pub descripcion: Option<String>,
}

/// Filtros opcionales del listado
#[derive(Debug, Deserialize)]
pub struct MantencionFilters {
    pub maquina_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct MantencionResponse {
    pub id: i32,
    pub fecha_inicio: NaiveDate,
    pub maquina_id: i32,
    pub tipo_mantencion_id: i32,
    pub estado_mantencion_id: i32,
    pub costo: Option<f64>,
    pub descripcion: Option<String>,
    pub fecha_creacion: DateTime<Utc>,
}

impl From<Mantencion> for MantencionResponse {
    fn from(mantencion: Mantencion) -> Self {
        Self {
            id: mantencion.id,
            fecha_inicio: mantencion.fecha_inicio,
            maquina_id: mantencion.maquina_id,
            tipo_mantencion_id: mantencion.tipo_mantencion_id,
            estado_mantencion_id: mantencion.estado_mantencion_id,
            costo: mantencion.costo,
            descripcion: mantencion.descripcion,
            fecha_creacion: mantencion.fecha_creacion,
        }
    }
}
