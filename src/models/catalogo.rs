//! Catálogos de tipos y estados de mantención
//!
//! Son tablas de referencia sin borrado: las mantenciones históricas
//! siguen apuntando a sus filas.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Tipo de mantención (ej: Preventiva, Correctiva, Emergencia)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TipoMantencion {
    pub id: i32,
    pub nombre: String,
}

/// Estado de una mantención (ej: Pendiente, En Proceso, Completado)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EstadoMantencion {
    pub id: i32,
    pub nombre: String,
}

/// Request compartido por ambos catálogos (crear y actualizar)
#[derive(Debug, Deserialize, Validate)]
pub struct CatalogoRequest {
    #[validate(length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres"))]
    pub nombre: String,
}
