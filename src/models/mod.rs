//! Modelos de dominio
//!
//! Cada módulo define la entidad (mapeada con `FromRow`), los requests
//! validados y el DTO de respuesta correspondiente.

pub mod auth;
pub mod catalogo;
pub mod empresa;
pub mod mantencion;
pub mod maquina;
pub mod personal;
pub mod stats;
