//! Repositorios: acceso a datos con SQL parametrizado

pub mod catalogo_repository;
pub mod empresa_repository;
pub mod mantencion_repository;
pub mod maquina_repository;
pub mod personal_repository;
pub mod stats_repository;
