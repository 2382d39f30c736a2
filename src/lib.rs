//! API REST para la gestión de mantención de flotas de maquinaria.
//!
//! Expone recursos CRUD (empresas, personal, máquinas, mantenciones,
//! catálogos) y un módulo de estadísticas de mantención sobre PostgreSQL.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
