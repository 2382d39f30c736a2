//! Servicios de la aplicación

pub mod stats_service;

pub use stats_service::StatsService;
