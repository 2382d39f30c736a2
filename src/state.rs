//! Estado compartido de la aplicación

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;

/// Estado global accesible desde todos los handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }
}
