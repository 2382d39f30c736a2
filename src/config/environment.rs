//! Configuración por variables de entorno

use std::env;

/// Configuración derivada del entorno de ejecución
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub cors_origins: Vec<String>,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "secreto-de-desarrollo-cambiar-en-produccion".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_de_prueba() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "development".to_string(),
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: "secreto".to_string(),
            cors_origins: vec![],
        }
    }

    #[test]
    fn server_url_incluye_host_y_puerto() {
        let config = config_de_prueba();
        assert_eq!(config.server_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn is_development_depende_del_entorno() {
        let mut config = config_de_prueba();
        assert!(config.is_development());

        config.environment = "production".to_string();
        assert!(!config.is_development());
    }
}
