//! Verificación de tokens JWT
//!
//! Los tokens se emiten en un servicio de identidad externo; esta API
//! solo los verifica. `generate_token` existe para las pruebas y para
//! herramientas de operación.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Claims del token de acceso
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Identificador del usuario
    pub sub: String,
    pub nombre: String,
    pub rol: String,
    /// Empresa asociada; los administradores pueden no tener una
    pub empresa_id: Option<i32>,
    pub permisos: Vec<String>,
    pub exp: i64,
    pub iat: i64,
}

pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("No se pudo generar el token: {}", e)))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Token inválido: {}", e)))
}

/// Extrae el token del header `Authorization: Bearer <token>`.
pub fn extract_token_from_header(auth_header: &str) -> Result<&str, AppError> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppError::Unauthorized("Formato de autorización inválido, se espera 'Bearer <token>'".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "secreto-de-prueba";

    fn claims_de_prueba() -> Claims {
        let ahora = chrono::Utc::now().timestamp();
        Claims {
            sub: "42".to_string(),
            nombre: "María Soto".to_string(),
            rol: "supervisor".to_string(),
            empresa_id: Some(3),
            permisos: vec!["maquinas".to_string(), "estadisticas".to_string()],
            exp: ahora + 3600,
            iat: ahora,
        }
    }

    #[test]
    fn genera_y_verifica_un_token() {
        let claims = claims_de_prueba();
        let token = generate_token(&claims, SECRET).expect("generar token");
        let verificados = verify_token(&token, SECRET).expect("verificar token");

        assert_eq!(verificados.sub, "42");
        assert_eq!(verificados.empresa_id, Some(3));
        assert_eq!(verificados.permisos.len(), 2);
    }

    #[test]
    fn rechaza_un_token_con_otra_firma() {
        let claims = claims_de_prueba();
        let token = generate_token(&claims, SECRET).expect("generar token");

        assert!(verify_token(&token, "otro-secreto").is_err());
    }

    #[test]
    fn rechaza_un_token_expirado() {
        let mut claims = claims_de_prueba();
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = generate_token(&claims, SECRET).expect("generar token");

        assert!(verify_token(&token, SECRET).is_err());
    }

    #[test]
    fn extrae_el_token_del_header() {
        assert_eq!(extract_token_from_header("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(extract_token_from_header("abc.def.ghi").is_err());
        assert!(extract_token_from_header("Bearer ").is_err());
    }
}
