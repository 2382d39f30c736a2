//! Envoltorio estándar de las respuestas de escritura

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializa_sin_campos_nulos() {
        let respuesta = ApiResponse::success(42);
        let json = serde_json::to_value(&respuesta).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn incluye_el_mensaje_cuando_existe() {
        let respuesta = ApiResponse::success_with_message(1, "Creado".to_string());
        let json = serde_json::to_value(&respuesta).unwrap();

        assert_eq!(json["message"], "Creado");
    }
}
