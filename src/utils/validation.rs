//! Validaciones compartidas

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::errors::AppError;

lazy_static! {
    /// Formato "YYYY-MM" con mes entre 01 y 12
    static ref MES_RE: Regex = Regex::new(r"^\d{4}-(0[1-9]|1[0-2])$").unwrap();
}

/// Valida el filtro de mes "YYYY-MM" antes de usarlo en una consulta.
pub fn validar_mes(mes: &str) -> Result<(), AppError> {
    if MES_RE.is_match(mes) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "El mes '{}' no es válido, se espera el formato YYYY-MM",
            mes
        )))
    }
}

/// Valida los parámetros de paginación (page 1-based, limit acotado).
pub fn validar_paginacion(page: i64, limit: i64) -> Result<(), AppError> {
    if page < 1 {
        return Err(AppError::BadRequest(
            "El parámetro page debe ser mayor o igual a 1".to_string(),
        ));
    }
    if limit < 1 || limit > 100 {
        return Err(AppError::BadRequest(
            "El parámetro limit debe estar entre 1 y 100".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acepta_meses_bien_formados() {
        assert!(validar_mes("2024-01").is_ok());
        assert!(validar_mes("2024-12").is_ok());
        assert!(validar_mes("1999-06").is_ok());
    }

    #[test]
    fn rechaza_meses_mal_formados() {
        for mes in ["2024-13", "2024-00", "2024-1", "24-01", "marzo", "2024-03-15", ""] {
            assert!(validar_mes(mes).is_err(), "debió rechazar '{}'", mes);
        }
    }

    #[test]
    fn valida_rangos_de_paginacion() {
        assert!(validar_paginacion(1, 5).is_ok());
        assert!(validar_paginacion(200, 100).is_ok());

        assert!(validar_paginacion(0, 5).is_err());
        assert!(validar_paginacion(-1, 5).is_err());
        assert!(validar_paginacion(1, 0).is_err());
        assert!(validar_paginacion(1, 101).is_err());
    }
}
