//! Identidad del usuario autenticado y alcance de empresa

use serde::{Deserialize, Serialize};

use crate::utils::errors::AppError;

/// Roles reconocidos en los tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rol {
    Admin,
    Supervisor,
    Operador,
}

impl Rol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rol::Admin => "admin",
            Rol::Supervisor => "supervisor",
            Rol::Operador => "operador",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Rol::Admin),
            "supervisor" => Some(Rol::Supervisor),
            "operador" => Some(Rol::Operador),
            _ => None,
        }
    }
}

/// Usuario autenticado, inyectado como extensión en cada request
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub nombre: String,
    pub rol: Rol,
    pub empresa_id: Option<i32>,
    pub permisos: Vec<String>,
}

impl AuthenticatedUser {
    pub fn tiene_permiso(&self, permiso: &str) -> bool {
        self.permisos.iter().any(|p| p == permiso)
    }
}

/// Alcance de empresa del usuario.
///
/// `None` significa sin restricción (administrador); `Some(id)` restringe
/// todas las consultas a esa empresa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantScope(pub Option<i32>);

impl TenantScope {
    /// Deriva el alcance a partir del usuario autenticado.
    ///
    /// Un usuario no administrador sin empresa asociada es un token mal
    /// emitido y se rechaza.
    pub fn para(user: &AuthenticatedUser) -> Result<Self, AppError> {
        match user.rol {
            Rol::Admin => Ok(TenantScope(None)),
            _ => user
                .empresa_id
                .map(|id| TenantScope(Some(id)))
                .ok_or_else(|| {
                    AppError::Unauthorized(
                        "El token no incluye una empresa asociada".to_string(),
                    )
                }),
        }
    }

    pub fn empresa_id(&self) -> Option<i32> {
        self.0
    }

    pub fn permite_empresa(&self, empresa_id: i32) -> bool {
        match self.0 {
            None => true,
            Some(id) => id == empresa_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(rol: Rol, empresa_id: Option<i32>) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: 1,
            nombre: "Prueba".to_string(),
            rol,
            empresa_id,
            permisos: vec!["maquinas".to_string()],
        }
    }

    #[test]
    fn admin_no_tiene_restriccion() {
        let scope = TenantScope::para(&usuario(Rol::Admin, Some(9))).unwrap();
        assert_eq!(scope.empresa_id(), None);
        assert!(scope.permite_empresa(1));
        assert!(scope.permite_empresa(9));
    }

    #[test]
    fn operador_queda_restringido_a_su_empresa() {
        let scope = TenantScope::para(&usuario(Rol::Operador, Some(4))).unwrap();
        assert_eq!(scope.empresa_id(), Some(4));
        assert!(scope.permite_empresa(4));
        assert!(!scope.permite_empresa(5));
    }

    #[test]
    fn no_admin_sin_empresa_es_rechazado() {
        assert!(TenantScope::para(&usuario(Rol::Supervisor, None)).is_err());
    }

    #[test]
    fn tiene_permiso_compara_por_nombre_exacto() {
        let user = usuario(Rol::Operador, Some(1));
        assert!(user.tiene_permiso("maquinas"));
        assert!(!user.tiene_permiso("estadisticas"));
    }

    #[test]
    fn roles_se_convierten_ida_y_vuelta() {
        for rol in [Rol::Admin, Rol::Supervisor, Rol::Operador] {
            assert_eq!(Rol::from_str(rol.as_str()), Some(rol));
        }
        assert_eq!(Rol::from_str("gerente"), None);
    }
}
