use sqlx::PgPool;

use crate::models::empresa::{CreateEmpresaRequest, Empresa, UpdateEmpresaRequest};
use crate::utils::errors::AppError;

pub struct EmpresaRepository {
    pool: PgPool,
}

impl EmpresaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista las empresas no eliminadas; con alcance restringido solo la propia.
    pub async fn listar(&self, empresa_id: Option<i32>) -> Result<Vec<Empresa>, AppError> {
        let empresas = sqlx::query_as::<_, Empresa>(
            "SELECT * FROM empresas
             WHERE eliminado = false AND ($1::int4 IS NULL OR id = $1)
             ORDER BY nombre",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(empresas)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Empresa>, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            "SELECT * FROM empresas WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(empresa)
    }

    pub async fn existe(&self, id: i32) -> Result<bool, AppError> {
        let (existe,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM empresas WHERE id = $1 AND eliminado = false)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(existe)
    }

    pub async fn crear(&self, request: &CreateEmpresaRequest) -> Result<Empresa, AppError> {
        let empresa = sqlx::query_as::<_, Empresa>(
            "INSERT INTO empresas (nombre, rut, direccion, telefono)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(&request.nombre)
        .bind(&request.rut)
        .bind(&request.direccion)
        .bind(&request.telefono)
        .fetch_one(&self.pool)
        .await?;

        Ok(empresa)
    }

    /// Actualiza los campos presentes; devuelve `None` si la empresa no existe.
    pub async fn actualizar(
        &self,
        id: i32,
        request: UpdateEmpresaRequest,
    ) -> Result<Option<Empresa>, AppError> {
        let actual = match self.buscar_por_id(id).await? {
            Some(empresa) => empresa,
            None => return Ok(None),
        };

        let empresa = sqlx::query_as::<_, Empresa>(
            "UPDATE empresas
             SET nombre = $2, rut = $3, direccion = $4, telefono = $5
             WHERE id = $1 AND eliminado = false
             RETURNING *",
        )
        .bind(id)
        .bind(request.nombre.unwrap_or(actual.nombre))
        .bind(request.rut.or(actual.rut))
        .bind(request.direccion.or(actual.direccion))
        .bind(request.telefono.or(actual.telefono))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(empresa))
    }

    /// Borrado lógico; devuelve `false` si no había fila que marcar.
    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE empresas SET eliminado = true WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
