use sqlx::PgPool;

use crate::models::personal::{CreatePersonalRequest, Personal, UpdatePersonalRequest};
use crate::utils::errors::AppError;

pub struct PersonalRepository {
    pool: PgPool,
}

impl PersonalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self, empresa_id: Option<i32>) -> Result<Vec<Personal>, AppError> {
        let personal = sqlx::query_as::<_, Personal>(
            "SELECT * FROM personal
             WHERE eliminado = false AND ($1::int4 IS NULL OR empresa_id = $1)
             ORDER BY nombre",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(personal)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Personal>, AppError> {
        let personal = sqlx::query_as::<_, Personal>(
            "SELECT * FROM personal WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(personal)
    }

    /// El RUT es único entre el personal activo de una empresa.
    pub async fn rut_existe(&self, rut: &str, empresa_id: i32) -> Result<bool, AppError> {
        let (existe,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM personal
                WHERE rut = $1 AND empresa_id = $2 AND eliminado = false
             )",
        )
        .bind(rut)
        .bind(empresa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(existe)
    }

    pub async fn crear(
        &self,
        empresa_id: i32,
        request: &CreatePersonalRequest,
    ) -> Result<Personal, AppError> {
        let personal = sqlx::query_as::<_, Personal>(
            "INSERT INTO personal (nombre, rut, cargo, email, telefono, empresa_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&request.nombre)
        .bind(&request.rut)
        .bind(&request.cargo)
        .bind(&request.email)
        .bind(&request.telefono)
        .bind(empresa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(personal)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: UpdatePersonalRequest,
    ) -> Result<Option<Personal>, AppError> {
        let actual = match self.buscar_por_id(id).await? {
            Some(personal) => personal,
            None => return Ok(None),
        };

        let personal = sqlx::query_as::<_, Personal>(
            "UPDATE personal
             SET nombre = $2, rut = $3, cargo = $4, email = $5, telefono = $6
             WHERE id = $1 AND eliminado = false
             RETURNING *",
        )
        .bind(id)
        .bind(request.nombre.unwrap_or(actual.nombre))
        .bind(request.rut.unwrap_or(actual.rut))
        .bind(request.cargo.or(actual.cargo))
        .bind(request.email.or(actual.email))
        .bind(request.telefono.or(actual.telefono))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(personal))
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE personal SET eliminado = true WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
