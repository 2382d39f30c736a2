use sqlx::PgPool;

use crate::models::maquina::{CreateMaquinaRequest, Maquina, UpdateMaquinaRequest};
use crate::utils::errors::AppError;

pub struct MaquinaRepository {
    pool: PgPool,
}

impl MaquinaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self, empresa_id: Option<i32>) -> Result<Vec<Maquina>, AppError> {
        let maquinas = sqlx::query_as::<_, Maquina>(
            "SELECT * FROM maquinas
             WHERE eliminado = false AND ($1::int4 IS NULL OR empresa_id = $1)
             ORDER BY codigo",
        )
        .bind(empresa_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(maquinas)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Maquina>, AppError> {
        let maquina = sqlx::query_as::<_, Maquina>(
            "SELECT * FROM maquinas WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(maquina)
    }

    /// El código de máquina es único dentro de cada empresa.
    pub async fn codigo_existe(&self, codigo: &str, empresa_id: i32) -> Result<bool, AppError> {
        let (existe,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                SELECT 1 FROM maquinas
                WHERE codigo = $1 AND empresa_id = $2 AND eliminado = false
             )",
        )
        .bind(codigo)
        .bind(empresa_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(existe)
    }

    pub async fn crear(
        &self,
        empresa_id: i32,
        request: &CreateMaquinaRequest,
    ) -> Result<Maquina, AppError> {
        let maquina = sqlx::query_as::<_, Maquina>(
            "INSERT INTO maquinas (codigo, marca, modelo, empresa_id, disponible, vencimiento_revision_tecnica)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(&request.codigo)
        .bind(&request.marca)
        .bind(&request.modelo)
        .bind(empresa_id)
        .bind(request.disponible.unwrap_or(true))
        .bind(request.vencimiento_revision_tecnica)
        .fetch_one(&self.pool)
        .await?;

        Ok(maquina)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: UpdateMaquinaRequest,
    ) -> Result<Option<Maquina>, AppError> {
        let actual = match self.buscar_por_id(id).await? {
            Some(maquina) => maquina,
            None => return Ok(None),
        };

        let maquina = sqlx::query_as::<_, Maquina>(
            "UPDATE maquinas
             SET codigo = $2, marca = $3, modelo = $4, disponible = $5,
                 vencimiento_revision_tecnica = $6
             WHERE id = $1 AND eliminado = false
             RETURNING *",
        )
        .bind(id)
        .bind(request.codigo.unwrap_or(actual.codigo))
        .bind(request.marca.or(actual.marca))
        .bind(request.modelo.or(actual.modelo))
        .bind(request.disponible.unwrap_or(actual.disponible))
        .bind(
            request
                .vencimiento_revision_tecnica
                .or(actual.vencimiento_revision_tecnica),
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(maquina))
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE maquinas SET eliminado = true WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
