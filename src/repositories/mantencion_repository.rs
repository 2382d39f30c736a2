use sqlx::PgPool;

use crate::models::mantencion::{CreateMantencionRequest, Mantencion, UpdateMantencionRequest};
use crate::utils::errors::AppError;

pub struct MantencionRepository {
    pool: PgPool,
}

impl MantencionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lista mantenciones no eliminadas, el alcance se aplica a través de
    /// la máquina asociada.
    pub async fn listar(
        &self,
        empresa_id: Option<i32>,
        maquina_id: Option<i32>,
    ) -> Result<Vec<Mantencion>, AppError> {
        let mantenciones = sqlx::query_as::<_, Mantencion>(
            "SELECT m.* FROM mantenciones m
             JOIN maquinas mq ON mq.id = m.maquina_id
             WHERE m.eliminado = false
               AND ($1::int4 IS NULL OR mq.empresa_id = $1)
               AND ($2::int4 IS NULL OR m.maquina_id = $2)
             ORDER BY m.fecha_inicio DESC, m.id DESC",
        )
        .bind(empresa_id)
        .bind(maquina_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(mantenciones)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Mantencion>, AppError> {
        let mantencion = sqlx::query_as::<_, Mantencion>(
            "SELECT * FROM mantenciones WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(mantencion)
    }

    pub async fn crear(&self, request: &CreateMantencionRequest) -> Result<Mantencion, AppError> {
        let mantencion = sqlx::query_as::<_, Mantencion>(
            "INSERT INTO mantenciones
                 (fecha_inicio, maquina_id, tipo_mantencion_id, estado_mantencion_id, costo, descripcion)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING *",
        )
        .bind(request.fecha_inicio)
        .bind(request.maquina_id)
        .bind(request.tipo_mantencion_id)
        .bind(request.estado_mantencion_id)
        .bind(request.costo)
        .bind(&request.descripcion)
        .fetch_one(&self.pool)
        .await?;

        Ok(mantencion)
    }

    pub async fn actualizar(
        &self,
        id: i32,
        request: UpdateMantencionRequest,
    ) -> Result<Option<Mantencion>, AppError> {
        let actual = match self.buscar_por_id(id).await? {
            Some(mantencion) => mantencion,
            None => return Ok(None),
        };

        let mantencion = sqlx::query_as::<_, Mantencion>(
            "UPDATE mantenciones
             SET fecha_inicio = $2, maquina_id = $3, tipo_mantencion_id = $4,
                 estado_mantencion_id = $5, costo = $6, descripcion = $7
             WHERE id = $1 AND eliminado = false
             RETURNING *",
        )
        .bind(id)
        .bind(request.fecha_inicio.unwrap_or(actual.fecha_inicio))
        .bind(request.maquina_id.unwrap_or(actual.maquina_id))
        .bind(request.tipo_mantencion_id.unwrap_or(actual.tipo_mantencion_id))
        .bind(
            request
                .estado_mantencion_id
                .unwrap_or(actual.estado_mantencion_id),
        )
        .bind(request.costo.or(actual.costo))
        .bind(request.descripcion.or(actual.descripcion))
        .fetch_one(&self.pool)
        .await?;

        Ok(Some(mantencion))
    }

    pub async fn eliminar(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE mantenciones SET eliminado = true WHERE id = $1 AND eliminado = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
