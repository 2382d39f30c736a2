//! Repositorio de los catálogos de tipos y estados de mantención

use sqlx::PgPool;

use crate::models::catalogo::{EstadoMantencion, TipoMantencion};
use crate::utils::errors::AppError;

pub struct CatalogoRepository {
    pool: PgPool,
}

impl CatalogoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // --- Tipos de mantención ---

    pub async fn listar_tipos(&self) -> Result<Vec<TipoMantencion>, AppError> {
        let tipos = sqlx::query_as::<_, TipoMantencion>(
            "SELECT id, nombre FROM tipos_mantencion ORDER BY nombre",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tipos)
    }

    pub async fn buscar_tipo(&self, id: i32) -> Result<Option<TipoMantencion>, AppError> {
        let tipo = sqlx::query_as::<_, TipoMantencion>(
            "SELECT id, nombre FROM tipos_mantencion WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tipo)
    }

    pub async fn existe_tipo(&self, id: i32) -> Result<bool, AppError> {
        let (existe,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM tipos_mantencion WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(existe)
    }

    pub async fn crear_tipo(&self, nombre: &str) -> Result<TipoMantencion, AppError> {
        let tipo = sqlx::query_as::<_, TipoMantencion>(
            "INSERT INTO tipos_mantencion (nombre) VALUES ($1) RETURNING id, nombre",
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await?;

        Ok(tipo)
    }

    pub async fn actualizar_tipo(
        &self,
        id: i32,
        nombre: &str,
    ) -> Result<Option<TipoMantencion>, AppError> {
        let tipo = sqlx::query_as::<_, TipoMantencion>(
            "UPDATE tipos_mantencion SET nombre = $2 WHERE id = $1 RETURNING id, nombre",
        )
        .bind(id)
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tipo)
    }

    // --- Estados de mantención ---

    pub async fn listar_estados(&self) -> Result<Vec<EstadoMantencion>, AppError> {
        let estados = sqlx::query_as::<_, EstadoMantencion>(
            "SELECT id, nombre FROM estados_mantencion ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(estados)
    }

    pub async fn buscar_estado(&self, id: i32) -> Result<Option<EstadoMantencion>, AppError> {
        let estado = sqlx::query_as::<_, EstadoMantencion>(
            "SELECT id, nombre FROM estados_mantencion WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(estado)
    }

    pub async fn existe_estado(&self, id: i32) -> Result<bool, AppError> {
        let (existe,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM estados_mantencion WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(existe)
    }

    pub async fn crear_estado(&self, nombre: &str) -> Result<EstadoMantencion, AppError> {
        let estado = sqlx::query_as::<_, EstadoMantencion>(
            "INSERT INTO estados_mantencion (nombre) VALUES ($1) RETURNING id, nombre",
        )
        .bind(nombre)
        .fetch_one(&self.pool)
        .await?;

        Ok(estado)
    }

    pub async fn actualizar_estado(
        &self,
        id: i32,
        nombre: &str,
    ) -> Result<Option<EstadoMantencion>, AppError> {
        let estado = sqlx::query_as::<_, EstadoMantencion>(
            "UPDATE estados_mantencion SET nombre = $2 WHERE id = $1 RETURNING id, nombre",
        )
        .bind(id)
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await?;

        Ok(estado)
    }
}
