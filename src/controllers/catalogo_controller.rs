use crate::dto::common_dto::ApiResponse;
use crate::models::catalogo::{CatalogoRequest, EstadoMantencion, TipoMantencion};
use crate::repositories::catalogo_repository::CatalogoRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

/// Los catálogos son globales: no se filtran por empresa y no se eliminan,
/// porque el historial de mantenciones los referencia.
pub struct CatalogoController {
    repository: CatalogoRepository,
}

impl CatalogoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CatalogoRepository::new(pool),
        }
    }

    // --- Tipos de mantención ---

    pub async fn listar_tipos(&self) -> Result<Vec<TipoMantencion>, AppError> {
        self.repository.listar_tipos().await
    }

    pub async fn obtener_tipo(&self, id: i32) -> Result<TipoMantencion, AppError> {
        self.repository
            .buscar_tipo(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de mantención no encontrado".to_string()))
    }

    pub async fn crear_tipo(
        &self,
        request: CatalogoRequest,
    ) -> Result<ApiResponse<TipoMantencion>, AppError> {
        // Validar campos
        request.validate()?;

        let tipo = self.repository.crear_tipo(&request.nombre).await?;

        Ok(ApiResponse::success_with_message(
            tipo,
            "Tipo de mantención creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar_tipo(
        &self,
        id: i32,
        request: CatalogoRequest,
    ) -> Result<ApiResponse<TipoMantencion>, AppError> {
        request.validate()?;

        let tipo = self
            .repository
            .actualizar_tipo(id, &request.nombre)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de mantención no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            tipo,
            "Tipo de mantención actualizado exitosamente".to_string(),
        ))
    }

    // --- Estados de mantención ---

    pub async fn listar_estados(&self) -> Result<Vec<EstadoMantencion>, AppError> {
        self.repository.listar_estados().await
    }

    pub async fn obtener_estado(&self, id: i32) -> Result<EstadoMantencion, AppError> {
        self.repository
            .buscar_estado(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Estado de mantención no encontrado".to_string()))
    }

    pub async fn crear_estado(
        &self,
        request: CatalogoRequest,
    ) -> Result<ApiResponse<EstadoMantencion>, AppError> {
        request.validate()?;

        let estado = self.repository.crear_estado(&request.nombre).await?;

        Ok(ApiResponse::success_with_message(
            estado,
            "Estado de mantención creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar_estado(
        &self,
        id: i32,
        request: CatalogoRequest,
    ) -> Result<ApiResponse<EstadoMantencion>, AppError> {
        request.validate()?;

        let estado = self
            .repository
            .actualizar_estado(id, &request.nombre)
            .await?
            .ok_or_else(|| AppError::NotFound("Estado de mantención no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            estado,
            "Estado de mantención actualizado exitosamente".to_string(),
        ))
    }
}
