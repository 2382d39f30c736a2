use crate::dto::common_dto::ApiResponse;
use crate::models::auth::TenantScope;
use crate::models::mantencion::{
    CreateMantencionRequest, MantencionFilters, MantencionResponse, UpdateMantencionRequest,
};
use crate::repositories::catalogo_repository::CatalogoRepository;
use crate::repositories::mantencion_repository::MantencionRepository;
use crate::repositories::maquina_repository::MaquinaRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct MantencionController {
    repository: MantencionRepository,
    maquinas: MaquinaRepository,
    catalogos: CatalogoRepository,
}

impl MantencionController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MantencionRepository::new(pool.clone()),
            maquinas: MaquinaRepository::new(pool.clone()),
            catalogos: CatalogoRepository::new(pool),
        }
    }

    pub async fn listar(
        &self,
        scope: TenantScope,
        filtros: MantencionFilters,
    ) -> Result<Vec<MantencionResponse>, AppError> {
        let mantenciones = self
            .repository
            .listar(scope.empresa_id(), filtros.maquina_id)
            .await?;

        Ok(mantenciones
            .into_iter()
            .map(MantencionResponse::from)
            .collect())
    }

    pub async fn obtener(
        &self,
        id: i32,
        scope: TenantScope,
    ) -> Result<MantencionResponse, AppError> {
        let mantencion = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        // El alcance se resuelve a través de la máquina asociada
        self.verificar_alcance(mantencion.maquina_id, scope).await?;

        Ok(MantencionResponse::from(mantencion))
    }

    pub async fn crear(
        &self,
        scope: TenantScope,
        request: CreateMantencionRequest,
    ) -> Result<ApiResponse<MantencionResponse>, AppError> {
        // Validar campos
        request.validate()?;

        self.validar_maquina(request.maquina_id, scope).await?;
        self.validar_catalogos(
            Some(request.tipo_mantencion_id),
            Some(request.estado_mantencion_id),
        )
        .await?;

        let mantencion = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            MantencionResponse::from(mantencion),
            "Mantención creada exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        scope: TenantScope,
        request: UpdateMantencionRequest,
    ) -> Result<ApiResponse<MantencionResponse>, AppError> {
        request.validate()?;

        let actual = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        self.verificar_alcance(actual.maquina_id, scope).await?;

        // Las referencias nuevas se validan antes de escribir
        if let Some(maquina_id) = request.maquina_id {
            self.validar_maquina(maquina_id, scope).await?;
        }
        self.validar_catalogos(request.tipo_mantencion_id, request.estado_mantencion_id)
            .await?;

        let mantencion = self
            .repository
            .actualizar(id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            MantencionResponse::from(mantencion),
            "Mantención actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32, scope: TenantScope) -> Result<(), AppError> {
        let mantencion = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        self.verificar_alcance(mantencion.maquina_id, scope).await?;

        if !self.repository.eliminar(id).await? {
            return Err(AppError::NotFound("Mantención no encontrada".to_string()));
        }

        Ok(())
    }

    /// Confirma que la máquina asociada sigue visible para el alcance del usuario.
    /// Una máquina eliminada deja la mantención fuera de todas las lecturas.
    async fn verificar_alcance(&self, maquina_id: i32, scope: TenantScope) -> Result<(), AppError> {
        let maquina = self
            .maquinas
            .buscar_por_id(maquina_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Mantención no encontrada".to_string()))?;

        if !scope.permite_empresa(maquina.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a esta mantención".to_string(),
            ));
        }

        Ok(())
    }

    /// Valida una máquina referenciada en un request de escritura
    async fn validar_maquina(&self, maquina_id: i32, scope: TenantScope) -> Result<(), AppError> {
        let maquina = self
            .maquinas
            .buscar_por_id(maquina_id)
            .await?
            .ok_or_else(|| AppError::BadRequest("La máquina indicada no existe".to_string()))?;

        if !scope.permite_empresa(maquina.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a esta máquina".to_string(),
            ));
        }

        Ok(())
    }

    /// Valida los catálogos referenciados cuando vienen en el request
    async fn validar_catalogos(
        &self,
        tipo_mantencion_id: Option<i32>,
        estado_mantencion_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(tipo_id) = tipo_mantencion_id {
            if !self.catalogos.existe_tipo(tipo_id).await? {
                return Err(AppError::BadRequest(
                    "El tipo de mantención indicado no existe".to_string(),
                ));
            }
        }

        if let Some(estado_id) = estado_mantencion_id {
            if !self.catalogos.existe_estado(estado_id).await? {
                return Err(AppError::BadRequest(
                    "El estado de mantención indicado no existe".to_string(),
                ));
            }
        }

        Ok(())
    }
}
