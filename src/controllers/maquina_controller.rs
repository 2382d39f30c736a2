use crate::dto::common_dto::ApiResponse;
use crate::models::auth::TenantScope;
use crate::models::maquina::{CreateMaquinaRequest, MaquinaResponse, UpdateMaquinaRequest};
use crate::repositories::empresa_repository::EmpresaRepository;
use crate::repositories::maquina_repository::MaquinaRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct MaquinaController {
    repository: MaquinaRepository,
    empresas: EmpresaRepository,
}

impl MaquinaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MaquinaRepository::new(pool.clone()),
            empresas: EmpresaRepository::new(pool),
        }
    }

    pub async fn listar(&self, scope: TenantScope) -> Result<Vec<MaquinaResponse>, AppError> {
        let maquinas = self.repository.listar(scope.empresa_id()).await?;

        Ok(maquinas.into_iter().map(MaquinaResponse::from).collect())
    }

    pub async fn obtener(&self, id: i32, scope: TenantScope) -> Result<MaquinaResponse, AppError> {
        let maquina = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Máquina no encontrada".to_string()))?;

        if !scope.permite_empresa(maquina.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a esta máquina".to_string(),
            ));
        }

        Ok(MaquinaResponse::from(maquina))
    }

    pub async fn crear(
        &self,
        scope: TenantScope,
        request: CreateMaquinaRequest,
    ) -> Result<ApiResponse<MaquinaResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Resolver la empresa destino según el alcance del usuario
        let empresa_id = match (scope.empresa_id(), request.empresa_id) {
            (Some(propia), Some(pedida)) if propia != pedida => {
                return Err(AppError::Forbidden(
                    "No puedes crear máquinas para otra empresa".to_string(),
                ))
            }
            (Some(propia), _) => propia,
            (None, Some(pedida)) => pedida,
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Debe indicar la empresa de la máquina".to_string(),
                ))
            }
        };

        if !self.empresas.existe(empresa_id).await? {
            return Err(AppError::BadRequest(
                "La empresa indicada no existe".to_string(),
            ));
        }

        // Verificar que el código no exista para esta empresa
        if self
            .repository
            .codigo_existe(&request.codigo, empresa_id)
            .await?
        {
            return Err(AppError::Conflict(
                "El código ya está registrado para esta empresa".to_string(),
            ));
        }

        let maquina = self.repository.crear(empresa_id, &request).await?;

        Ok(ApiResponse::success_with_message(
            MaquinaResponse::from(maquina),
            "Máquina creada exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        scope: TenantScope,
        request: UpdateMaquinaRequest,
    ) -> Result<ApiResponse<MaquinaResponse>, AppError> {
        request.validate()?;

        let actual = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Máquina no encontrada".to_string()))?;

        if !scope.permite_empresa(actual.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para modificar esta máquina".to_string(),
            ));
        }

        // Si cambia el código, no debe chocar con otra máquina de la empresa
        if let Some(codigo) = &request.codigo {
            if codigo != &actual.codigo
                && self
                    .repository
                    .codigo_existe(codigo, actual.empresa_id)
                    .await?
            {
                return Err(AppError::Conflict(
                    "El código ya está registrado para esta empresa".to_string(),
                ));
            }
        }

        let maquina = self
            .repository
            .actualizar(id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Máquina no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            MaquinaResponse::from(maquina),
            "Máquina actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32, scope: TenantScope) -> Result<(), AppError> {
        let maquina = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Máquina no encontrada".to_string()))?;

        if !scope.permite_empresa(maquina.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para eliminar esta máquina".to_string(),
            ));
        }

        if !self.repository.eliminar(id).await? {
            return Err(AppError::NotFound("Máquina no encontrada".to_string()));
        }

        Ok(())
    }
}
