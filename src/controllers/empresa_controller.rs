use crate::dto::common_dto::ApiResponse;
use crate::models::auth::TenantScope;
use crate::models::empresa::{CreateEmpresaRequest, EmpresaResponse, UpdateEmpresaRequest};
use crate::repositories::empresa_repository::EmpresaRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct EmpresaController {
    repository: EmpresaRepository,
}

impl EmpresaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: EmpresaRepository::new(pool),
        }
    }

    pub async fn listar(&self, scope: TenantScope) -> Result<Vec<EmpresaResponse>, AppError> {
        let empresas = self.repository.listar(scope.empresa_id()).await?;

        Ok(empresas.into_iter().map(EmpresaResponse::from).collect())
    }

    pub async fn obtener(&self, id: i32, scope: TenantScope) -> Result<EmpresaResponse, AppError> {
        // El id del recurso es el mismo id de empresa del alcance
        if !scope.permite_empresa(id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a esta empresa".to_string(),
            ));
        }

        let empresa = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        Ok(EmpresaResponse::from(empresa))
    }

    pub async fn crear(
        &self,
        scope: TenantScope,
        request: CreateEmpresaRequest,
    ) -> Result<ApiResponse<EmpresaResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Solo el rol sin restricción de empresa administra empresas
        if scope.empresa_id().is_some() {
            return Err(AppError::Forbidden(
                "Solo un administrador puede crear empresas".to_string(),
            ));
        }

        let empresa = self.repository.crear(&request).await?;

        Ok(ApiResponse::success_with_message(
            EmpresaResponse::from(empresa),
            "Empresa creada exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        scope: TenantScope,
        request: UpdateEmpresaRequest,
    ) -> Result<ApiResponse<EmpresaResponse>, AppError> {
        request.validate()?;

        if !scope.permite_empresa(id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para modificar esta empresa".to_string(),
            ));
        }

        let empresa = self
            .repository
            .actualizar(id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Empresa no encontrada".to_string()))?;

        Ok(ApiResponse::success_with_message(
            EmpresaResponse::from(empresa),
            "Empresa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32, scope: TenantScope) -> Result<(), AppError> {
        if scope.empresa_id().is_some() {
            return Err(AppError::Forbidden(
                "Solo un administrador puede eliminar empresas".to_string(),
            ));
        }

        if !self.repository.eliminar(id).await? {
            return Err(AppError::NotFound("Empresa no encontrada".to_string()));
        }

        Ok(())
    }
}
