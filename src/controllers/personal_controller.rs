use crate::dto::common_dto::ApiResponse;
use crate::models::auth::TenantScope;
use crate::models::personal::{CreatePersonalRequest, PersonalResponse, UpdatePersonalRequest};
use crate::repositories::empresa_repository::EmpresaRepository;
use crate::repositories::personal_repository::PersonalRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use validator::Validate;

pub struct PersonalController {
    repository: PersonalRepository,
    empresas: EmpresaRepository,
}

impl PersonalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PersonalRepository::new(pool.clone()),
            empresas: EmpresaRepository::new(pool),
        }
    }

    pub async fn listar(&self, scope: TenantScope) -> Result<Vec<PersonalResponse>, AppError> {
        let personal = self.repository.listar(scope.empresa_id()).await?;

        Ok(personal.into_iter().map(PersonalResponse::from).collect())
    }

    pub async fn obtener(&self, id: i32, scope: TenantScope) -> Result<PersonalResponse, AppError> {
        let personal = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        if !scope.permite_empresa(personal.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para acceder a este personal".to_string(),
            ));
        }

        Ok(PersonalResponse::from(personal))
    }

    pub async fn crear(
        &self,
        scope: TenantScope,
        request: CreatePersonalRequest,
    ) -> Result<ApiResponse<PersonalResponse>, AppError> {
        // Validar campos
        request.validate()?;

        // Resolver la empresa destino según el alcance del usuario
        let empresa_id = match (scope.empresa_id(), request.empresa_id) {
            (Some(propia), Some(pedida)) if propia != pedida => {
                return Err(AppError::Forbidden(
                    "No puedes crear personal para otra empresa".to_string(),
                ))
            }
            (Some(propia), _) => propia,
            (None, Some(pedida)) => pedida,
            (None, None) => {
                return Err(AppError::BadRequest(
                    "Debe indicar la empresa del personal".to_string(),
                ))
            }
        };

        if !self.empresas.existe(empresa_id).await? {
            return Err(AppError::BadRequest(
                "La empresa indicada no existe".to_string(),
            ));
        }

        // Verificar que el RUT no exista para esta empresa
        if self.repository.rut_existe(&request.rut, empresa_id).await? {
            return Err(AppError::Conflict(
                "El RUT ya está registrado en esta empresa".to_string(),
            ));
        }

        let personal = self.repository.crear(empresa_id, &request).await?;

        Ok(ApiResponse::success_with_message(
            PersonalResponse::from(personal),
            "Personal creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: i32,
        scope: TenantScope,
        request: UpdatePersonalRequest,
    ) -> Result<ApiResponse<PersonalResponse>, AppError> {
        request.validate()?;

        let actual = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        if !scope.permite_empresa(actual.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para modificar este personal".to_string(),
            ));
        }

        // Si cambia el RUT, no debe chocar con otro trabajador de la empresa
        if let Some(rut) = &request.rut {
            if rut != &actual.rut && self.repository.rut_existe(rut, actual.empresa_id).await? {
                return Err(AppError::Conflict(
                    "El RUT ya está registrado en esta empresa".to_string(),
                ));
            }
        }

        let personal = self
            .repository
            .actualizar(id, request)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        Ok(ApiResponse::success_with_message(
            PersonalResponse::from(personal),
            "Personal actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: i32, scope: TenantScope) -> Result<(), AppError> {
        let personal = self
            .repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Personal no encontrado".to_string()))?;

        if !scope.permite_empresa(personal.empresa_id) {
            return Err(AppError::Forbidden(
                "No tienes permiso para eliminar este personal".to_string(),
            ));
        }

        if !self.repository.eliminar(id).await? {
            return Err(AppError::NotFound("Personal no encontrado".to_string()));
        }

        Ok(())
    }
}
