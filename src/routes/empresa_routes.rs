use axum::{
    extract::{Path, Request, State},
    middleware::{self, Next},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::empresa_controller::EmpresaController;
use crate::dto::common_dto::ApiResponse;
use crate::middleware::permissions;
use crate::models::auth::TenantScope;
use crate::models::empresa::{CreateEmpresaRequest, EmpresaResponse, UpdateEmpresaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_empresa_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_empresas))
        .route("/", post(create_empresa))
        .route("/:id", get(get_empresa))
        .route("/:id", put(update_empresa))
        .route("/:id", delete(delete_empresa))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            permissions::verificar(req, next, "empresas")
        }))
}

async fn list_empresas(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<EmpresaResponse>>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.listar(scope).await?;
    Ok(Json(response))
}

async fn get_empresa(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<EmpresaResponse>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.obtener(id, scope).await?;
    Ok(Json(response))
}

async fn create_empresa(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Json(request): Json<CreateEmpresaRequest>,
) -> Result<Json<ApiResponse<EmpresaResponse>>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.crear(scope, request).await?;
    Ok(Json(response))
}

async fn update_empresa(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateEmpresaRequest>,
) -> Result<Json<ApiResponse<EmpresaResponse>>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    let response = controller.actualizar(id, scope, request).await?;
    Ok(Json(response))
}

async fn delete_empresa(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = EmpresaController::new(state.pool.clone());
    controller.eliminar(id, scope).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Empresa eliminada exitosamente"
    })))
}
