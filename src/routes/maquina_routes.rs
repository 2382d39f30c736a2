use axum::{
    extract::{Path, Request, State},
    middleware::{self, Next},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::maquina_controller::MaquinaController;
use crate::dto::common_dto::ApiResponse;
use crate::middleware::permissions;
use crate::models::auth::TenantScope;
use crate::models::maquina::{CreateMaquinaRequest, MaquinaResponse, UpdateMaquinaRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maquina_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maquinas))
        .route("/", post(create_maquina))
        .route("/:id", get(get_maquina))
        .route("/:id", put(update_maquina))
        .route("/:id", delete(delete_maquina))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            permissions::verificar(req, next, "maquinas")
        }))
}

async fn list_maquinas(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<MaquinaResponse>>, AppError> {
    let controller = MaquinaController::new(state.pool.clone());
    let response = controller.listar(scope).await?;
    Ok(Json(response))
}

async fn get_maquina(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<MaquinaResponse>, AppError> {
    let controller = MaquinaController::new(state.pool.clone());
    let response = controller.obtener(id, scope).await?;
    Ok(Json(response))
}

async fn create_maquina(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Json(request): Json<CreateMaquinaRequest>,
) -> Result<Json<ApiResponse<MaquinaResponse>>, AppError> {
    let controller = MaquinaController::new(state.pool.clone());
    let response = controller.crear(scope, request).await?;
    Ok(Json(response))
}

async fn update_maquina(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMaquinaRequest>,
) -> Result<Json<ApiResponse<MaquinaResponse>>, AppError> {
    let controller = MaquinaController::new(state.pool.clone());
    let response = controller.actualizar(id, scope, request).await?;
    Ok(Json(response))
}

async fn delete_maquina(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MaquinaController::new(state.pool.clone());
    controller.eliminar(id, scope).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Máquina eliminada exitosamente"
    })))
}
