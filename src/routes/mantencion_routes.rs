use axum::{
    extract::{Path, Query, Request, State},
    middleware::{self, Next},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::mantencion_controller::MantencionController;
use crate::dto::common_dto::ApiResponse;
use crate::middleware::permissions;
use crate::models::auth::TenantScope;
use crate::models::mantencion::{
    CreateMantencionRequest, MantencionFilters, MantencionResponse, UpdateMantencionRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_mantencion_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_mantenciones))
        .route("/", post(create_mantencion))
        .route("/:id", get(get_mantencion))
        .route("/:id", put(update_mantencion))
        .route("/:id", delete(delete_mantencion))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            permissions::verificar(req, next, "mantenciones")
        }))
}

async fn list_mantenciones(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Query(filtros): Query<MantencionFilters>,
) -> Result<Json<Vec<MantencionResponse>>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.listar(scope, filtros).await?;
    Ok(Json(response))
}

async fn get_mantencion(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<MantencionResponse>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.obtener(id, scope).await?;
    Ok(Json(response))
}

async fn create_mantencion(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Json(request): Json<CreateMantencionRequest>,
) -> Result<Json<ApiResponse<MantencionResponse>>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.crear(scope, request).await?;
    Ok(Json(response))
}

async fn update_mantencion(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMantencionRequest>,
) -> Result<Json<ApiResponse<MantencionResponse>>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    let response = controller.actualizar(id, scope, request).await?;
    Ok(Json(response))
}

async fn delete_mantencion(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MantencionController::new(state.pool.clone());
    controller.eliminar(id, scope).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Mantención eliminada exitosamente"
    })))
}
