//! Rutas de los catálogos de tipos y estados.
//!
//! Solo exigen autenticación: cualquier usuario del sistema puede
//! consultarlos y no hay endpoint de borrado.

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::catalogo_controller::CatalogoController;
use crate::dto::common_dto::ApiResponse;
use crate::models::catalogo::{CatalogoRequest, EstadoMantencion, TipoMantencion};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tipos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tipos))
        .route("/", post(create_tipo))
        .route("/:id", get(get_tipo))
        .route("/:id", put(update_tipo))
}

pub fn create_estados_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_estados))
        .route("/", post(create_estado))
        .route("/:id", get(get_estado))
        .route("/:id", put(update_estado))
}

async fn list_tipos(
    State(state): State<AppState>,
) -> Result<Json<Vec<TipoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.listar_tipos().await?;
    Ok(Json(response))
}

async fn get_tipo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TipoMantencion>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.obtener_tipo(id).await?;
    Ok(Json(response))
}

async fn create_tipo(
    State(state): State<AppState>,
    Json(request): Json<CatalogoRequest>,
) -> Result<Json<ApiResponse<TipoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.crear_tipo(request).await?;
    Ok(Json(response))
}

async fn update_tipo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CatalogoRequest>,
) -> Result<Json<ApiResponse<TipoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.actualizar_tipo(id, request).await?;
    Ok(Json(response))
}

async fn list_estados(
    State(state): State<AppState>,
) -> Result<Json<Vec<EstadoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.listar_estados().await?;
    Ok(Json(response))
}

async fn get_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<EstadoMantencion>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.obtener_estado(id).await?;
    Ok(Json(response))
}

async fn create_estado(
    State(state): State<AppState>,
    Json(request): Json<CatalogoRequest>,
) -> Result<Json<ApiResponse<EstadoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.crear_estado(request).await?;
    Ok(Json(response))
}

async fn update_estado(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<CatalogoRequest>,
) -> Result<Json<ApiResponse<EstadoMantencion>>, AppError> {
    let controller = CatalogoController::new(state.pool.clone());
    let response = controller.actualizar_estado(id, request).await?;
    Ok(Json(response))
}
