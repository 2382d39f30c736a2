use axum::{
    extract::{Path, Request, State},
    middleware::{self, Next},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};

use crate::controllers::personal_controller::PersonalController;
use crate::dto::common_dto::ApiResponse;
use crate::middleware::permissions;
use crate::models::auth::TenantScope;
use crate::models::personal::{CreatePersonalRequest, PersonalResponse, UpdatePersonalRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_personal_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_personal))
        .route("/", post(create_personal))
        .route("/:id", get(get_personal))
        .route("/:id", put(update_personal))
        .route("/:id", delete(delete_personal))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            permissions::verificar(req, next, "personal")
        }))
}

async fn list_personal(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<PersonalResponse>>, AppError> {
    let controller = PersonalController::new(state.pool.clone());
    let response = controller.listar(scope).await?;
    Ok(Json(response))
}

async fn get_personal(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<PersonalResponse>, AppError> {
    let controller = PersonalController::new(state.pool.clone());
    let response = controller.obtener(id, scope).await?;
    Ok(Json(response))
}

async fn create_personal(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Json(request): Json<CreatePersonalRequest>,
) -> Result<Json<ApiResponse<PersonalResponse>>, AppError> {
    let controller = PersonalController::new(state.pool.clone());
    let response = controller.crear(scope, request).await?;
    Ok(Json(response))
}

async fn update_personal(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePersonalRequest>,
) -> Result<Json<ApiResponse<PersonalResponse>>, AppError> {
    let controller = PersonalController::new(state.pool.clone());
    let response = controller.actualizar(id, scope, request).await?;
    Ok(Json(response))
}

async fn delete_personal(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = PersonalController::new(state.pool.clone());
    controller.eliminar(id, scope).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Personal eliminado exitosamente"
    })))
}
