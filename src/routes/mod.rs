//! Construcción del router de la aplicación.
//!
//! Todo lo que cuelga de `/api` pasa por autenticación JWT y resolución
//! del alcance de empresa; cada router de recurso agrega su permiso.

pub mod catalogo_routes;
pub mod empresa_routes;
pub mod mantencion_routes;
pub mod maquina_routes;
pub mod personal_routes;
pub mod stats_routes;

use axum::{middleware, routing::get, Json, Router};
use chrono::Utc;
use tower_http::trace::TraceLayer;

use crate::middleware::{
    auth_middleware, cors_middleware, cors_middleware_with_origins, tenant_middleware,
};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .nest("/empresas", empresa_routes::create_empresa_router())
        .nest("/personal", personal_routes::create_personal_router())
        .nest("/maquinas", maquina_routes::create_maquina_router())
        .nest("/mantenciones", mantencion_routes::create_mantencion_router())
        .nest("/tipos-mantencion", catalogo_routes::create_tipos_router())
        .nest("/estados-mantencion", catalogo_routes::create_estados_router())
        .nest("/stats-mantenciones", stats_routes::create_stats_router())
        // La capa agregada al final corre primero: auth antes que tenant
        .layer(middleware::from_fn(tenant_middleware))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&state.config.cors_origins)
    };

    Router::new()
        .route("/", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "message": "API de Gestión de Mantenciones",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
