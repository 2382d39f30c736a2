//! Rutas del módulo de estadísticas de mantención.
//!
//! El "hoy" de cada request se captura en el handler y baja como
//! parámetro al servicio, que no consulta el reloj por su cuenta.

use axum::{
    extract::{Query, Request, State},
    middleware::{self, Next},
    routing::get,
    Extension, Json, Router,
};
use chrono::Utc;

use crate::middleware::permissions;
use crate::models::auth::TenantScope;
use crate::models::stats::{
    EventoCalendario, HistorialMantenciones, HistorialQuery, KpisMantencion,
    MantencionesPorEmpresa, TendenciaMes,
};
use crate::services::StatsService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stats_router() -> Router<AppState> {
    Router::new()
        .route("/calendario", get(get_calendario))
        .route("/por-mes", get(get_por_mes))
        .route("/kpis", get(get_kpis))
        .route("/por-empresa", get(get_por_empresa))
        .route("/historial", get(get_historial))
        .route_layer(middleware::from_fn(|req: Request, next: Next| {
            permissions::verificar(req, next, "estadisticas")
        }))
}

async fn get_calendario(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<EventoCalendario>>, AppError> {
    let hoy = Utc::now().date_naive();
    let service = StatsService::new(state.pool.clone());
    let response = service.calendario(scope, hoy).await?;
    Ok(Json(response))
}

async fn get_por_mes(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<TendenciaMes>>, AppError> {
    let hoy = Utc::now().date_naive();
    let service = StatsService::new(state.pool.clone());
    let response = service.tendencia_mensual(scope, hoy).await?;
    Ok(Json(response))
}

async fn get_kpis(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<KpisMantencion>, AppError> {
    let hoy = Utc::now().date_naive();
    let service = StatsService::new(state.pool.clone());
    let response = service.kpis(scope, hoy).await?;
    Ok(Json(response))
}

async fn get_por_empresa(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
) -> Result<Json<Vec<MantencionesPorEmpresa>>, AppError> {
    let hoy = Utc::now().date_naive();
    let service = StatsService::new(state.pool.clone());
    let response = service.por_empresa(scope, hoy).await?;
    Ok(Json(response))
}

async fn get_historial(
    State(state): State<AppState>,
    Extension(scope): Extension<TenantScope>,
    Query(filtros): Query<HistorialQuery>,
) -> Result<Json<HistorialMantenciones>, AppError> {
    let service = StatsService::new(state.pool.clone());
    let response = service.historial(scope, filtros).await?;
    Ok(Json(response))
}
