use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{error, info};

use fleet_maintenance::config::environment::EnvironmentConfig;
use fleet_maintenance::database;
use fleet_maintenance::routes;
use fleet_maintenance::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno desde .env si existe
    dotenv().ok();

    let config = EnvironmentConfig::from_env();

    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🛠️  API de Gestión de Mantenciones");
    info!("===================================");
    info!("Entorno: {}", config.environment);

    let pool = match database::create_pool(None).await {
        Ok(pool) => {
            info!("✅ Conexión a PostgreSQL establecida");
            pool
        }
        Err(e) => {
            error!("❌ No se pudo conectar a la base de datos: {}", e);
            return Err(e);
        }
    };

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(pool, config);
    let app = routes::create_app(state);

    info!("🌐 Servidor escuchando en http://{}", addr);
    info!("Endpoints disponibles:");
    info!("   GET    /                                   - Health check");
    info!("   CRUD   /api/empresas                       - Empresas");
    info!("   CRUD   /api/personal                       - Personal");
    info!("   CRUD   /api/maquinas                       - Máquinas");
    info!("   CRUD   /api/mantenciones                   - Mantenciones");
    info!("   R/W    /api/tipos-mantencion               - Catálogo de tipos");
    info!("   R/W    /api/estados-mantencion             - Catálogo de estados");
    info!("   GET    /api/stats-mantenciones/calendario  - Calendario de mantenciones");
    info!("   GET    /api/stats-mantenciones/por-mes     - Tendencia mensual");
    info!("   GET    /api/stats-mantenciones/kpis        - KPIs del dashboard");
    info!("   GET    /api/stats-mantenciones/por-empresa - Mantenciones por empresa");
    info!("   GET    /api/stats-mantenciones/historial   - Historial paginado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("no se pudo instalar el handler de Ctrl+C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("no se pudo instalar el handler de SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("🛑 Ctrl+C recibido, cerrando..."),
        _ = terminate => info!("🛑 SIGTERM recibido, cerrando..."),
    }
}
