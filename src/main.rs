mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏢 HR Management - API de asistencia, ausencias y tareas");
    info!("========================================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    if let Err(e) = db_connection.run_migrations().await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api", routes::create_api_router(app_state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Endpoints - Auth:");
    info!("   POST /api/auth/register - Registrar empleado");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Perfil del usuario actual");
    info!("🕐 Endpoints - Asistencia:");
    info!("   POST /api/attendance - Fichar entrada/salida");
    info!("   GET  /api/attendance - Historial de asistencia");
    info!("🌴 Endpoints - Ausencias:");
    info!("   POST /api/leave - Crear solicitud");
    info!("   GET  /api/leave - Listar solicitudes");
    info!("   GET  /api/leave/:id - Obtener solicitud");
    info!("   PATCH /api/leave/:id - Aprobar/rechazar solicitud");
    info!("   DELETE /api/leave/:id - Eliminar solicitud");
    info!("🛠  Endpoints - Administración:");
    info!("   GET/POST/PATCH /api/admin/attendance - Gestión de asistencia");
    info!("   GET  /api/admin/leave - Todas las solicitudes");
    info!("   GET/POST /api/admin/tasks - Gestión de tareas");
    info!("   GET/PATCH/DELETE /api/admin/tasks/:id - Tarea individual");
    info!("   GET/PATCH /api/admin/users - Gestión de usuarios");
    info!("   GET/PATCH/DELETE /api/admin/users/:id - Usuario individual");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!("Error del servidor: {}", e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check del servicio
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "hr-management",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
