//! Application builder — wires router + middleware + state into an Axum app.

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use sqlx::PgPool;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use minihub_core::config::{AppConfig, CorsConfig};
use minihub_core::error::AppError;
use minihub_database::repositories::folder::FolderRepository;
use minihub_database::repositories::miniature::MiniatureRepository;
use minihub_database::repositories::painter::PainterRepository;
use minihub_database::repositories::statistics::StatisticsRepository;
use minihub_service::folder::FolderService;
use minihub_service::miniature::MiniatureService;
use minihub_service::painter::PainterService;
use minihub_service::statistics::StatisticsService;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Runs the MiniHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting MiniHub server...");

    let painter_repo = Arc::new(PainterRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let miniature_repo = Arc::new(MiniatureRepository::new(db_pool.clone()));
    let statistics_repo = Arc::new(StatisticsRepository::new(db_pool.clone()));

    let painter_service = Arc::new(PainterService::new(Arc::clone(&painter_repo)));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&miniature_repo),
    ));
    let miniature_service = Arc::new(MiniatureService::new(
        Arc::clone(&miniature_repo),
        Arc::clone(&folder_repo),
    ));
    let statistics_service = Arc::new(StatisticsService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&statistics_repo),
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        painter_repo,
        folder_repo,
        miniature_repo,
        statistics_repo,
        painter_service,
        folder_service,
        miniature_service,
        statistics_service,
    };

    let app = build_app(state, &config.server.cors);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("MiniHub server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}

/// Builds a CORS tower layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any);

    if config.allowed_origins.contains(&"*".to_string()) {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    layer
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
}
