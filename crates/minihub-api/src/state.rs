//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use minihub_core::config::AppConfig;
use minihub_database::repositories::folder::FolderRepository;
use minihub_database::repositories::miniature::MiniatureRepository;
use minihub_database::repositories::painter::PainterRepository;
use minihub_database::repositories::statistics::StatisticsRepository;
use minihub_service::folder::FolderService;
use minihub_service::miniature::MiniatureService;
use minihub_service::painter::PainterService;
use minihub_service::statistics::StatisticsService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Painter repository
    pub painter_repo: Arc<PainterRepository>,
    /// Folder repository
    pub folder_repo: Arc<FolderRepository>,
    /// Miniature repository
    pub miniature_repo: Arc<MiniatureRepository>,
    /// Statistics repository
    pub statistics_repo: Arc<StatisticsRepository>,

    /// Painter registration service
    pub painter_service: Arc<PainterService>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Miniature service
    pub miniature_service: Arc<MiniatureService>,
    /// Statistics service
    pub statistics_service: Arc<StatisticsService>,
}
