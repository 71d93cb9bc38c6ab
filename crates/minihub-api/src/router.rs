//! Route definitions for the MiniHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(painter_routes())
        .merge(collection_routes())
        .merge(folder_routes())
        .merge(miniature_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Painter registration (no painter header required)
fn painter_routes() -> Router<AppState> {
    Router::new().route("/painters", post(handlers::painter::register))
}

/// Collection browsing and statistics
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/collections", get(handlers::collection::get_collection))
        .route(
            "/collections/stats",
            get(handlers::collection::get_statistics),
        )
}

/// Folder CRUD
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/collections/folders", get(handlers::folder::list_folders))
        .route("/collections/folders", post(handlers::folder::create_folder))
        .route(
            "/collections/folders/{id}",
            patch(handlers::folder::update_folder),
        )
        .route(
            "/collections/folders/{id}",
            delete(handlers::folder::delete_folder),
        )
}

/// Miniature CRUD and bulk move
fn miniature_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/collections/miniatures",
            post(handlers::miniature::create_miniature),
        )
        .route(
            "/collections/miniatures",
            patch(handlers::miniature::move_items),
        )
        .route(
            "/collections/miniatures/{id}",
            patch(handlers::miniature::update_miniature),
        )
        .route(
            "/collections/miniatures/{id}",
            delete(handlers::miniature::delete_miniature),
        )
}

/// Health check (no painter header required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
