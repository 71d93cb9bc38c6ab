//! Collection browsing and statistics handlers.

use axum::Json;
use axum::extract::{Query, State};

use minihub_entity::statistics::FolderStatistics;
use minihub_service::folder::CollectionView;

use crate::dto::request::FolderQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthPainter;
use crate::state::AppState;

/// GET /api/collections?folder_id=...
pub async fn get_collection(
    State(state): State<AppState>,
    auth: AuthPainter,
    Query(query): Query<FolderQuery>,
) -> Result<Json<ApiResponse<CollectionView>>, ApiError> {
    let view = state
        .folder_service
        .get_collection(&auth, query.folder_id)
        .await?;

    Ok(Json(ApiResponse::ok(view)))
}

/// GET /api/collections/stats?folder_id=...
pub async fn get_statistics(
    State(state): State<AppState>,
    auth: AuthPainter,
    Query(query): Query<FolderQuery>,
) -> Result<Json<ApiResponse<FolderStatistics>>, ApiError> {
    let stats = state
        .statistics_service
        .get_statistics(&auth, query.folder_id)
        .await?;

    Ok(Json(ApiResponse::ok(stats)))
}
