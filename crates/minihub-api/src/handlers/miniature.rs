//! Miniature CRUD and bulk move handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use minihub_core::error::AppError;
use minihub_core::types::MiniatureId;
use minihub_entity::miniature::Miniature;
use minihub_service::miniature::service::{
    CreateMiniatureRequest as SvcCreateMiniature, UpdateMiniatureRequest as SvcUpdateMiniature,
};

use crate::dto::request::{CreateMiniatureRequest, MoveItemsRequest, UpdateMiniatureRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthPainter;
use crate::state::AppState;

/// POST /api/collections/miniatures
pub async fn create_miniature(
    State(state): State<AppState>,
    auth: AuthPainter,
    Json(req): Json<CreateMiniatureRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Miniature>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let miniature = state
        .miniature_service
        .create_miniature(
            &auth,
            SvcCreateMiniature {
                folder_id: req.folder_id,
                name: req.name,
                status: req.status,
                count: req.count,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(miniature))))
}

/// PATCH /api/collections/miniatures/{id}
pub async fn update_miniature(
    State(state): State<AppState>,
    auth: AuthPainter,
    Path(id): Path<MiniatureId>,
    Json(req): Json<UpdateMiniatureRequest>,
) -> Result<Json<ApiResponse<Miniature>>, ApiError> {
    let miniature = state
        .miniature_service
        .update_miniature(
            &auth,
            id,
            SvcUpdateMiniature {
                name: req.name,
                count: req.count,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(miniature)))
}

/// DELETE /api/collections/miniatures/{id}
pub async fn delete_miniature(
    State(state): State<AppState>,
    auth: AuthPainter,
    Path(id): Path<MiniatureId>,
) -> Result<StatusCode, ApiError> {
    state.miniature_service.delete_miniature(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/collections/miniatures
///
/// Bulk move: reassigns the listed miniatures and reparents the listed
/// folders under the target folder.
pub async fn move_items(
    State(state): State<AppState>,
    auth: AuthPainter,
    Json(req): Json<MoveItemsRequest>,
) -> Result<StatusCode, ApiError> {
    if req.miniature_ids.is_empty() && req.folder_ids.is_empty() {
        return Err(AppError::validation("Nothing to move").into());
    }

    if !req.miniature_ids.is_empty() {
        state
            .miniature_service
            .move_miniatures(&auth, &req.miniature_ids, req.target_folder_id)
            .await?;
    }

    for folder_id in &req.folder_ids {
        state
            .folder_service
            .move_folder(&auth, *folder_id, req.target_folder_id)
            .await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
