//! Folder CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use minihub_core::error::AppError;
use minihub_core::types::FolderId;
use minihub_entity::folder::Folder;
use minihub_service::folder::service::{
    CreateFolderRequest as SvcCreateFolder, UpdateFolderRequest as SvcUpdateFolder,
};

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthPainter;
use crate::state::AppState;

/// GET /api/collections/folders
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthPainter,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_folders(&auth).await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// POST /api/collections/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthPainter,
    Json(req): Json<CreateFolderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Folder>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(
            &auth,
            SvcCreateFolder {
                parent_id: req.parent_id,
                name: req.name,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(folder))))
}

/// PATCH /api/collections/folders/{id}
///
/// Renames and/or reorders the folder among its siblings.
pub async fn update_folder(
    State(state): State<AppState>,
    auth: AuthPainter,
    Path(id): Path<FolderId>,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state
        .folder_service
        .update_folder(
            &auth,
            id,
            SvcUpdateFolder {
                name: req.name,
                sort_order: req.sort_order,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/collections/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthPainter,
    Path(id): Path<FolderId>,
) -> Result<StatusCode, ApiError> {
    state.folder_service.delete_folder(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
