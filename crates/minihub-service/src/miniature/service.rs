//! Miniature CRUD and bulk moves.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use minihub_core::error::AppError;
use minihub_core::types::{FolderId, MiniatureId};
use minihub_database::repositories::folder::FolderRepository;
use minihub_database::repositories::miniature::MiniatureRepository;
use minihub_entity::miniature::{CreateMiniature, Miniature, ProgressStatus};

use crate::context::RequestContext;
use crate::folder::service::require_owner;

/// Manages miniature operations.
#[derive(Debug, Clone)]
pub struct MiniatureService {
    /// Miniature repository.
    miniature_repo: Arc<MiniatureRepository>,
    /// Folder repository (target resolution for create/move).
    folder_repo: Arc<FolderRepository>,
}

/// Request to create a new miniature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMiniatureRequest {
    /// Containing folder.
    pub folder_id: FolderId,
    /// Miniature name.
    pub name: String,
    /// Paint-progress status; defaults to Gray.
    pub status: Option<ProgressStatus>,
    /// Quantity; defaults to 1.
    pub count: Option<i32>,
}

/// Request to update a miniature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMiniatureRequest {
    /// New name.
    pub name: Option<String>,
    /// New quantity.
    pub count: Option<i32>,
    /// New status.
    pub status: Option<ProgressStatus>,
}

impl MiniatureService {
    /// Creates a new miniature service.
    pub fn new(miniature_repo: Arc<MiniatureRepository>, folder_repo: Arc<FolderRepository>) -> Self {
        Self {
            miniature_repo,
            folder_repo,
        }
    }

    /// Gets a miniature by ID, enforcing ownership.
    pub async fn get_miniature(
        &self,
        ctx: &RequestContext,
        miniature_id: MiniatureId,
    ) -> Result<Miniature, AppError> {
        let miniature = self
            .miniature_repo
            .find_by_id(miniature_id)
            .await?
            .ok_or_else(|| AppError::not_found("Miniature not found"))?;

        require_owner(ctx, miniature.painter_id)?;
        Ok(miniature)
    }

    /// Creates a new miniature in an owned folder.
    pub async fn create_miniature(
        &self,
        ctx: &RequestContext,
        req: CreateMiniatureRequest,
    ) -> Result<Miniature, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Miniature name cannot be empty"));
        }
        let count = req.count.unwrap_or(1);
        if count < 1 {
            return Err(AppError::validation("Count must be at least 1"));
        }

        let folder = self.resolve_owned_folder(ctx, req.folder_id).await?;

        let miniature = self
            .miniature_repo
            .create(&CreateMiniature {
                painter_id: ctx.painter_id,
                folder_id: folder.id,
                name: req.name,
                status: req.status.unwrap_or(ProgressStatus::Gray),
                count,
            })
            .await?;

        info!(
            painter_id = %ctx.painter_id,
            miniature_id = %miniature.id,
            folder_id = %folder.id,
            "Miniature created"
        );

        Ok(miniature)
    }

    /// Updates a miniature's name, count, and/or status.
    ///
    /// `painted_at` tracks the status: set when it becomes Painted,
    /// cleared when it leaves Painted.
    pub async fn update_miniature(
        &self,
        ctx: &RequestContext,
        miniature_id: MiniatureId,
        req: UpdateMiniatureRequest,
    ) -> Result<Miniature, AppError> {
        let mut miniature = self.get_miniature(ctx, miniature_id).await?;

        if let Some(name) = req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Miniature name cannot be empty"));
            }
            miniature.name = name;
        }

        if let Some(count) = req.count {
            if count < 1 {
                return Err(AppError::validation("Count must be at least 1"));
            }
            miniature.count = count;
        }

        if let Some(status) = req.status {
            if status == ProgressStatus::Painted {
                if miniature.status != ProgressStatus::Painted {
                    miniature.painted_at = Some(Utc::now());
                }
            } else {
                miniature.painted_at = None;
            }
            miniature.status = status;
        }

        self.miniature_repo.update(&miniature).await
    }

    /// Deletes a miniature.
    pub async fn delete_miniature(
        &self,
        ctx: &RequestContext,
        miniature_id: MiniatureId,
    ) -> Result<(), AppError> {
        let miniature = self.get_miniature(ctx, miniature_id).await?;
        self.miniature_repo.delete(miniature.id).await?;

        info!(
            painter_id = %ctx.painter_id,
            miniature_id = %miniature_id,
            "Miniature deleted"
        );

        Ok(())
    }

    /// Reassigns a batch of the painter's miniatures to an owned target
    /// folder. Ids the painter does not own are skipped silently.
    pub async fn move_miniatures(
        &self,
        ctx: &RequestContext,
        miniature_ids: &[MiniatureId],
        target_folder_id: FolderId,
    ) -> Result<u64, AppError> {
        let target = self.resolve_owned_folder(ctx, target_folder_id).await?;

        let moved = self
            .miniature_repo
            .move_to_folder(ctx.painter_id, miniature_ids, target.id)
            .await?;

        info!(
            painter_id = %ctx.painter_id,
            target_folder_id = %target.id,
            moved,
            "Miniatures moved"
        );

        Ok(moved)
    }

    async fn resolve_owned_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> Result<minihub_entity::folder::Folder, AppError> {
        let folder = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        require_owner(ctx, folder.painter_id)?;
        Ok(folder)
    }
}
