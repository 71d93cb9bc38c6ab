//! Folder CRUD, collection browsing, and sibling reordering.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use minihub_core::error::AppError;
use minihub_core::types::{FolderId, PainterId};
use minihub_database::repositories::folder::FolderRepository;
use minihub_database::repositories::miniature::MiniatureRepository;
use minihub_entity::folder::{CreateFolder, Folder};
use minihub_entity::miniature::Miniature;

use crate::context::RequestContext;

/// Manages folder operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Miniature repository (for collection views).
    miniature_repo: Arc<MiniatureRepository>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolderRequest {
    /// Parent folder ID.
    pub parent_id: FolderId,
    /// Folder name.
    pub name: String,
}

/// Request to update a folder: rename, reposition, or both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    /// New name, if renaming.
    pub name: Option<String>,
    /// New position within the sibling group, if repositioning.
    pub sort_order: Option<i32>,
}

/// Reference to a folder's parent in a collection view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentSummary {
    /// Parent folder ID.
    pub id: FolderId,
    /// Parent folder name.
    pub name: String,
}

/// One folder opened for browsing: its own fields, its miniatures, and its
/// child folders in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionView {
    /// The opened folder.
    #[serde(flatten)]
    pub folder: Folder,
    /// The parent folder, if any.
    pub parent: Option<ParentSummary>,
    /// Miniatures directly contained in the folder.
    pub miniatures: Vec<Miniature>,
    /// Child folders, ascending by `sort_order`.
    pub folders: Vec<Folder>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>, miniature_repo: Arc<MiniatureRepository>) -> Self {
        Self {
            folder_repo,
            miniature_repo,
        }
    }

    /// Gets a folder by ID, enforcing ownership.
    pub async fn get_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> Result<Folder, AppError> {
        let folder = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        require_owner(ctx, folder.painter_id)?;
        Ok(folder)
    }

    /// Gets the painter's root folder.
    pub async fn get_root(&self, ctx: &RequestContext) -> Result<Folder, AppError> {
        self.folder_repo
            .find_root(ctx.painter_id)
            .await?
            .ok_or_else(|| AppError::not_found("Root folder not found"))
    }

    /// Lists all of the painter's folders.
    pub async fn list_folders(&self, ctx: &RequestContext) -> Result<Vec<Folder>, AppError> {
        self.folder_repo.find_by_painter(ctx.painter_id).await
    }

    /// Opens a folder for browsing; defaults to the root folder.
    pub async fn get_collection(
        &self,
        ctx: &RequestContext,
        folder_id: Option<FolderId>,
    ) -> Result<CollectionView, AppError> {
        let folder = match folder_id {
            Some(id) => self.get_folder(ctx, id).await?,
            None => self.get_root(ctx).await?,
        };

        let parent = match folder.parent_id {
            Some(parent_id) => {
                let parent = self.get_folder(ctx, parent_id).await?;
                Some(ParentSummary {
                    id: parent.id,
                    name: parent.name,
                })
            }
            None => None,
        };

        let miniatures = self.miniature_repo.find_by_folder(folder.id).await?;
        let folders = self.folder_repo.find_children(folder.id).await?;

        Ok(CollectionView {
            folder,
            parent,
            miniatures,
            folders,
        })
    }

    /// Creates a new folder at the end of its parent's sibling group.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let parent = self.get_folder(ctx, req.parent_id).await?;

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                painter_id: ctx.painter_id,
                parent_id: parent.id,
                name: req.name,
            })
            .await?;

        info!(
            painter_id = %ctx.painter_id,
            folder_id = %folder.id,
            sort_order = folder.sort_order,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames and/or repositions a folder.
    ///
    /// A `sort_order` triggers a sibling reorder: affected siblings shift
    /// by one inside a single transaction so the group stays dense.
    pub async fn update_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
        req: UpdateFolderRequest,
    ) -> Result<Folder, AppError> {
        let folder = self.get_folder(ctx, folder_id).await?;

        if let Some(name) = &req.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Folder name cannot be empty"));
            }
            self.folder_repo.rename(folder_id, name).await?;
        }

        if let Some(sort_order) = req.sort_order {
            let parent_id = folder
                .parent_id
                .ok_or_else(|| AppError::validation("The root folder cannot be reordered"))?;
            self.folder_repo
                .reorder_child(parent_id, folder_id, sort_order)
                .await?;

            info!(
                painter_id = %ctx.painter_id,
                folder_id = %folder_id,
                sort_order,
                "Folder reordered"
            );
        }

        self.get_folder(ctx, folder_id).await
    }

    /// Moves a folder under a new parent, appending it at the end of the
    /// target's sibling group and closing the gap it left behind.
    ///
    /// Rejects moves into the folder itself or any of its descendants,
    /// which keeps the parent relation acyclic.
    pub async fn move_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
        target_folder_id: FolderId,
    ) -> Result<Folder, AppError> {
        let folder = self.get_folder(ctx, folder_id).await?;
        let target = self.get_folder(ctx, target_folder_id).await?;

        if folder.id == target.id {
            return Err(AppError::validation("Cannot move a folder into itself"));
        }

        let target_ancestry = self.folder_repo.find_ancestry(target.id).await?;
        if target_ancestry.contains(&folder.id) {
            return Err(AppError::validation(
                "Cannot move a folder into one of its descendants",
            ));
        }

        if folder.parent_id == Some(target.id) {
            return Ok(folder);
        }

        let moved = self.folder_repo.reparent(folder_id, target.id).await?;

        if let Some(old_parent_id) = folder.parent_id {
            self.folder_repo.normalize_children(old_parent_id).await?;
        }

        info!(
            painter_id = %ctx.painter_id,
            folder_id = %folder_id,
            target_folder_id = %target.id,
            "Folder moved"
        );

        Ok(moved)
    }

    /// Deletes a folder and its entire subtree, then re-sequences the
    /// former parent's remaining children.
    pub async fn delete_folder(
        &self,
        ctx: &RequestContext,
        folder_id: FolderId,
    ) -> Result<(), AppError> {
        let folder = self.get_folder(ctx, folder_id).await?;

        let parent_id = folder
            .parent_id
            .ok_or_else(|| AppError::validation("The root folder cannot be deleted"))?;

        self.folder_repo.delete(folder_id).await?;
        self.folder_repo.normalize_children(parent_id).await?;

        info!(
            painter_id = %ctx.painter_id,
            folder_id = %folder_id,
            "Folder deleted"
        );

        Ok(())
    }
}

/// Reject access to resources the acting painter does not own.
pub(crate) fn require_owner(ctx: &RequestContext, owner: PainterId) -> Result<(), AppError> {
    if ctx.painter_id != owner {
        return Err(AppError::authorization("Access denied"));
    }
    Ok(())
}
