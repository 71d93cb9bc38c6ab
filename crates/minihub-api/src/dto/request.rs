//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use minihub_core::types::{FolderId, MiniatureId};
use minihub_entity::miniature::ProgressStatus;

/// Painter registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterPainterRequest {
    /// Display name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

/// Folder creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Parent folder.
    pub parent_id: FolderId,
    /// Folder name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
}

/// Folder update request body. Both fields are optional; a present
/// `sort_order` repositions the folder among its siblings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
    /// New folder name.
    pub name: Option<String>,
    /// New position within the sibling group.
    pub sort_order: Option<i32>,
}

/// Miniature creation request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMiniatureRequest {
    /// Containing folder.
    pub folder_id: FolderId,
    /// Miniature name.
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    /// Paint-progress status; defaults to Gray.
    pub status: Option<ProgressStatus>,
    /// Quantity; defaults to 1.
    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: Option<i32>,
}

/// Miniature update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMiniatureRequest {
    /// New name.
    pub name: Option<String>,
    /// New quantity.
    pub count: Option<i32>,
    /// New status.
    pub status: Option<ProgressStatus>,
}

/// Bulk move request: reassigns miniatures and reparents folders
/// under a single target folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveItemsRequest {
    /// Miniatures to move.
    #[serde(default)]
    pub miniature_ids: Vec<MiniatureId>,
    /// Folders to move.
    #[serde(default)]
    pub folder_ids: Vec<FolderId>,
    /// Destination folder.
    pub target_folder_id: FolderId,
}

/// Query parameters selecting a folder, defaulting to the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderQuery {
    /// Folder to operate on; the painter's root folder when absent.
    pub folder_id: Option<FolderId>,
}
