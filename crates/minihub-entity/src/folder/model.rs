//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use minihub_core::types::{FolderId, PainterId};

/// A folder in a painter's collection hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// The painter who owns this folder.
    pub painter_id: PainterId,
    /// Parent folder ID (null for the root folder).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Zero-based position within the sibling group.
    pub sort_order: i32,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is the painter's root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new child folder. The root folder is created
/// during painter registration instead; `sort_order` is assigned by the
/// repository at the end of the parent's sibling group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// The folder owner.
    pub painter_id: PainterId,
    /// Parent folder.
    pub parent_id: FolderId,
    /// Folder name.
    pub name: String,
}
