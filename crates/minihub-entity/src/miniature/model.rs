//! Miniature entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use minihub_core::types::{FolderId, MiniatureId, PainterId};

use super::status::ProgressStatus;

/// A tracked physical model. One row represents `count` identical models.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Miniature {
    /// Unique miniature identifier.
    pub id: MiniatureId,
    /// The painter who owns this miniature.
    pub painter_id: PainterId,
    /// The folder directly containing this miniature.
    pub folder_id: FolderId,
    /// Miniature name.
    pub name: String,
    /// Paint-progress status.
    pub status: ProgressStatus,
    /// Quantity represented by this row (>= 1).
    pub count: i32,
    /// When the miniature was added.
    pub created_at: DateTime<Utc>,
    /// When the status last became Painted; cleared when it leaves Painted.
    pub painted_at: Option<DateTime<Utc>>,
}

/// Data required to create a new miniature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMiniature {
    /// The miniature owner.
    pub painter_id: PainterId,
    /// The containing folder.
    pub folder_id: FolderId,
    /// Miniature name.
    pub name: String,
    /// Paint-progress status.
    pub status: ProgressStatus,
    /// Quantity (>= 1).
    pub count: i32,
}
