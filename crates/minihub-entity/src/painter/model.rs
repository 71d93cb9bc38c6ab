//! Painter entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use minihub_core::types::PainterId;

/// A painter: the owner of a miniature collection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Painter {
    /// Unique painter identifier.
    pub id: PainterId,
    /// Display name, unique across the system.
    pub name: String,
    /// When the painter registered.
    pub created_at: DateTime<Utc>,
}
