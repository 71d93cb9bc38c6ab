//! Painter registration.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use minihub_core::error::AppError;
use minihub_core::types::PainterId;
use minihub_database::repositories::painter::PainterRepository;
use minihub_entity::painter::Painter;

/// Name of the root folder created for every new painter.
const ROOT_FOLDER_NAME: &str = "Collection";

/// Manages painter accounts.
#[derive(Debug, Clone)]
pub struct PainterService {
    /// Painter repository.
    painter_repo: Arc<PainterRepository>,
}

/// Request to register a new painter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterPainterRequest {
    /// Display name.
    pub name: String,
}

impl PainterService {
    /// Creates a new painter service.
    pub fn new(painter_repo: Arc<PainterRepository>) -> Self {
        Self { painter_repo }
    }

    /// Registers a painter. The root folder is created in the same
    /// transaction as the painter row.
    pub async fn register(&self, req: RegisterPainterRequest) -> Result<Painter, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Painter name cannot be empty"));
        }

        let painter = self
            .painter_repo
            .create_with_root_folder(PainterId::new(), &req.name, ROOT_FOLDER_NAME)
            .await?;

        info!(painter_id = %painter.id, "Painter registered");
        Ok(painter)
    }
}
