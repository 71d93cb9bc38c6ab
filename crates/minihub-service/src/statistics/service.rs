//! Per-subtree statistics computation.

use std::sync::Arc;

use tracing::debug;

use minihub_core::error::AppError;
use minihub_core::types::FolderId;
use minihub_database::repositories::folder::FolderRepository;
use minihub_database::repositories::statistics::StatisticsRepository;
use minihub_entity::statistics::{FolderStatistics, SubtreeFolder, compute_statistics};

use crate::context::RequestContext;
use crate::folder::service::require_owner;

/// Computes painted/built/gray rollups for folder subtrees.
#[derive(Debug, Clone)]
pub struct StatisticsService {
    /// Folder repository (root resolution and ownership).
    folder_repo: Arc<FolderRepository>,
    /// Snapshot reads of subtree folders and tallies.
    statistics_repo: Arc<StatisticsRepository>,
}

impl StatisticsService {
    /// Creates a new statistics service.
    pub fn new(
        folder_repo: Arc<FolderRepository>,
        statistics_repo: Arc<StatisticsRepository>,
    ) -> Self {
        Self {
            folder_repo,
            statistics_repo,
        }
    }

    /// Statistics for the subtree rooted at `folder_id`, defaulting to the
    /// painter's root folder. Every folder of the subtree is present in the
    /// result, with each entry holding its own full subtree totals. The
    /// subtree and its tallies come from a single snapshot read, so the
    /// totals are consistent with the folder set they cover.
    pub async fn get_statistics(
        &self,
        ctx: &RequestContext,
        folder_id: Option<FolderId>,
    ) -> Result<FolderStatistics, AppError> {
        let root = match folder_id {
            Some(id) => {
                let folder = self
                    .folder_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Folder not found"))?;
                require_owner(ctx, folder.painter_id)?;
                folder
            }
            None => self
                .folder_repo
                .find_root(ctx.painter_id)
                .await?
                .ok_or_else(|| AppError::not_found("Root folder not found"))?,
        };

        let (subtree, tallies) = self.statistics_repo.subtree_snapshot(root.id).await?;

        let folders: Vec<SubtreeFolder> = subtree
            .iter()
            .map(|f| SubtreeFolder {
                id: f.id,
                parent_id: f.parent_id,
            })
            .collect();

        let stats = compute_statistics(root.id, &folders, &tallies);

        debug!(
            painter_id = %ctx.painter_id,
            root_id = %root.id,
            folders = stats.len(),
            "Statistics computed"
        );

        Ok(stats)
    }
}
