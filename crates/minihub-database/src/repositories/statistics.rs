//! Statistics repository implementation.
//!
//! The statistics rollup needs the folder subtree and the miniature tallies
//! to describe the same moment; both queries run in one `REPEATABLE READ`,
//! read-only transaction so a concurrent move or delete cannot land between
//! them.

use sqlx::PgPool;

use minihub_core::error::{AppError, ErrorKind};
use minihub_core::result::AppResult;
use minihub_core::types::FolderId;
use minihub_entity::folder::Folder;
use minihub_entity::statistics::MiniatureTally;

/// Row shape of the per-folder status tally query.
#[derive(Debug, sqlx::FromRow)]
struct TallyRow {
    folder_id: FolderId,
    status: minihub_entity::miniature::ProgressStatus,
    total_count: i64,
}

/// Repository for point-in-time subtree reads backing statistics.
#[derive(Debug, Clone)]
pub struct StatisticsRepository {
    pool: PgPool,
}

impl StatisticsRepository {
    /// Create a new statistics repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One consistent snapshot of the subtree rooted at `root_id`: every
    /// folder of the subtree (the root included) plus the direct per-folder
    /// status totals, with each miniature row weighted by its `count`.
    pub async fn subtree_snapshot(
        &self,
        root_id: FolderId,
    ) -> AppResult<(Vec<Folder>, Vec<MiniatureTally>)> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set snapshot isolation", e)
            })?;

        let folders = sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE subtree AS ( \
                SELECT * FROM folders WHERE id = $1 \
                UNION ALL \
                SELECT f.* FROM folders f INNER JOIN subtree s ON f.parent_id = s.id \
             ) SELECT * FROM subtree",
        )
        .bind(root_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read subtree", e))?;

        let rows = sqlx::query_as::<_, TallyRow>(
            "WITH RECURSIVE subtree AS ( \
                SELECT id FROM folders WHERE id = $1 \
                UNION ALL \
                SELECT f.id FROM folders f INNER JOIN subtree s ON f.parent_id = s.id \
             ) \
             SELECT m.folder_id, m.status, SUM(m.count)::BIGINT AS total_count \
             FROM miniatures m INNER JOIN subtree s ON m.folder_id = s.id \
             GROUP BY m.folder_id, m.status",
        )
        .bind(root_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to tally miniatures", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit snapshot read", e)
        })?;

        let tallies = rows
            .into_iter()
            .map(|row| MiniatureTally {
                folder_id: row.folder_id,
                status: row.status,
                total_count: row.total_count,
            })
            .collect();

        Ok((folders, tallies))
    }
}
