//! Painter repository implementation.

use sqlx::PgPool;

use minihub_core::error::{AppError, ErrorKind};
use minihub_core::result::AppResult;
use minihub_core::types::{FolderId, PainterId};
use minihub_entity::painter::Painter;

/// Repository for painter records.
#[derive(Debug, Clone)]
pub struct PainterRepository {
    pool: PgPool,
}

impl PainterRepository {
    /// Create a new painter repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a painter by ID.
    pub async fn find_by_id(&self, id: PainterId) -> AppResult<Option<Painter>> {
        sqlx::query_as::<_, Painter>("SELECT * FROM painters WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find painter", e))
    }

    /// Create a new painter together with their root folder.
    ///
    /// Both inserts run in one transaction; a painter row without a root
    /// folder is never durably visible.
    pub async fn create_with_root_folder(
        &self,
        id: PainterId,
        name: &str,
        root_folder_name: &str,
    ) -> AppResult<Painter> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let painter = sqlx::query_as::<_, Painter>(
            "INSERT INTO painters (id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("painters_name_key") =>
            {
                AppError::conflict(format!("Painter '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create painter", e),
        })?;

        sqlx::query(
            "INSERT INTO folders (id, painter_id, parent_id, name, sort_order) \
             VALUES ($1, $2, NULL, $3, 0)",
        )
        .bind(FolderId::new())
        .bind(painter.id)
        .bind(root_folder_name)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create root folder", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit registration", e)
        })?;

        Ok(painter)
    }
}
