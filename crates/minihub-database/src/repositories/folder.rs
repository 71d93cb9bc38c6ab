//! Folder repository implementation.
//!
//! Besides plain CRUD, this repository owns the transactional side of
//! sibling ordering: reorder and normalize read the sibling snapshot under
//! a parent-row lock, compute the new positions in memory via
//! [`SiblingGroup`], and write all changed rows before committing, so a
//! half-applied shift is never durably observable.

use sqlx::{PgPool, Postgres, Transaction};

use minihub_core::error::{AppError, ErrorKind};
use minihub_core::result::AppResult;
use minihub_core::types::{FolderId, PainterId};
use minihub_entity::folder::order::{SiblingEntry, SiblingGroup};
use minihub_entity::folder::{CreateFolder, Folder};

/// Repository for folder CRUD, tree queries, and sibling ordering.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Find a painter's root folder.
    pub async fn find_root(&self, painter_id: PainterId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE painter_id = $1 AND parent_id IS NULL",
        )
        .bind(painter_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find root folder", e))
    }

    /// List all folders of a painter.
    pub async fn find_by_painter(&self, painter_id: PainterId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE painter_id = $1 ORDER BY sort_order ASC, name ASC",
        )
        .bind(painter_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List direct children of a folder, in display order.
    pub async fn find_children(&self, parent_id: FolderId) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders WHERE parent_id = $1 ORDER BY sort_order ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// The ancestor chain of a folder, the folder itself included.
    pub async fn find_ancestry(&self, folder_id: FolderId) -> AppResult<Vec<FolderId>> {
        sqlx::query_scalar::<_, FolderId>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT id, parent_id FROM folders WHERE id = $1 \
                UNION ALL \
                SELECT f.id, f.parent_id FROM folders f \
                    INNER JOIN ancestors a ON f.id = a.parent_id \
             ) SELECT id FROM ancestors",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestry", e))
    }

    /// Create a new child folder at the end of its parent's sibling group.
    ///
    /// The `sort_order` is computed under the same parent-row lock the
    /// reorder path takes, inside the transaction that also inserts the
    /// row; two concurrent creates under one parent serialize on the lock
    /// and cannot both claim the same position.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut tx = self.begin().await?;

        let group = Self::lock_sibling_group(&mut tx, data.parent_id).await?;
        let folder = sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (id, painter_id, parent_id, name, sort_order) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(FolderId::new())
        .bind(data.painter_id)
        .bind(data.parent_id)
        .bind(&data.name)
        .bind(group.next_sort_order())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit create", e))?;

        Ok(folder)
    }

    /// Rename a folder.
    pub async fn rename(&self, folder_id: FolderId, new_name: &str) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>("UPDATE folders SET name = $2 WHERE id = $1 RETURNING *")
            .bind(folder_id)
            .bind(new_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to rename folder", e))?
            .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))
    }

    /// Reparent a folder, appending it at the end of the target's sibling
    /// group. The target position is computed under the target parent's
    /// row lock, in the same transaction as the update.
    pub async fn reparent(
        &self,
        folder_id: FolderId,
        new_parent_id: FolderId,
    ) -> AppResult<Folder> {
        let mut tx = self.begin().await?;

        let group = Self::lock_sibling_group(&mut tx, new_parent_id).await?;
        let folder = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET parent_id = $2, sort_order = $3 WHERE id = $1 RETURNING *",
        )
        .bind(folder_id)
        .bind(new_parent_id)
        .bind(group.next_sort_order())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move folder", e))?
        .ok_or_else(|| AppError::not_found(format!("Folder {folder_id} not found")))?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit move", e))?;

        Ok(folder)
    }

    /// Delete a folder (cascades to the subtree and contained miniatures).
    pub async fn delete(&self, folder_id: FolderId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(folder_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Move `child` to `new_sort_order` within its parent's sibling group.
    ///
    /// Runs as one transaction: the parent row is locked, the sibling
    /// snapshot is read, the shift is computed in memory, and only the
    /// changed rows are written. Concurrent reorders of the same group
    /// serialize on the parent lock.
    pub async fn reorder_child(
        &self,
        parent_id: FolderId,
        child_id: FolderId,
        new_sort_order: i32,
    ) -> AppResult<()> {
        let mut tx = self.begin().await?;

        let mut group = Self::lock_sibling_group(&mut tx, parent_id).await?;
        let changed = group.reorder(child_id, new_sort_order);
        Self::write_sort_orders(&mut tx, &changed).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit reorder", e))
    }

    /// Re-sequence a folder's children to `0..n-1`, closing any gap left by
    /// a deletion. Same transactional discipline as [`Self::reorder_child`].
    pub async fn normalize_children(&self, parent_id: FolderId) -> AppResult<()> {
        let mut tx = self.begin().await?;

        let mut group = Self::lock_sibling_group(&mut tx, parent_id).await?;
        let changed = group.normalize();
        Self::write_sort_orders(&mut tx, &changed).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit normalize", e)
        })
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    /// Lock the parent row and snapshot its children's positions.
    async fn lock_sibling_group(
        tx: &mut Transaction<'static, Postgres>,
        parent_id: FolderId,
    ) -> AppResult<SiblingGroup> {
        sqlx::query("SELECT id FROM folders WHERE id = $1 FOR UPDATE")
            .bind(parent_id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock parent folder", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Folder {parent_id} not found")))?;

        let entries: Vec<(FolderId, i32)> =
            sqlx::query_as("SELECT id, sort_order FROM folders WHERE parent_id = $1")
                .bind(parent_id)
                .fetch_all(&mut **tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to read sibling group", e)
                })?;

        Ok(SiblingGroup::new(
            entries
                .into_iter()
                .map(|(id, sort_order)| SiblingEntry { id, sort_order })
                .collect(),
        ))
    }

    async fn write_sort_orders(
        tx: &mut Transaction<'static, Postgres>,
        changed: &[SiblingEntry],
    ) -> AppResult<()> {
        for entry in changed {
            sqlx::query("UPDATE folders SET sort_order = $2 WHERE id = $1")
                .bind(entry.id)
                .bind(entry.sort_order)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to write sort order", e)
                })?;
        }
        Ok(())
    }
}
