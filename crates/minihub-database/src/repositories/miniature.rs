//! Miniature repository implementation.

use sqlx::PgPool;

use minihub_core::error::{AppError, ErrorKind};
use minihub_core::result::AppResult;
use minihub_core::types::{FolderId, MiniatureId, PainterId};
use minihub_entity::miniature::{CreateMiniature, Miniature};

/// Repository for miniature CRUD.
#[derive(Debug, Clone)]
pub struct MiniatureRepository {
    pool: PgPool,
}

impl MiniatureRepository {
    /// Create a new miniature repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a miniature by ID.
    pub async fn find_by_id(&self, id: MiniatureId) -> AppResult<Option<Miniature>> {
        sqlx::query_as::<_, Miniature>("SELECT * FROM miniatures WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find miniature", e))
    }

    /// List the miniatures directly contained in a folder.
    pub async fn find_by_folder(&self, folder_id: FolderId) -> AppResult<Vec<Miniature>> {
        sqlx::query_as::<_, Miniature>(
            "SELECT * FROM miniatures WHERE folder_id = $1 ORDER BY created_at ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list miniatures", e))
    }

    /// Create a new miniature.
    pub async fn create(&self, data: &CreateMiniature) -> AppResult<Miniature> {
        sqlx::query_as::<_, Miniature>(
            "INSERT INTO miniatures (id, painter_id, folder_id, name, status, count, painted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, \
                     CASE WHEN $5 = 'Painted' THEN NOW() ELSE NULL END) \
             RETURNING *",
        )
        .bind(MiniatureId::new())
        .bind(data.painter_id)
        .bind(data.folder_id)
        .bind(&data.name)
        .bind(data.status)
        .bind(data.count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create miniature", e))
    }

    /// Persist an updated miniature (name, count, status, painted_at).
    pub async fn update(&self, miniature: &Miniature) -> AppResult<Miniature> {
        sqlx::query_as::<_, Miniature>(
            "UPDATE miniatures SET name = $2, count = $3, status = $4, painted_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(miniature.id)
        .bind(&miniature.name)
        .bind(miniature.count)
        .bind(miniature.status)
        .bind(miniature.painted_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update miniature", e))?
        .ok_or_else(|| AppError::not_found(format!("Miniature {} not found", miniature.id)))
    }

    /// Delete a miniature.
    pub async fn delete(&self, id: MiniatureId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM miniatures WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete miniature", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Reassign a painter's miniatures to a target folder. Ids not owned by
    /// the painter are skipped. Returns the number of rows moved.
    pub async fn move_to_folder(
        &self,
        painter_id: PainterId,
        miniature_ids: &[MiniatureId],
        target_folder_id: FolderId,
    ) -> AppResult<u64> {
        let ids: Vec<uuid::Uuid> = miniature_ids.iter().map(|id| id.into_uuid()).collect();
        let result = sqlx::query(
            "UPDATE miniatures SET folder_id = $3 \
             WHERE id = ANY($1) AND painter_id = $2",
        )
        .bind(&ids)
        .bind(painter_id)
        .bind(target_folder_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to move miniatures", e))?;
        Ok(result.rows_affected())
    }
}
