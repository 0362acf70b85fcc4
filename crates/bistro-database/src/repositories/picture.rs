//! Picture repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::catalog::{Picture, PictureInput};

/// Repository for restaurant pictures.
#[derive(Debug, Clone)]
pub struct PictureRepository {
    pool: PgPool,
}

impl PictureRepository {
    /// Create a new picture repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a picture by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Picture>> {
        sqlx::query_as::<_, Picture>("SELECT * FROM pictures WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find picture", e))
    }

    /// List pictures, optionally only those of one restaurant.
    pub async fn find_all(
        &self,
        restaurant_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Picture>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pictures WHERE ($1::uuid IS NULL OR restaurant_id = $1)",
        )
        .bind(restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count pictures", e))?;

        let pictures = sqlx::query_as::<_, Picture>(
            "SELECT * FROM pictures WHERE ($1::uuid IS NULL OR restaurant_id = $1) \
             ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(restaurant_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list pictures", e))?;

        Ok(PageResponse::new(pictures, page, total))
    }

    /// Insert a picture. All fields must be set.
    pub async fn create(&self, id: Uuid, data: &PictureInput) -> AppResult<Picture> {
        sqlx::query_as::<_, Picture>(
            "INSERT INTO pictures (id, title, slug, restaurant_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.slug)
        .bind(data.restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, data, "Failed to create picture"))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: Uuid,
        data: &PictureInput,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Picture>> {
        sqlx::query_as::<_, Picture>(
            "UPDATE pictures SET title = COALESCE($2, title), \
                                 slug = COALESCE($3, slug), \
                                 restaurant_id = COALESCE($4, restaurant_id), \
                                 updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.slug)
        .bind(data.restaurant_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, data, "Failed to update picture"))
    }

    /// Delete a picture.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM pictures WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete picture", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, data: &PictureInput, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("pictures_slug_key") => {
            AppError::conflict(format!(
                "Picture slug '{}' is already taken",
                data.slug.as_deref().unwrap_or_default()
            ))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
