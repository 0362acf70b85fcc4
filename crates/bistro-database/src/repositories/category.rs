//! Category repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::catalog::Category;

/// Repository for categories.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// List categories alphabetically.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Category>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count categories", e)
            })?;

        let categories = sqlx::query_as::<_, Category>(
            "SELECT * FROM categories ORDER BY title ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))?;

        Ok(PageResponse::new(categories, page, total))
    }

    /// Insert a category.
    pub async fn create(&self, id: Uuid, title: &str) -> AppResult<Category> {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (id, title) VALUES ($1, $2) RETURNING *",
        )
        .bind(id)
        .bind(title)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, title, "Failed to create category"))
    }

    /// Rename a category.
    pub async fn rename(
        &self,
        id: Uuid,
        title: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "UPDATE categories SET title = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(title)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, title, "Failed to rename category"))
    }

    /// Delete a category; its menu and food links cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete category", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, title: &str, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("categories_title_key") =>
        {
            AppError::conflict(format!("Category '{title}' already exists"))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
