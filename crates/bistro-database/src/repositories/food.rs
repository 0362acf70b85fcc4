//! Food repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::catalog::{Food, FoodInput};

/// Repository for dishes and their category links.
#[derive(Debug, Clone)]
pub struct FoodRepository {
    pool: PgPool,
}

impl FoodRepository {
    /// Create a new food repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a dish by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Food>> {
        sqlx::query_as::<_, Food>("SELECT * FROM foods WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find food", e))
    }

    /// List dishes by title.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Food>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM foods")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count food", e))?;

        let foods = sqlx::query_as::<_, Food>(
            "SELECT * FROM foods ORDER BY title ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list food", e))?;

        Ok(PageResponse::new(foods, page, total))
    }

    /// Insert a dish. Title and price must be set.
    pub async fn create(&self, id: Uuid, data: &FoodInput) -> AppResult<Food> {
        sqlx::query_as::<_, Food>(
            "INSERT INTO foods (id, title, description, price_cents) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price_cents)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create food", e))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: Uuid,
        data: &FoodInput,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Food>> {
        sqlx::query_as::<_, Food>(
            "UPDATE foods SET title = COALESCE($2, title), \
                              description = COALESCE($3, description), \
                              price_cents = COALESCE($4, price_cents), \
                              updated_at = $5 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update food", e))
    }

    /// Delete a dish.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM foods WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete food", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Category ids attached to a dish.
    pub async fn category_ids(&self, food_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT category_id FROM food_categories WHERE food_id = $1 ORDER BY category_id",
        )
        .bind(food_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load food categories", e)
        })
    }

    /// Attach a category; attaching twice is a no-op.
    pub async fn add_category(&self, food_id: Uuid, category_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO food_categories (food_id, category_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(food_id)
        .bind(category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link category", e))?;
        Ok(())
    }

    /// Detach a category. Returns whether a link existed.
    pub async fn remove_category(&self, food_id: Uuid, category_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM food_categories WHERE food_id = $1 AND category_id = $2")
                .bind(food_id)
                .bind(category_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to unlink category", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
