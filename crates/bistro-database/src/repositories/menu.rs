//! Menu repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::catalog::{Menu, MenuInput};

/// Repository for menus and their category links.
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: PgPool,
}

impl MenuRepository {
    /// Create a new menu repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a menu by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find menu", e))
    }

    /// List menus, optionally only those of one restaurant.
    pub async fn find_all(
        &self,
        restaurant_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Menu>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM menus WHERE ($1::uuid IS NULL OR restaurant_id = $1)",
        )
        .bind(restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count menus", e))?;

        let menus = sqlx::query_as::<_, Menu>(
            "SELECT * FROM menus WHERE ($1::uuid IS NULL OR restaurant_id = $1) \
             ORDER BY title ASC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(restaurant_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list menus", e))?;

        Ok(PageResponse::new(menus, page, total))
    }

    /// Insert a menu. Title, price and restaurant must be set.
    pub async fn create(&self, id: Uuid, data: &MenuInput) -> AppResult<Menu> {
        sqlx::query_as::<_, Menu>(
            "INSERT INTO menus (id, title, description, price_cents, restaurant_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(data.restaurant_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create menu", e))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: Uuid,
        data: &MenuInput,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Menu>> {
        sqlx::query_as::<_, Menu>(
            "UPDATE menus SET title = COALESCE($2, title), \
                              description = COALESCE($3, description), \
                              price_cents = COALESCE($4, price_cents), \
                              restaurant_id = COALESCE($5, restaurant_id), \
                              updated_at = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.price_cents)
        .bind(data.restaurant_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update menu", e))
    }

    /// Delete a menu.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete menu", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Category ids attached to a menu.
    pub async fn category_ids(&self, menu_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT category_id FROM menu_categories WHERE menu_id = $1 ORDER BY category_id",
        )
        .bind(menu_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load menu categories", e)
        })
    }

    /// Attach a category; attaching twice is a no-op.
    pub async fn add_category(&self, menu_id: Uuid, category_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO menu_categories (menu_id, category_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(menu_id)
        .bind(category_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to link category", e))?;
        Ok(())
    }

    /// Detach a category. Returns whether a link existed.
    pub async fn remove_category(&self, menu_id: Uuid, category_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM menu_categories WHERE menu_id = $1 AND category_id = $2")
                .bind(menu_id)
                .bind(category_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to unlink category", e)
                })?;
        Ok(result.rows_affected() > 0)
    }
}
