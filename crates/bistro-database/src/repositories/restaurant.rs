//! Restaurant repository implementation.

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::restaurant::{CreateRestaurant, Restaurant, UpdateRestaurant};

/// Repository for restaurants.
#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    pool: PgPool,
}

impl RestaurantRepository {
    /// Create a new restaurant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a restaurant by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find restaurant", e)
            })
    }

    /// Read a restaurant and hold a share lock on its row until the
    /// surrounding transaction ends, so capacity and hours cannot change
    /// underneath a booking being admitted.
    pub async fn find_by_id_for_share(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1 FOR SHARE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock restaurant", e))
    }

    /// List restaurants by name.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Restaurant>> {
        let total = self.count().await?;

        let restaurants = sqlx::query_as::<_, Restaurant>(
            "SELECT * FROM restaurants ORDER BY name ASC, id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list restaurants", e))?;

        Ok(PageResponse::new(restaurants, page, total))
    }

    /// Insert a restaurant.
    pub async fn create(&self, id: Uuid, data: &CreateRestaurant) -> AppResult<Restaurant> {
        sqlx::query_as::<_, Restaurant>(
            "INSERT INTO restaurants \
                 (id, name, description, am_opening_time, pm_opening_time, max_guest, owner_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(Json(&data.am_opening_time))
        .bind(Json(&data.pm_opening_time))
        .bind(data.max_guest)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create restaurant"))
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateRestaurant,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Restaurant>> {
        sqlx::query_as::<_, Restaurant>(
            "UPDATE restaurants SET name = COALESCE($2, name), \
                                    description = COALESCE($3, description), \
                                    am_opening_time = COALESCE($4, am_opening_time), \
                                    pm_opening_time = COALESCE($5, pm_opening_time), \
                                    max_guest = COALESCE($6, max_guest), \
                                    owner_id = COALESCE($7, owner_id), \
                                    updated_at = $8 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.am_opening_time.as_ref().map(Json))
        .bind(data.pm_opening_time.as_ref().map(Json))
        .bind(data.max_guest)
        .bind(data.owner_id)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update restaurant"))
    }

    /// Delete a restaurant; bookings, menus and pictures cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete restaurant", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count restaurants.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count restaurants", e)
            })
    }
}

fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("restaurants_owner_id_key") =>
        {
            AppError::conflict("That user already owns a restaurant")
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("restaurants_owner_id_fkey") =>
        {
            AppError::not_found("Owner not found")
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
