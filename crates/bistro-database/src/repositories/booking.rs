//! Booking repository implementation.

use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::booking::Booking;

/// Repository for bookings.
///
/// Writes take a connection so they can share a transaction with the
/// restaurant lock taken during admission.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Pool used to open admission transactions.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a booking by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find booking", e))
    }

    /// Find a booking and lock its row until the transaction ends.
    pub async fn find_by_id_for_update(
        &self,
        conn: &mut PgConnection,
        id: Uuid,
    ) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock booking", e))
    }

    /// List every booking, soonest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count bookings", e))?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings ORDER BY order_date ASC, order_hour ASC, id ASC \
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list bookings", e))?;

        Ok(PageResponse::new(bookings, page, total))
    }

    /// List the bookings whose beneficiary is `user_id`.
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count user bookings", e)
            })?;

        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 \
             ORDER BY order_date ASC, order_hour ASC, id ASC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list user bookings", e)
        })?;

        Ok(PageResponse::new(bookings, page, total))
    }

    /// Persist an admitted booking.
    pub async fn insert(&self, conn: &mut PgConnection, booking: &Booking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings \
                 (id, guest_number, order_date, order_hour, allergy, restaurant_id, user_id, \
                  created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(booking.id)
        .bind(booking.guest_number)
        .bind(booking.order_date)
        .bind(booking.order_hour)
        .bind(&booking.allergy)
        .bind(booking.restaurant_id)
        .bind(booking.user_id)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            let constraint = match &e {
                sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_string),
                _ => None,
            };
            match constraint.as_deref() {
                Some("bookings_pkey") => {
                    AppError::conflict(format!("Booking {} already exists", booking.id))
                }
                Some("bookings_user_id_fkey") => {
                    AppError::not_found("User not found").with_code("BENEFICIARY_NOT_FOUND")
                }
                Some("bookings_restaurant_id_fkey") => {
                    AppError::not_found("Restaurant not found").with_code("RESTAURANT_NOT_FOUND")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create booking", e),
            }
        })
    }

    /// Overwrite the mutable fields of a booking.
    pub async fn update(&self, conn: &mut PgConnection, booking: &Booking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET guest_number = $2, order_date = $3, order_hour = $4, \
                                 allergy = $5, updated_at = $6 \
             WHERE id = $1 RETURNING *",
        )
        .bind(booking.id)
        .bind(booking.guest_number)
        .bind(booking.order_date)
        .bind(booking.order_hour)
        .bind(&booking.allergy)
        .bind(booking.updated_at)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update booking", e))?
        .ok_or_else(|| AppError::not_found(format!("Booking {} not found", booking.id)))
    }

    /// Delete a booking.
    pub async fn delete(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete booking", e))?;

        Ok(result.rows_affected() > 0)
    }
}
