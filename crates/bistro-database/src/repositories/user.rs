//! User repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_entity::user::{CreateUser, UpdateUser, User};

/// Repository for user accounts.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by primary key inside an open transaction.
    pub async fn find_by_id_in(&self, conn: &mut PgConnection, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List users, newest first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total = self.count().await?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC, email ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(users, page, total))
    }

    /// Insert a new user.
    pub async fn create(&self, id: Uuid, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, password_hash, first_name, last_name, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Apply profile changes.
    pub async fn update(
        &self,
        id: Uuid,
        data: &UpdateUser,
        now: DateTime<Utc>,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET first_name = COALESCE($2, first_name), \
                              last_name = COALESCE($3, last_name), \
                              guest_number = COALESCE($4, guest_number), \
                              allergy = COALESCE($5, allergy), \
                              password_hash = COALESCE($6, password_hash), \
                              updated_at = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(data.guest_number)
        .bind(&data.allergy)
        .bind(&data.password_hash)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))
    }

    /// Delete a user together with every booking they hold.
    pub async fn delete_with_bookings(&self, id: Uuid) -> AppResult<bool> {
        let mut tx = super::begin(&self.pool).await?;

        sqlx::query("DELETE FROM bookings WHERE user_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user bookings", e)
            })?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        super::commit(tx).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
