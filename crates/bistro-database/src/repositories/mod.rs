//! Repository implementations for all Bistro entities.
//!
//! Every repository owns a clone of the pool. Methods that must run inside
//! a caller's transaction take `&mut PgConnection` instead (pass `&mut *tx`).

pub mod booking;
pub mod category;
pub mod food;
pub mod menu;
pub mod picture;
pub mod restaurant;
pub mod user;

pub use booking::BookingRepository;
pub use category::CategoryRepository;
pub use food::FoodRepository;
pub use menu::MenuRepository;
pub use picture::PictureRepository;
pub use restaurant::RestaurantRepository;
pub use user::UserRepository;

use sqlx::{PgPool, Postgres, Transaction};

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::result::AppResult;

/// Open a transaction on `pool`.
pub async fn begin(pool: &PgPool) -> AppResult<Transaction<'static, Postgres>> {
    pool.begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))
}

/// Commit `tx`, mapping the driver error.
pub async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e))
}
