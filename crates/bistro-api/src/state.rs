//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use bistro_auth::jwt::JwtDecoder;
use bistro_core::config::AppConfig;
use bistro_database::DatabasePool;
use bistro_service::{
    AdminUserService, BookingService, CategoryService, FoodService, MenuService, PictureService,
    RestaurantService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: Arc<DatabasePool>,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    /// Booking admission and persistence
    pub booking_service: Arc<BookingService>,
    /// Restaurant management
    pub restaurant_service: Arc<RestaurantService>,
    /// Menu management
    pub menu_service: Arc<MenuService>,
    /// Food management
    pub food_service: Arc<FoodService>,
    /// Category management
    pub category_service: Arc<CategoryService>,
    /// Picture management
    pub picture_service: Arc<PictureService>,
    /// Account self-service
    pub user_service: Arc<UserService>,
    /// User administration
    pub admin_user_service: Arc<AdminUserService>,
}
