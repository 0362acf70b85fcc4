//! Application builder: wires services, router and middleware into an
//! Axum app and serves it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use bistro_auth::jwt::{JwtDecoder, JwtEncoder};
use bistro_auth::password::{PasswordHasher, PasswordValidator};
use bistro_auth::rbac::RbacEnforcer;
use bistro_core::config::AppConfig;
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use bistro_database::DatabasePool;
use bistro_database::repositories::{
    BookingRepository, CategoryRepository, FoodRepository, MenuRepository, PictureRepository,
    RestaurantRepository, UserRepository,
};
use bistro_service::{
    AdminUserService, BookingAdmission, BookingService, CategoryService, FoodService, MenuService,
    PictureService, RestaurantService, UserService,
};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Construct repositories and services over `db` with the system clock
/// and random ids.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    build_state_with(
        config,
        db,
        Arc::new(SystemClock),
        Arc::new(RandomIdGenerator),
    )
}

/// Like [`build_state`], with an explicit clock and id source.
pub fn build_state_with(
    config: AppConfig,
    db: DatabasePool,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
) -> AppState {
    let pool = db.pool().clone();

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(pool.clone()));
    let restaurant_repo = Arc::new(RestaurantRepository::new(pool.clone()));
    let booking_repo = Arc::new(BookingRepository::new(pool.clone()));
    let menu_repo = Arc::new(MenuRepository::new(pool.clone()));
    let food_repo = Arc::new(FoodRepository::new(pool.clone()));
    let category_repo = Arc::new(CategoryRepository::new(pool.clone()));
    let picture_repo = Arc::new(PictureRepository::new(pool));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
    let rbac_enforcer = Arc::new(RbacEnforcer::new());

    // ── Services ─────────────────────────────────────────────────
    let admission = Arc::new(BookingAdmission::new(Arc::clone(&clock), Arc::clone(&ids)));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_repo),
        Arc::clone(&restaurant_repo),
        Arc::clone(&user_repo),
        admission,
        Arc::clone(&rbac_enforcer),
    ));
    let restaurant_service = Arc::new(RestaurantService::new(
        Arc::clone(&restaurant_repo),
        Arc::clone(&rbac_enforcer),
        Arc::clone(&clock),
        Arc::clone(&ids),
    ));
    let menu_service = Arc::new(MenuService::new(
        menu_repo,
        Arc::clone(&restaurant_repo),
        Arc::clone(&category_repo),
        Arc::clone(&rbac_enforcer),
        Arc::clone(&clock),
        Arc::clone(&ids),
    ));
    let food_service = Arc::new(FoodService::new(
        food_repo,
        Arc::clone(&category_repo),
        Arc::clone(&rbac_enforcer),
        Arc::clone(&clock),
        Arc::clone(&ids),
    ));
    let category_service = Arc::new(CategoryService::new(
        category_repo,
        Arc::clone(&rbac_enforcer),
        Arc::clone(&clock),
        Arc::clone(&ids),
    ));
    let picture_service = Arc::new(PictureService::new(
        picture_repo,
        restaurant_repo,
        Arc::clone(&rbac_enforcer),
        Arc::clone(&clock),
        Arc::clone(&ids),
    ));
    let user_service = Arc::new(UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        jwt_encoder,
        Arc::clone(&jwt_decoder),
        clock,
        Arc::clone(&ids),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        user_repo,
        password_hasher,
        password_validator,
        rbac_enforcer,
        ids,
    ));

    AppState {
        config: Arc::new(config),
        db: Arc::new(db),
        jwt_decoder,
        booking_service,
        restaurant_service,
        menu_service,
        food_service,
        category_service,
        picture_service,
        user_service,
        admin_user_service,
    }
}

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the API until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config, db);
    let db = Arc::clone(&state.db);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(%addr, "Bistro server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!(grace_seconds = grace.as_secs(), "Draining database connections");
    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within the grace period");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
