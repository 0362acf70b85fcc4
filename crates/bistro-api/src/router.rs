//! Route definitions for the Bistro HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with every route, threading `AppState` through.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .merge(account_routes())
        .merge(user_routes())
        .merge(booking_routes())
        .merge(restaurant_routes())
        .merge(catalog_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Registration, login, token refresh and the caller's profile
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/registration", post(handlers::account::register))
        .route("/login", post(handlers::account::login))
        .route("/auth/refresh", post(handlers::account::refresh))
        .route("/account/me", get(handlers::account::me))
        .route("/account/edit", put(handlers::account::edit))
}

/// User administration
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::users::list_users))
        .route("/users/{id}", delete(handlers::users::delete_user))
}

/// Bookings
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/booking",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route(
            "/booking/{id}",
            get(handlers::booking::get_booking)
                .put(handlers::booking::update_booking)
                .delete(handlers::booking::delete_booking),
        )
}

/// Restaurants
fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurant",
            get(handlers::restaurant::list_restaurants)
                .post(handlers::restaurant::create_restaurant),
        )
        .route(
            "/restaurant/{id}",
            get(handlers::restaurant::get_restaurant)
                .put(handlers::restaurant::update_restaurant)
                .delete(handlers::restaurant::delete_restaurant),
        )
}

/// Menus, food, categories and pictures
fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/menu",
            get(handlers::menu::list_menus).post(handlers::menu::create_menu),
        )
        .route(
            "/menu/{id}",
            get(handlers::menu::get_menu)
                .put(handlers::menu::update_menu)
                .delete(handlers::menu::delete_menu),
        )
        .route(
            "/menu/{id}/category/{category_id}",
            put(handlers::menu::add_category).delete(handlers::menu::remove_category),
        )
        .route(
            "/food",
            get(handlers::food::list_food).post(handlers::food::create_food),
        )
        .route(
            "/food/{id}",
            get(handlers::food::get_food)
                .put(handlers::food::update_food)
                .delete(handlers::food::delete_food),
        )
        .route(
            "/food/{id}/category/{category_id}",
            put(handlers::food::add_category).delete(handlers::food::remove_category),
        )
        .route(
            "/category",
            get(handlers::category::list_categories).post(handlers::category::create_category),
        )
        .route(
            "/category/{id}",
            get(handlers::category::get_category)
                .put(handlers::category::rename_category)
                .delete(handlers::category::delete_category),
        )
        .route(
            "/picture",
            get(handlers::picture::list_pictures).post(handlers::picture::create_picture),
        )
        .route(
            "/picture/{id}",
            get(handlers::picture::get_picture)
                .put(handlers::picture::update_picture)
                .delete(handlers::picture::delete_picture),
        )
}

/// Liveness and readiness
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/ready", get(handlers::health::ready))
}
