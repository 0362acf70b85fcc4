//! Request handlers, one module per resource.

pub mod account;
pub mod booking;
pub mod category;
pub mod food;
pub mod health;
pub mod menu;
pub mod picture;
pub mod restaurant;
pub mod users;

use axum::http::HeaderName;
use axum::http::header::LOCATION;
use uuid::Uuid;

/// `Location` header pointing at a freshly created resource.
fn location(collection: &str, id: Uuid) -> [(HeaderName, String); 1] {
    [(LOCATION, format!("/api/{collection}/{id}"))]
}
