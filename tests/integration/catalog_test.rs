//! Role checks on administrative endpoints.

use axum::http::StatusCode;
use bistro_entity::user::UserRole;
use serde_json::json;

use crate::helpers::{TestApp, fake_user_id};

#[tokio::test]
async fn test_regular_user_cannot_create_restaurant() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/restaurant",
            Some(json!({
                "name": "Chez Camille",
                "amOpeningTime": ["11:30", "14:00"],
                "pmOpeningTime": ["18:30", "22:00"],
                "maxGuest": 40,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_restaurant_capacity_must_fit() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request(
            "POST",
            "/api/restaurant",
            Some(json!({
                "name": "Chez Camille",
                "maxGuest": 0,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_regular_user_cannot_create_menu() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/menu",
            Some(json!({
                "title": "Menu du jour",
                "price": 1900,
                "restaurant": "00000000-0000-0000-0000-000000000001",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_category_link_rejects_invalid_ids() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request(
            "PUT",
            "/api/menu/00000000-0000-0000-0000-000000000001/category/starters",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_regular_user_cannot_list_users() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app.request("GET", "/api/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_cannot_delete_self() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{}", fake_user_id()),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_restaurant_name_is_bounded() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request(
            "POST",
            "/api/restaurant",
            Some(json!({
                "name": "La Grande Brasserie du Vieux Port de Marseille",
                "maxGuest": 40,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}
