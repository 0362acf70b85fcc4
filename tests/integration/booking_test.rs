//! Booking endpoint rejections that happen before admission.

use axum::http::StatusCode;
use bistro_entity::user::UserRole;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_requires_authentication() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(json!({
                "guestNumber": 2,
                "orderDate": "2025-06-10",
                "orderHour": "12:30",
                "restaurant": "00000000-0000-0000-0000-000000000001",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_create_rejects_bad_token() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/booking", Some(json!({})), Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .send(
            "POST",
            "/api/booking",
            Some("{\"guestNumber\": 2,".to_string()),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_create_rejects_unknown_fields() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(json!({
                "guestNumber": 2,
                "orderDate": "2025-06-10",
                "orderHour": "12:30",
                "restaurant": "00000000-0000-0000-0000-000000000001",
                "table": 4,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_get_rejects_invalid_id() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request("GET", "/api/booking/not-a-uuid", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_list_rejects_invalid_user_filter() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::Admin);

    let response = app
        .request("GET", "/api/booking?user=42", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}
