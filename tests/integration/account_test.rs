//! Registration, login and token refresh rejections.

use axum::http::StatusCode;
use bistro_entity::user::UserRole;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_registration_rejects_invalid_email() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/registration",
            Some(json!({
                "email": "not-an-email",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_login_rejects_unknown_fields() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/login",
            Some(json!({
                "username": "camille",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}

#[tokio::test]
async fn test_refresh_rejects_access_token() {
    let app = TestApp::new();
    let access = app.token_for(UserRole::User);

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refreshToken": access })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn test_refresh_rejects_garbage() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refreshToken": "abc.def.ghi" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/account/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_token_is_not_a_bearer_token() {
    let app = TestApp::new();
    let refresh = app.refresh_token_for(UserRole::User);

    let response = app
        .request("GET", "/api/account/me", None, Some(&refresh))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_edit_rejects_oversized_allergy() {
    let app = TestApp::new();
    let token = app.token_for(UserRole::User);

    let response = app
        .request(
            "PUT",
            "/api/account/edit",
            Some(json!({ "allergy": "x".repeat(256) })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("MALFORMED_REQUEST"));
}
