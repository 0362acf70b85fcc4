//! Liveness endpoint and unknown routes.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_reports_version() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/kitchen", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
