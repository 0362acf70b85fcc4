//! Booking lifecycle against a real database.
//!
//! Each test skips when `BISTRO_TEST_DATABASE_URL` is unset. Fixtures use
//! fresh ids, so the tests can share one database and run in parallel.

use axum::http::StatusCode;
use bistro_entity::user::UserRole;
use serde_json::{Value, json};

use crate::helpers::TestApp;

fn booking_body(restaurant: impl std::fmt::Display, guests: i64, hour: &str) -> Value {
    json!({
        "guestNumber": guests,
        "orderDate": "2030-06-04",
        "orderHour": hour,
        "restaurant": restaurant.to_string(),
    })
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn test_create_returns_location_and_books_for_caller() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;
    let token = app.token_of(&user);

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 4, "12:30")),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    let id = id_of(&response.body);
    assert_eq!(response.location, Some(format!("/api/booking/{id}")));
    assert_eq!(response.body["user"], json!(user.id.to_string()));
    assert_eq!(response.body["restaurant"], json!(restaurant.id.to_string()));
    assert_eq!(response.body["guestNumber"], json!(4));

    let fetched = app
        .request("GET", &format!("/api/booking/{id}"), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["id"], json!(id));
}

#[tokio::test]
async fn test_create_rejects_party_over_capacity() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 51, "12:30")),
            Some(&app.token_of(&user)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("CAPACITY_EXCEEDED"));
}

#[tokio::test]
async fn test_create_rejects_closed_hour() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 2, "16:00")),
            Some(&app.token_of(&user)),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), Some("OUTSIDE_OPENING_HOURS"));
}

#[tokio::test]
async fn test_create_for_unknown_restaurant() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;

    let response = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(uuid::Uuid::new_v4(), 2, "12:30")),
            Some(&app.token_of(&user)),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), Some("RESTAURANT_NOT_FOUND"));
}

#[tokio::test]
async fn test_regular_user_cannot_book_for_someone_else() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let other = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;

    let mut body = booking_body(restaurant.id, 2, "19:00");
    body["user"] = json!(other.id.to_string());
    let response = app
        .request("POST", "/api/booking", Some(body), Some(&app.token_of(&user)))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn test_admin_books_on_behalf_of_user() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_test_user(UserRole::Admin).await;
    let guest = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;

    let mut body = booking_body(restaurant.id, 6, "19:00");
    body["user"] = json!(guest.id.to_string());
    let response = app
        .request("POST", "/api/booking", Some(body), Some(&app.token_of(&admin)))
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["user"], json!(guest.id.to_string()));

    // The beneficiary sees it in their own list.
    let list = app
        .request("GET", "/api/booking", None, Some(&app.token_of(&guest)))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["totalItems"], json!(1));
    assert_eq!(list.body["items"][0]["id"], response.body["id"]);
}

#[tokio::test]
async fn test_list_of_other_user_is_forbidden_for_regular_user() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let other = app.create_test_user(UserRole::User).await;

    let response = app
        .request(
            "GET",
            &format!("/api/booking?user={}", other.id),
            None,
            Some(&app.token_of(&user)),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), Some("FORBIDDEN"));
}

#[tokio::test]
async fn test_stranger_cannot_edit_or_cancel() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let owner = app.create_test_user(UserRole::User).await;
    let stranger = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;

    let created = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 2, "12:00")),
            Some(&app.token_of(&owner)),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let path = format!("/api/booking/{}", id_of(&created.body));
    let token = app.token_of(&stranger);

    let edit = app
        .request("PUT", &path, Some(json!({ "guestNumber": 3 })), Some(&token))
        .await;
    assert_eq!(edit.status, StatusCode::FORBIDDEN);

    let cancel = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(cancel.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_cancel_then_fetch_is_not_found() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;
    let token = app.token_of(&user);

    let created = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 2, "20:00")),
            Some(&token),
        )
        .await;
    let path = format!("/api/booking/{}", id_of(&created.body));

    let cancel = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(cancel.status, StatusCode::NO_CONTENT);

    let fetched = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(fetched.status, StatusCode::NOT_FOUND);

    let again = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_concurrent_edits_keep_both_changes() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;
    let token = app.token_of(&user);

    let created = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 2, "12:30")),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let path = format!("/api/booking/{}", id_of(&created.body));

    for round in 0..10 {
        let guests = 3 + round;
        let allergy = format!("peanuts {round}");

        let (first, second) = tokio::join!(
            app.request(
                "PUT",
                &path,
                Some(json!({ "guestNumber": guests })),
                Some(&token)
            ),
            app.request(
                "PUT",
                &path,
                Some(json!({ "allergy": allergy })),
                Some(&token)
            ),
        );
        assert_eq!(first.status, StatusCode::OK, "{:?}", first.body);
        assert_eq!(second.status, StatusCode::OK, "{:?}", second.body);

        let stored = app.request("GET", &path, None, Some(&token)).await;
        assert_eq!(stored.body["guestNumber"], json!(guests), "round {round}");
        assert_eq!(stored.body["allergy"], json!(allergy), "round {round}");
    }
}

#[tokio::test]
async fn test_deleted_account_token_is_refused() {
    let Some(app) = TestApp::with_database().await else {
        return;
    };
    let admin = app.create_test_user(UserRole::Admin).await;
    let user = app.create_test_user(UserRole::User).await;
    let restaurant = app.create_test_restaurant().await;
    let token = app.token_of(&user);

    let removed = app
        .request(
            "DELETE",
            &format!("/api/users/{}", user.id),
            None,
            Some(&app.token_of(&admin)),
        )
        .await;
    assert_eq!(removed.status, StatusCode::NO_CONTENT, "{:?}", removed.body);

    let create = app
        .request(
            "POST",
            "/api/booking",
            Some(booking_body(restaurant.id, 2, "12:30")),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::UNAUTHORIZED);

    let list = app.request("GET", "/api/booking", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::UNAUTHORIZED);
}
