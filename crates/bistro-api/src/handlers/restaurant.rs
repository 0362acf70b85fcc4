//! Restaurant handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use bistro_core::types::PageResponse;

use crate::dto::request::{CreateRestaurantRequest, UpdateRestaurantRequest};
use crate::dto::response::RestaurantResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/restaurant
pub async fn list_restaurants(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<RestaurantResponse>>> {
    let page = state
        .restaurant_service
        .list(&auth, params.into_page_request())
        .await?;
    Ok(Json(page.map(RestaurantResponse::from)))
}

/// GET /api/restaurant/{id}
pub async fn get_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<RestaurantResponse>> {
    let restaurant = state.restaurant_service.get(&auth, id).await?;
    Ok(Json(restaurant.into()))
}

/// POST /api/restaurant
pub async fn create_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateRestaurantRequest>,
) -> ApiResult<impl IntoResponse> {
    let restaurant = state
        .restaurant_service
        .create(&auth, req.try_into()?)
        .await?;
    Ok((
        StatusCode::CREATED,
        super::location("restaurant", restaurant.id),
        Json(RestaurantResponse::from(restaurant)),
    ))
}

/// PUT /api/restaurant/{id}
pub async fn update_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateRestaurantRequest>,
) -> ApiResult<Json<RestaurantResponse>> {
    let restaurant = state
        .restaurant_service
        .update(&auth, id, req.try_into()?)
        .await?;
    Ok(Json(restaurant.into()))
}

/// DELETE /api/restaurant/{id}
pub async fn delete_restaurant(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.restaurant_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
