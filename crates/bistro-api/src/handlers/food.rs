//! Food handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use bistro_core::types::PageResponse;

use crate::dto::request::FoodRequest;
use crate::dto::response::FoodResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, LinkPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/food
pub async fn list_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<FoodResponse>>> {
    let page = state
        .food_service
        .list(&auth, params.into_page_request())
        .await?;
    Ok(Json(page.map(FoodResponse::from)))
}

/// GET /api/food/{id}
pub async fn get_food(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<FoodResponse>> {
    let food = state.food_service.get(&auth, id).await?;
    Ok(Json(food.into()))
}

/// POST /api/food
pub async fn create_food(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FoodRequest>,
) -> ApiResult<impl IntoResponse> {
    let food = state.food_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        super::location("food", food.id),
        Json(FoodResponse::from(food)),
    ))
}

/// PUT /api/food/{id}
pub async fn update_food(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<FoodRequest>,
) -> ApiResult<Json<FoodResponse>> {
    let food = state.food_service.update(&auth, id, req.into()).await?;
    Ok(Json(food.into()))
}

/// DELETE /api/food/{id}
pub async fn delete_food(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.food_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/food/{id}/category/{category_id}
pub async fn add_category(
    State(state): State<AppState>,
    auth: AuthUser,
    path: LinkPath,
) -> ApiResult<Json<FoodResponse>> {
    let food = state
        .food_service
        .add_category(&auth, path.id, path.category_id)
        .await?;
    Ok(Json(food.into()))
}

/// DELETE /api/food/{id}/category/{category_id}
pub async fn remove_category(
    State(state): State<AppState>,
    auth: AuthUser,
    path: LinkPath,
) -> ApiResult<StatusCode> {
    state
        .food_service
        .remove_category(&auth, path.id, path.category_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
