//! Category handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use bistro_core::types::PageResponse;

use crate::dto::request::CategoryRequest;
use crate::dto::response::CategoryResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/category
pub async fn list_categories(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<CategoryResponse>>> {
    let page = state
        .category_service
        .list(&auth, params.into_page_request())
        .await?;
    Ok(Json(page.map(CategoryResponse::from)))
}

/// GET /api/category/{id}
pub async fn get_category(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<CategoryResponse>> {
    let category = state.category_service.get(&auth, id).await?;
    Ok(Json(category.into()))
}

/// POST /api/category
pub async fn create_category(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let category = state.category_service.create(&auth, req.title).await?;
    Ok((
        StatusCode::CREATED,
        super::location("category", category.id),
        Json(CategoryResponse::from(category)),
    ))
}

/// PUT /api/category/{id}
pub async fn rename_category(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<CategoryRequest>,
) -> ApiResult<Json<CategoryResponse>> {
    let category = state.category_service.rename(&auth, id, req.title).await?;
    Ok(Json(category.into()))
}

/// DELETE /api/category/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.category_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
