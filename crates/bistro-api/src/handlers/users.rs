//! User administration handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use bistro_core::types::PageResponse;

use crate::dto::response::UserResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, PaginationParams};
use crate::state::AppState;

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<PageResponse<UserResponse>>> {
    let page = state
        .admin_user_service
        .list_users(&auth, params.into_page_request())
        .await?;
    Ok(Json(page.map(UserResponse::from)))
}

/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.admin_user_service.delete_user(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
