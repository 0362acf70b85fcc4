//! Menu handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use bistro_core::types::PageResponse;

use crate::dto::request::MenuRequest;
use crate::dto::response::MenuResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, LinkPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// `?restaurant=` filter.
#[derive(Debug, Default, Deserialize)]
pub struct MenuFilter {
    pub restaurant: Option<Uuid>,
}

/// GET /api/menu
pub async fn list_menus(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<MenuFilter>,
) -> ApiResult<Json<PageResponse<MenuResponse>>> {
    let page = state
        .menu_service
        .list(&auth, filter.restaurant, params.into_page_request())
        .await?;
    Ok(Json(page.map(MenuResponse::from)))
}

/// GET /api/menu/{id}
pub async fn get_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<MenuResponse>> {
    let menu = state.menu_service.get(&auth, id).await?;
    Ok(Json(menu.into()))
}

/// POST /api/menu
pub async fn create_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<MenuRequest>,
) -> ApiResult<impl IntoResponse> {
    let menu = state.menu_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        super::location("menu", menu.id),
        Json(MenuResponse::from(menu)),
    ))
}

/// PUT /api/menu/{id}
pub async fn update_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<MenuRequest>,
) -> ApiResult<Json<MenuResponse>> {
    let menu = state.menu_service.update(&auth, id, req.into()).await?;
    Ok(Json(menu.into()))
}

/// DELETE /api/menu/{id}
pub async fn delete_menu(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.menu_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/menu/{id}/category/{category_id}
pub async fn add_category(
    State(state): State<AppState>,
    auth: AuthUser,
    path: LinkPath,
) -> ApiResult<Json<MenuResponse>> {
    let menu = state
        .menu_service
        .add_category(&auth, path.id, path.category_id)
        .await?;
    Ok(Json(menu.into()))
}

/// DELETE /api/menu/{id}/category/{category_id}
pub async fn remove_category(
    State(state): State<AppState>,
    auth: AuthUser,
    path: LinkPath,
) -> ApiResult<StatusCode> {
    state
        .menu_service
        .remove_category(&auth, path.id, path.category_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
