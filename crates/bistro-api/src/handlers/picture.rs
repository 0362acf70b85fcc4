//! Picture handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use bistro_core::types::PageResponse;

use crate::dto::request::PictureRequest;
use crate::dto::response::PictureResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;

/// `?restaurant=` filter.
#[derive(Debug, Default, Deserialize)]
pub struct PictureFilter {
    pub restaurant: Option<Uuid>,
}

/// GET /api/picture
pub async fn list_pictures(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<PictureFilter>,
) -> ApiResult<Json<PageResponse<PictureResponse>>> {
    let page = state
        .picture_service
        .list(&auth, filter.restaurant, params.into_page_request())
        .await?;
    Ok(Json(page.map(PictureResponse::from)))
}

/// GET /api/picture/{id}
pub async fn get_picture(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PictureResponse>> {
    let picture = state.picture_service.get(&auth, id).await?;
    Ok(Json(picture.into()))
}

/// POST /api/picture
pub async fn create_picture(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PictureRequest>,
) -> ApiResult<impl IntoResponse> {
    let picture = state.picture_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        super::location("picture", picture.id),
        Json(PictureResponse::from(picture)),
    ))
}

/// PUT /api/picture/{id}
pub async fn update_picture(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<PictureRequest>,
) -> ApiResult<Json<PictureResponse>> {
    let picture = state.picture_service.update(&auth, id, req.into()).await?;
    Ok(Json(picture.into()))
}

/// DELETE /api/picture/{id}
pub async fn delete_picture(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.picture_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
