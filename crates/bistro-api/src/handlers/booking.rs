//! Booking handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::dto::request::{BookingFilter, CreateBookingRequest, UpdateBookingRequest};
use crate::dto::response::BookingResponse;
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AuthUser, IdPath, PaginationParams, ValidatedJson};
use crate::state::AppState;
use bistro_core::types::PageResponse;

/// POST /api/booking
pub async fn create_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<impl IntoResponse> {
    let booking = state.booking_service.create(&auth, req.into()).await?;
    Ok((
        StatusCode::CREATED,
        super::location("booking", booking.id),
        Json(BookingResponse::from(booking)),
    ))
}

/// GET /api/booking
pub async fn list_bookings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<BookingFilter>,
) -> ApiResult<Json<PageResponse<BookingResponse>>> {
    let user = filter.user.as_deref().map(parse_uuid).transpose()?;
    let page = state
        .booking_service
        .list(&auth, user, params.into_page_request())
        .await?;
    Ok(Json(page.map(BookingResponse::from)))
}

/// GET /api/booking/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state.booking_service.get(&auth, id).await?;
    Ok(Json(booking.into()))
}

/// PUT /api/booking/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
    ValidatedJson(req): ValidatedJson<UpdateBookingRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let booking = state.booking_service.update(&auth, id, req.into()).await?;
    Ok(Json(booking.into()))
}

/// DELETE /api/booking/{id}
pub async fn delete_booking(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<StatusCode> {
    state.booking_service.delete(&auth, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
