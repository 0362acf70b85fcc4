//! Registration, login and profile handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use bistro_auth::jwt::TokenPair;

use crate::dto::request::{EditAccountRequest, LoginRequest, RefreshRequest, RegistrationRequest};
use crate::dto::response::{AuthResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/registration
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RegistrationRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let session = state.user_service.register(req.into()).await?;
    Ok((StatusCode::CREATED, Json(session.into())))
}

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let session = state.user_service.login(&req.email, &req.password).await?;
    Ok(Json(session.into()))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<TokenPair>> {
    let tokens = state.user_service.refresh(&req.refresh_token).await?;
    Ok(Json(tokens))
}

/// GET /api/account/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.me(&auth).await?;
    Ok(Json(user.into()))
}

/// PUT /api/account/edit
pub async fn edit(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<EditAccountRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.user_service.edit_profile(&auth, req.into()).await?;
    Ok(Json(user.into()))
}
