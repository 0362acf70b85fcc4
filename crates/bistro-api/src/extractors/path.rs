//! Typed path parameter extractors.
//!
//! `Path<Uuid>` rejects with a plain-text body; these report a JSON
//! `MALFORMED_REQUEST` like every other boundary failure.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

use bistro_core::error::AppError;

use super::json::MALFORMED_REQUEST;
use crate::error::ApiError;

/// Parses a UUID from a path segment.
pub fn parse_uuid(s: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s)
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")).with_code(MALFORMED_REQUEST))
}

/// A single `{id}` segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Uuid);

impl<S: Send + Sync> FromRequestParts<S> for IdPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()).with_code(MALFORMED_REQUEST))?;
        Ok(Self(parse_uuid(&raw)?))
    }
}

/// An `{id}/category/{category_id}` pair.
#[derive(Debug, Clone, Copy)]
pub struct LinkPath {
    pub id: Uuid,
    pub category_id: Uuid,
}

impl<S: Send + Sync> FromRequestParts<S> for LinkPath {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((id, category_id)) = Path::<(String, String)>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()).with_code(MALFORMED_REQUEST))?;
        Ok(Self {
            id: parse_uuid(&id)?,
            category_id: parse_uuid(&category_id)?,
        })
    }
}
