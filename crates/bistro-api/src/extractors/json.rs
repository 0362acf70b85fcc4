//! JSON body extractor with boundary validation.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use bistro_core::error::AppError;

use crate::error::ApiError;

/// Machine code for bodies rejected before reaching a service.
pub const MALFORMED_REQUEST: &str = "MALFORMED_REQUEST";

/// Like `Json<T>`, but rejections (syntax errors, wrong types, unknown
/// fields, failed `validator` rules) become a 400 `MALFORMED_REQUEST`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppError::validation(rejection.body_text()).with_code(MALFORMED_REQUEST)
            })?;

        value
            .validate()
            .map_err(|errors| AppError::validation(errors.to_string()).with_code(MALFORMED_REQUEST))?;

        Ok(Self(value))
    }
}
