//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::types::ApiErrorResponse;

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
        ErrorKind::Authorization => StatusCode::FORBIDDEN,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error body returned to clients.
pub fn error_body(err: &AppError) -> ApiErrorResponse {
    ApiErrorResponse {
        error: err.error_code().to_string(),
        message: err.message.clone(),
        details: None,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status = status_for(err.kind);

        if status.is_server_error() {
            match &err.source {
                Some(source) => {
                    tracing::error!(error = %err.message, source = %source, "Request failed")
                }
                None => tracing::error!(error = %err.message, "Request failed"),
            }
        }

        (status, Json(error_body(&err))).into_response()
    }
}

/// Response wrapper for [`AppError`].
///
/// `AppError` lives in `bistro-core`, which knows nothing about HTTP, so
/// handlers return this newtype instead. `?` converts automatically.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// Result alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(status_for(ErrorKind::Validation), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(ErrorKind::Authentication), StatusCode::UNAUTHORIZED);
        assert_eq!(status_for(ErrorKind::Authorization), StatusCode::FORBIDDEN);
        assert_eq!(status_for(ErrorKind::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(status_for(ErrorKind::Database), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_body_uses_specific_code() {
        let err = AppError::validation("Too many guests").with_code("CAPACITY_EXCEEDED");
        let body = error_body(&err);
        assert_eq!(body.error, "CAPACITY_EXCEEDED");
        assert_eq!(body.message, "Too many guests");

        let response = ApiError(err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
