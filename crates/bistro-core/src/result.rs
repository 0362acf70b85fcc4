//! Convenience result type alias for Bistro.

use crate::error::AppError;

/// A specialized `Result` type for Bistro operations.
pub type AppResult<T> = Result<T, AppError>;
