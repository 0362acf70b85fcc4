//! Shared type definitions.

pub mod pagination;
pub mod response;

pub use pagination::{PageRequest, PageResponse};
pub use response::ApiErrorResponse;
