//! Response types for API endpoints.

use serde::{Deserialize, Serialize};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code, e.g. `CAPACITY_EXCEEDED`.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details such as per-field validation messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
