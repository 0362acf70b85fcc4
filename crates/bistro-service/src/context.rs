//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_entity::user::UserRole;

/// Who is making the current request.
///
/// Built by the HTTP layer from a validated access token and passed into
/// every service method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's id.
    pub user_id: Uuid,
    /// Role at the time the token was issued.
    pub role: UserRole,
    /// Email from the token, for logging.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Create a context stamped with the current time.
    pub fn new(user_id: Uuid, role: UserRole, email: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            email: email.into(),
            request_time: Utc::now(),
        }
    }

    /// Whether the caller is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
