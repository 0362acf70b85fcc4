//! JWT claims carried by access and refresh tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_entity::user::UserRole;

/// Claims payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    /// Role at issuance.
    pub role: UserRole,
    /// Email at issuance, for logs.
    pub email: String,
    /// Issued-at (seconds since epoch).
    pub iat: i64,
    /// Expiration (seconds since epoch).
    pub exp: i64,
    /// Token id.
    pub jti: Uuid,
    /// Access or refresh.
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Sent with every API request.
    Access,
    /// Exchanged for a fresh pair.
    Refresh,
}

impl Claims {
    /// The user id from the subject claim.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }
}
