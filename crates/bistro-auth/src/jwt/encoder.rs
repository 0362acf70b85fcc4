//! JWT token creation.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_core::config::AuthConfig;
use bistro_core::error::AppError;
use bistro_entity::user::User;

use super::claims::{Claims, TokenType};

/// Signs access and refresh tokens with HS256.
#[derive(Clone)]
pub struct JwtEncoder {
    encoding_key: EncodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

/// A freshly issued access + refresh pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Always `"Bearer"`.
    pub token_type: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Build an encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(config.jwt_access_ttl_minutes as i64),
            refresh_ttl: Duration::hours(config.jwt_refresh_ttl_hours as i64),
        }
    }

    /// Issue an access + refresh pair for `user`.
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        let now = Utc::now();
        let expires_at = now + self.access_ttl;

        let access_token = self.sign(user, TokenType::Access, now, expires_at)?;
        let refresh_token = self.sign(user, TokenType::Refresh, now, now + self.refresh_ttl)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_at,
        })
    }

    /// Issue a lone access token.
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        self.sign(user, TokenType::Access, now, now + self.access_ttl)
    }

    fn sign(
        &self,
        user: &User,
        token_type: TokenType,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = Claims {
            sub: user.id,
            role: user.role,
            email: user.email.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign {token_type:?} token: {e}")))
    }
}
