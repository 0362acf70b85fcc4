//! JWT token validation.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use bistro_core::config::AuthConfig;
use bistro_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Verifies signature, expiry and token type.
#[derive(Clone)]
pub struct JwtDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtDecoder {
    /// Build a decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Validate a token presented on an API request.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_expecting(token, TokenType::Access)
    }

    /// Validate a token presented to the refresh endpoint.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        self.decode_expecting(token, TokenType::Refresh)
    }

    fn decode_expecting(&self, token: &str, expected: TokenType) -> Result<Claims, AppError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AppError::authentication("Token has expired"),
                JwtErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                _ => AppError::authentication(format!("Invalid token: {e}")),
            })?
            .claims;

        if claims.token_type != expected {
            return Err(AppError::authentication(format!(
                "Wrong token type: expected {expected:?}"
            )));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use bistro_core::error::ErrorKind;
    use bistro_entity::user::{User, UserRole};

    use super::*;
    use crate::jwt::JwtEncoder;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "jane@example.com".to_string(),
            password_hash: String::new(),
            first_name: Some("Jane".to_string()),
            last_name: None,
            role: UserRole::Admin,
            guest_number: None,
            allergy: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let cfg = config("unit-test-secret-value");
        let user = user();
        let pair = JwtEncoder::new(&cfg).generate_token_pair(&user).unwrap();

        let claims = JwtDecoder::new(&cfg)
            .decode_access_token(&pair.access_token)
            .unwrap();
        assert_eq!(claims.user_id(), user.id);
        assert_eq!(claims.role, UserRole::Admin);
        assert_eq!(pair.token_type, "Bearer");
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let cfg = config("unit-test-secret-value");
        let pair = JwtEncoder::new(&cfg).generate_token_pair(&user()).unwrap();
        let decoder = JwtDecoder::new(&cfg);

        let err = decoder.decode_access_token(&pair.refresh_token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert!(decoder.decode_refresh_token(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let pair = JwtEncoder::new(&config("one-secret-for-signing"))
            .generate_token_pair(&user())
            .unwrap();
        let err = JwtDecoder::new(&config("another-secret-entirely"))
            .decode_access_token(&pair.access_token)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_rejects_garbage() {
        let decoder = JwtDecoder::new(&config("unit-test-secret-value"));
        assert!(decoder.decode_access_token("not.a.jwt").is_err());
    }
}
