//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use bistro_core::error::AppError;

/// Hashes and verifies passwords with Argon2id and a random salt.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Create a hasher.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password into a PHC string.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Check `password` against a stored PHC string.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Stored password hash is invalid: {e}")))?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("s3cretSauce").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("s3cretSauce", &hash).unwrap());
        assert!(!hasher.verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_salts_differ() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("same-password1").unwrap();
        let b = hasher.hash_password("same-password1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        assert!(PasswordHasher::new().verify_password("x", "plaintext").is_err());
    }
}
