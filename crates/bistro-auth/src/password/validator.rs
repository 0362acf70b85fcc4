//! Password policy for registration and password changes.

use bistro_core::config::AuthConfig;
use bistro_core::error::AppError;

/// Rejects passwords that are too short or lack letters or digits.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Build a validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Return the first policy violation, if any.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(AppError::validation(
                "Password must contain at least one letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig::default())
    }

    #[test]
    fn test_accepts_reasonable_password() {
        assert!(validator().validate("tableFor2please").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        let err = validator().validate("ab1").unwrap_err();
        assert!(err.message.contains("at least 8"));
    }

    #[test]
    fn test_requires_letters_and_digits() {
        assert!(validator().validate("12345678").is_err());
        assert!(validator().validate("abcdefgh").is_err());
    }
}
