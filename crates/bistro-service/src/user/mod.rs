//! Account self-service and user administration.

pub mod admin;
pub mod service;

pub use admin::{AdminUserService, NewAdmin};
pub use service::{AuthSession, ProfileChanges, Registration, UserService};

use bistro_core::error::AppError;

/// Trim and lowercase an email, rejecting obviously invalid addresses.
pub(crate) fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if !valid {
        return Err(AppError::validation("Invalid email format"));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            normalize_email("  Jane.Doe@Example.COM ").unwrap(),
            "jane.doe@example.com"
        );
        assert!(normalize_email("jane").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("jane@localhost").is_err());
    }
}
