//! Menus, food, categories and pictures.
//!
//! Reads are open to every authenticated account; writes need
//! [`SystemPermission::CatalogManage`](bistro_auth::rbac::SystemPermission).

pub mod category;
pub mod food;
pub mod menu;
pub mod picture;

pub use category::CategoryService;
pub use food::{FoodDetails, FoodService};
pub use menu::{MenuDetails, MenuService};
pub use picture::PictureService;

use bistro_core::error::AppError;

/// Reject a create payload that lacks a mandatory field.
fn require<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T, AppError> {
    value
        .as_ref()
        .ok_or_else(|| AppError::validation(format!("{field} is required")))
}

/// Prices are whole cents and never negative.
fn check_price(price_cents: Option<i32>) -> Result<(), AppError> {
    match price_cents {
        Some(price) if price < 0 => Err(AppError::validation("price must not be negative")),
        _ => Ok(()),
    }
}

/// Titles must carry at least one visible character.
fn check_title(title: Option<&String>) -> Result<(), AppError> {
    match title {
        Some(title) if title.trim().is_empty() => {
            Err(AppError::validation("title must not be blank"))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_field() {
        let missing: Option<String> = None;
        let err = require(&missing, "title").unwrap_err();
        assert_eq!(err.message, "title is required");
        assert_eq!(require(&Some(3), "price").unwrap(), &3);
    }

    #[test]
    fn test_price_and_title_checks() {
        assert!(check_price(Some(0)).is_ok());
        assert!(check_price(None).is_ok());
        assert!(check_price(Some(-1)).is_err());
        assert!(check_title(Some(&" ".to_string())).is_err());
        assert!(check_title(Some(&"Soup".to_string())).is_ok());
    }
}
