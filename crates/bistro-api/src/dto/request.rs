//! Request DTOs with validation.
//!
//! Every body rejects unknown fields; the `ValidatedJson` extractor turns
//! any rejection into a 400 `MALFORMED_REQUEST`.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use bistro_core::error::AppError;
use bistro_entity::catalog::{FoodInput, MenuInput, PictureInput};
use bistro_entity::restaurant::{CreateRestaurant, UpdateRestaurant};
use bistro_service::booking::{BookingRequest, BookingUpdate};
use bistro_service::user::{ProfileChanges, Registration};

// ── Bookings ─────────────────────────────────────────────────

/// `POST /api/booking` body.
///
/// Fields stay loosely typed here; admission control decides what is
/// missing or unparseable.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBookingRequest {
    pub guest_number: Option<i64>,
    pub order_date: Option<String>,
    pub order_hour: Option<String>,
    pub restaurant: Option<String>,
    #[validate(length(max = 255))]
    pub allergy: Option<String>,
    /// Beneficiary override, admins only.
    pub user: Option<String>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            guest_number: req.guest_number,
            order_date: req.order_date,
            order_hour: req.order_hour,
            restaurant: req.restaurant,
            allergy: req.allergy,
            user: req.user,
        }
    }
}

/// `PUT /api/booking/{id}` body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookingRequest {
    pub guest_number: Option<i64>,
    pub order_date: Option<String>,
    pub order_hour: Option<String>,
    #[validate(length(max = 255))]
    pub allergy: Option<String>,
}

impl From<UpdateBookingRequest> for BookingUpdate {
    fn from(req: UpdateBookingRequest) -> Self {
        Self {
            guest_number: req.guest_number,
            order_date: req.order_date,
            order_hour: req.order_hour,
            allergy: req.allergy,
        }
    }
}

/// `GET /api/booking` filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingFilter {
    /// Only this user's bookings.
    pub user: Option<String>,
}

// ── Accounts ─────────────────────────────────────────────────

/// Registration request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrationRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
}

impl From<RegistrationRequest> for Registration {
    fn from(req: RegistrationRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

/// `PUT /api/account/edit` body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditAccountRequest {
    #[validate(length(max = 100))]
    pub first_name: Option<String>,
    #[validate(length(max = 100))]
    pub last_name: Option<String>,
    pub guest_number: Option<i64>,
    #[validate(length(max = 255))]
    pub allergy: Option<String>,
    pub password: Option<String>,
}

impl From<EditAccountRequest> for ProfileChanges {
    fn from(req: EditAccountRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            guest_number: req.guest_number,
            allergy: req.allergy,
            password: req.password,
        }
    }
}

// ── Restaurants ──────────────────────────────────────────────

/// `POST /api/restaurant` body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateRestaurantRequest {
    #[validate(length(min = 1, max = 32))]
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub am_opening_time: Vec<String>,
    #[serde(default)]
    pub pm_opening_time: Vec<String>,
    #[validate(range(min = 1, max = 32767))]
    pub max_guest: i64,
    pub owner: Option<Uuid>,
}

impl TryFrom<CreateRestaurantRequest> for CreateRestaurant {
    type Error = AppError;

    fn try_from(req: CreateRestaurantRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            description: req.description,
            am_opening_time: req.am_opening_time,
            pm_opening_time: req.pm_opening_time,
            max_guest: capacity(req.max_guest)?,
            owner_id: req.owner,
        })
    }
}

/// `PUT /api/restaurant/{id}` body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateRestaurantRequest {
    #[validate(length(min = 1, max = 32))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub am_opening_time: Option<Vec<String>>,
    pub pm_opening_time: Option<Vec<String>>,
    #[validate(range(min = 1, max = 32767))]
    pub max_guest: Option<i64>,
    pub owner: Option<Uuid>,
}

impl TryFrom<UpdateRestaurantRequest> for UpdateRestaurant {
    type Error = AppError;

    fn try_from(req: UpdateRestaurantRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: req.name,
            description: req.description,
            am_opening_time: req.am_opening_time,
            pm_opening_time: req.pm_opening_time,
            max_guest: req.max_guest.map(capacity).transpose()?,
            owner_id: req.owner,
        })
    }
}

fn capacity(max_guest: i64) -> Result<i16, AppError> {
    i16::try_from(max_guest)
        .map_err(|_| AppError::validation("maxGuest is out of range"))
}

// ── Catalog ──────────────────────────────────────────────────

/// Menu create/update body. Create requires title, price and restaurant.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Price in cents.
    pub price: Option<i32>,
    pub restaurant: Option<Uuid>,
}

impl From<MenuRequest> for MenuInput {
    fn from(req: MenuRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price_cents: req.price,
            restaurant_id: req.restaurant,
        }
    }
}

/// Food create/update body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FoodRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    /// Price in cents.
    pub price: Option<i32>,
}

impl From<FoodRequest> for FoodInput {
    fn from(req: FoodRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            price_cents: req.price,
        }
    }
}

/// Category create/rename body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryRequest {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
}

/// Picture create/update body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PictureRequest {
    #[validate(length(max = 255))]
    pub title: Option<String>,
    #[validate(length(max = 255))]
    pub slug: Option<String>,
    pub restaurant: Option<Uuid>,
}

impl From<PictureRequest> for PictureInput {
    fn from(req: PictureRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            restaurant_id: req.restaurant,
        }
    }
}
