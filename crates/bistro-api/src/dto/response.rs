//! Response DTOs.
//!
//! Entities serialize with their column names; clients get camelCase.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use bistro_auth::jwt::TokenPair;
use bistro_entity::booking::Booking;
use bistro_entity::catalog::{Category, Food, Menu, Picture};
use bistro_entity::restaurant::Restaurant;
use bistro_entity::user::{User, UserRole};
use bistro_service::catalog::{FoodDetails, MenuDetails};
use bistro_service::user::AuthSession;

/// Booking as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub guest_number: i16,
    pub order_date: NaiveDate,
    pub order_hour: NaiveTime,
    pub allergy: Option<String>,
    pub restaurant: Uuid,
    pub user: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            guest_number: b.guest_number,
            order_date: b.order_date,
            order_hour: b.order_hour,
            allergy: b.allergy,
            restaurant: b.restaurant_id,
            user: b.user_id,
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Restaurant as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub am_opening_time: Vec<String>,
    pub pm_opening_time: Vec<String>,
    pub max_guest: i16,
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(r: Restaurant) -> Self {
        Self {
            id: r.id,
            name: r.name,
            description: r.description,
            am_opening_time: r.am_opening_time,
            pm_opening_time: r.pm_opening_time,
            max_guest: r.max_guest,
            owner: r.owner_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// User profile. Never carries the password hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: UserRole,
    pub guest_number: Option<i16>,
    pub allergy: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            role: u.role,
            guest_number: u.guest_number,
            allergy: u.allergy,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}

/// Login and registration response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

impl From<AuthSession> for AuthResponse {
    fn from(session: AuthSession) -> Self {
        Self {
            user: session.user.into(),
            tokens: session.tokens,
        }
    }
}

/// Menu, with category ids on single-item reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Price in cents.
    pub price: i32,
    pub restaurant: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Uuid>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Menu> for MenuResponse {
    fn from(m: Menu) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            price: m.price_cents,
            restaurant: m.restaurant_id,
            category_ids: None,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

impl From<MenuDetails> for MenuResponse {
    fn from(details: MenuDetails) -> Self {
        Self {
            category_ids: Some(details.category_ids),
            ..details.menu.into()
        }
    }
}

/// Dish, with category ids on single-item reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    /// Price in cents.
    pub price: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_ids: Option<Vec<Uuid>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Food> for FoodResponse {
    fn from(f: Food) -> Self {
        Self {
            id: f.id,
            title: f.title,
            description: f.description,
            price: f.price_cents,
            category_ids: None,
            created_at: f.created_at,
            updated_at: f.updated_at,
        }
    }
}

impl From<FoodDetails> for FoodResponse {
    fn from(details: FoodDetails) -> Self {
        Self {
            category_ids: Some(details.category_ids),
            ..details.food.into()
        }
    }
}

/// Category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            title: c.title,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Picture.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub restaurant: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Picture> for PictureResponse {
    fn from(p: Picture) -> Self {
        Self {
            id: p.id,
            title: p.title,
            slug: p.slug,
            restaurant: p.restaurant_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Liveness check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Readiness check response.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub database: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_response_is_camel_case() {
        let booking = Booking {
            id: Uuid::from_u128(1),
            guest_number: 4,
            order_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            order_hour: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
            allergy: None,
            restaurant_id: Uuid::from_u128(2),
            user_id: Uuid::from_u128(3),
            created_at: Utc::now(),
            updated_at: None,
        };
        let value = serde_json::to_value(BookingResponse::from(booking)).unwrap();
        assert_eq!(value["guestNumber"], 4);
        assert_eq!(value["orderDate"], "2030-06-01");
        assert_eq!(value["orderHour"], "19:00:00");
        assert_eq!(value["restaurant"], Uuid::from_u128(2).to_string());
        assert!(value.get("restaurant_id").is_none());
    }

    #[test]
    fn test_list_items_omit_category_ids() {
        let food = Food {
            id: Uuid::from_u128(5),
            title: "Soupe".to_string(),
            description: None,
            price_cents: 850,
            created_at: Utc::now(),
            updated_at: None,
        };
        let value = serde_json::to_value(FoodResponse::from(food.clone())).unwrap();
        assert!(value.get("categoryIds").is_none());

        let details = FoodDetails {
            food,
            category_ids: vec![Uuid::from_u128(9)],
        };
        let value = serde_json::to_value(FoodResponse::from(details)).unwrap();
        assert_eq!(value["categoryIds"][0], Uuid::from_u128(9).to_string());
        assert_eq!(value["price"], 850);
    }
}
