//! Menu entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A set menu offered by a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Menu {
    /// Unique menu identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i32,
    /// Owning restaurant.
    pub restaurant_id: Uuid,
    /// When the menu was created.
    pub created_at: DateTime<Utc>,
    /// When the menu was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields written on create or update. On update `None` keeps the value.
#[derive(Debug, Clone, Default)]
pub struct MenuInput {
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: Option<i32>,
    /// Owning restaurant.
    pub restaurant_id: Option<Uuid>,
}
