//! Food entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A dish sold à la carte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Food {
    /// Unique food identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: i32,
    /// When the dish was created.
    pub created_at: DateTime<Utc>,
    /// When the dish was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields written on create or update.
#[derive(Debug, Clone, Default)]
pub struct FoodInput {
    /// Title.
    pub title: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: Option<i32>,
}
