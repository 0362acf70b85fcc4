//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A label such as "Vegetarian" attached to menus and food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: Uuid,
    /// Title, unique.
    pub title: String,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last renamed.
    pub updated_at: Option<DateTime<Utc>>,
}
