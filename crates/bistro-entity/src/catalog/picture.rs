//! Picture entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A photo shown on a restaurant's page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Picture {
    /// Unique picture identifier.
    pub id: Uuid,
    /// Caption.
    pub title: String,
    /// URL-safe name of the image asset.
    pub slug: String,
    /// Restaurant the picture belongs to.
    pub restaurant_id: Uuid,
    /// When the picture was added.
    pub created_at: DateTime<Utc>,
    /// When the picture was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Fields written on create or update.
#[derive(Debug, Clone, Default)]
pub struct PictureInput {
    /// Caption.
    pub title: Option<String>,
    /// Asset slug.
    pub slug: Option<String>,
    /// Owning restaurant.
    pub restaurant_id: Option<Uuid>,
}
