//! Restaurant entity model.

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::opening::OpeningWindow;

/// A restaurant that accepts bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Restaurant {
    /// Unique restaurant identifier.
    pub id: Uuid,
    /// Display name (at most 32 characters).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Lunch service as stored, e.g. `["11:30", "14:00"]`.
    #[sqlx(json)]
    pub am_opening_time: Vec<String>,
    /// Dinner service as stored, e.g. `["18:30", "22:00"]`.
    #[sqlx(json)]
    pub pm_opening_time: Vec<String>,
    /// Largest party accepted in a single booking.
    pub max_guest: i16,
    /// Owning account, if any.
    pub owner_id: Option<Uuid>,
    /// When the restaurant was created.
    pub created_at: DateTime<Utc>,
    /// When the restaurant was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Restaurant {
    /// Lunch window, `None` when closed or malformed.
    pub fn morning_window(&self) -> Option<OpeningWindow> {
        OpeningWindow::parse(self.am_opening_time.as_slice())
    }

    /// Dinner window, `None` when closed or malformed.
    pub fn afternoon_window(&self) -> Option<OpeningWindow> {
        OpeningWindow::parse(self.pm_opening_time.as_slice())
    }

    /// Whether a booking may start at `time`.
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        [self.morning_window(), self.afternoon_window()]
            .into_iter()
            .flatten()
            .any(|window| window.contains(time))
    }
}

/// Data required to create a restaurant.
#[derive(Debug, Clone)]
pub struct CreateRestaurant {
    /// Display name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Lunch service pair.
    pub am_opening_time: Vec<String>,
    /// Dinner service pair.
    pub pm_opening_time: Vec<String>,
    /// Capacity per booking.
    pub max_guest: i16,
    /// Owning account.
    pub owner_id: Option<Uuid>,
}

/// Partial restaurant update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRestaurant {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New lunch service pair.
    pub am_opening_time: Option<Vec<String>>,
    /// New dinner service pair.
    pub pm_opening_time: Option<Vec<String>>,
    /// New capacity.
    pub max_guest: Option<i16>,
    /// New owner.
    pub owner_id: Option<Uuid>,
}
