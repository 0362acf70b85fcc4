//! Booking entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An accepted table reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Party size.
    pub guest_number: i16,
    /// Day of the reservation.
    pub order_date: NaiveDate,
    /// Wall-clock start of the reservation.
    pub order_hour: NaiveTime,
    /// Dietary note.
    pub allergy: Option<String>,
    /// Booked restaurant.
    pub restaurant_id: Uuid,
    /// Beneficiary of the booking.
    pub user_id: Uuid,
    /// When the booking was accepted.
    pub created_at: DateTime<Utc>,
    /// When the booking was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Parsed edits to an existing booking; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingChanges {
    /// New party size.
    pub guest_number: Option<i16>,
    /// New day.
    pub order_date: Option<NaiveDate>,
    /// New start time.
    pub order_hour: Option<NaiveTime>,
    /// New dietary note.
    pub allergy: Option<String>,
}

impl BookingChanges {
    /// Whether the edit touches fields that admission control governs.
    pub fn affects_admission(&self) -> bool {
        self.guest_number.is_some() || self.order_hour.is_some()
    }
}
