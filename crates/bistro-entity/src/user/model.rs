//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Login email, unique case-insensitively.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Account role.
    pub role: UserRole,
    /// Usual party size, used to prefill booking forms.
    pub guest_number: Option<i16>,
    /// Usual dietary note.
    pub allergy: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last edited.
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// "First Last", falling back to the email when no name is set.
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.email.clone(),
        }
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login email.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Given name.
    pub first_name: Option<String>,
    /// Family name.
    pub last_name: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

/// Profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New usual party size.
    pub guest_number: Option<i16>,
    /// New dietary note.
    pub allergy: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}
