//! Booking admission control.
//!
//! [`BookingAdmission::evaluate`] decides whether a reservation request is
//! accepted, for whom, and produces the booking to persist. Checks run in
//! a fixed order and stop at the first failure:
//!
//! 1. required fields are present and well-formed
//! 2. the restaurant exists
//! 3. only a privileged actor may name another beneficiary
//! 4. a named beneficiary must exist
//! 5. the beneficiary is resolved (named user, else the actor)
//! 6. the party fits the restaurant's capacity
//! 7. the requested time lies inside an opening window
//!
//! Nothing in this module touches the database, the wall clock or a random
//! source. Time and identifiers come from the injected [`Clock`] and
//! [`IdGenerator`].

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;
use uuid::Uuid;

use bistro_core::error::{AppError, ErrorKind};
use bistro_core::traits::{Clock, IdGenerator};
use bistro_entity::booking::{Booking, BookingChanges};
use bistro_entity::restaurant::{Restaurant, parse_wall_clock};
use bistro_entity::user::User;

/// Why a booking was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    /// A required field is missing or cannot be parsed.
    #[error("{0}")]
    MalformedRequest(String),
    /// The restaurant id does not resolve.
    #[error("Restaurant not found")]
    RestaurantNotFound,
    /// The designated beneficiary does not resolve.
    #[error("User not found")]
    BeneficiaryNotFound,
    /// The actor may not do this.
    #[error("{0}")]
    Forbidden(String),
    /// The party is larger than the restaurant accepts.
    #[error("A party of {requested} exceeds the restaurant capacity of {max}")]
    CapacityExceeded {
        /// Requested party size.
        requested: i16,
        /// Restaurant maximum.
        max: i16,
    },
    /// No opening window contains the requested time.
    #[error("The restaurant is not open at {requested}")]
    OutsideOpeningHours {
        /// Requested start time.
        requested: NaiveTime,
    },
}

impl AdmissionError {
    /// Machine-readable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) => "MALFORMED_REQUEST",
            Self::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            Self::BeneficiaryNotFound => "BENEFICIARY_NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::OutsideOpeningHours { .. } => "OUTSIDE_OPENING_HOURS",
        }
    }

    fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest(message.into())
    }
}

impl From<AdmissionError> for AppError {
    fn from(err: AdmissionError) -> Self {
        let kind = match err {
            AdmissionError::MalformedRequest(_)
            | AdmissionError::CapacityExceeded { .. }
            | AdmissionError::OutsideOpeningHours { .. } => ErrorKind::Validation,
            AdmissionError::RestaurantNotFound | AdmissionError::BeneficiaryNotFound => {
                ErrorKind::NotFound
            }
            AdmissionError::Forbidden(_) => ErrorKind::Authorization,
        };
        AppError::new(kind, err.to_string()).with_code(err.code())
    }
}

/// The caller of a booking operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// Caller's user id.
    pub id: Uuid,
    /// Admins may book for others and modify any booking.
    pub is_privileged: bool,
}

/// A reservation request as received, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    /// Party size.
    pub guest_number: Option<i64>,
    /// `YYYY-MM-DD`.
    pub order_date: Option<String>,
    /// `HH:MM` or `HH:MM:SS`.
    pub order_hour: Option<String>,
    /// Restaurant id.
    pub restaurant: Option<String>,
    /// Dietary note.
    pub allergy: Option<String>,
    /// Beneficiary override (a user id).
    pub user: Option<String>,
}

/// A request whose fields have all been parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Party size, positive.
    pub guest_number: i16,
    /// Reservation day.
    pub order_date: NaiveDate,
    /// Reservation start.
    pub order_hour: NaiveTime,
    /// Target restaurant.
    pub restaurant_id: Uuid,
    /// Dietary note, `None` when blank.
    pub allergy: Option<String>,
    /// Raw beneficiary override, `None` when absent or blank.
    pub beneficiary_override: Option<String>,
}

impl ValidatedRequest {
    /// The override as a user id, if it is one.
    pub fn beneficiary_id(&self) -> Option<Uuid> {
        self.beneficiary_override
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
    }
}

impl BookingRequest {
    /// Check presence and shape of every required field.
    pub fn validate(&self) -> Result<ValidatedRequest, AdmissionError> {
        let guest_number = parse_guest_number(self.guest_number)?;
        let order_date = parse_date(required(&self.order_date, "orderDate")?)?;
        let order_hour = parse_hour(required(&self.order_hour, "orderHour")?)?;
        let restaurant_id = Uuid::parse_str(required(&self.restaurant, "restaurant")?)
            .map_err(|_| AdmissionError::malformed("restaurant must be a valid identifier"))?;

        Ok(ValidatedRequest {
            guest_number,
            order_date,
            order_hour,
            restaurant_id,
            allergy: non_blank(&self.allergy),
            beneficiary_override: non_blank(&self.user),
        })
    }
}

/// Raw edits to an existing booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingUpdate {
    /// New party size.
    pub guest_number: Option<i64>,
    /// New day.
    pub order_date: Option<String>,
    /// New start time.
    pub order_hour: Option<String>,
    /// New dietary note.
    pub allergy: Option<String>,
}

impl BookingUpdate {
    /// Parse the fields that are present.
    pub fn validate(&self) -> Result<BookingChanges, AdmissionError> {
        if self.guest_number.is_none()
            && self.order_date.is_none()
            && self.order_hour.is_none()
            && self.allergy.is_none()
        {
            return Err(AdmissionError::malformed(
                "At least one of guestNumber, orderDate, orderHour or allergy is required",
            ));
        }

        Ok(BookingChanges {
            guest_number: self
                .guest_number
                .map(|n| parse_guest_number(Some(n)))
                .transpose()?,
            order_date: self
                .order_date
                .as_deref()
                .map(parse_date)
                .transpose()?,
            order_hour: self
                .order_hour
                .as_deref()
                .map(parse_hour)
                .transpose()?,
            allergy: self.allergy.clone(),
        })
    }
}

/// Admission control with its injected time and identity sources.
#[derive(Debug, Clone)]
pub struct BookingAdmission {
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl BookingAdmission {
    /// Create the rule set.
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Decide whether `request` is accepted.
    ///
    /// `restaurant` is the result of looking up the requested restaurant and
    /// `candidate_beneficiary` the result of looking up the override user
    /// (callers only need to perform that lookup for privileged actors).
    /// On success the returned booking is complete but not persisted.
    pub fn evaluate(
        &self,
        request: &BookingRequest,
        actor: &Actor,
        restaurant: Option<&Restaurant>,
        candidate_beneficiary: Option<&User>,
    ) -> Result<Booking, AdmissionError> {
        let request = request.validate()?;
        self.evaluate_validated(&request, actor, restaurant, candidate_beneficiary)
    }

    /// [`evaluate`](Self::evaluate) for a request that has already been
    /// through [`BookingRequest::validate`].
    pub fn evaluate_validated(
        &self,
        request: &ValidatedRequest,
        actor: &Actor,
        restaurant: Option<&Restaurant>,
        candidate_beneficiary: Option<&User>,
    ) -> Result<Booking, AdmissionError> {
        let restaurant = restaurant
            .filter(|r| r.id == request.restaurant_id)
            .ok_or(AdmissionError::RestaurantNotFound)?;

        let beneficiary = match &request.beneficiary_override {
            None => actor.id,
            Some(_) if !actor.is_privileged => {
                return Err(AdmissionError::Forbidden(
                    "Only administrators may book on behalf of another user".to_string(),
                ));
            }
            Some(_) => match (request.beneficiary_id(), candidate_beneficiary) {
                (Some(wanted), Some(user)) if user.id == wanted => user.id,
                _ => return Err(AdmissionError::BeneficiaryNotFound),
            },
        };

        check_capacity(restaurant, request.guest_number)?;
        check_opening_hours(restaurant, request.order_hour)?;

        Ok(Booking {
            id: self.ids.next_id(),
            guest_number: request.guest_number,
            order_date: request.order_date,
            order_hour: request.order_hour,
            allergy: request.allergy.clone(),
            restaurant_id: restaurant.id,
            user_id: beneficiary,
            created_at: self.clock.now(),
            updated_at: None,
        })
    }

    /// Apply `changes` to `booking`.
    ///
    /// A changed party size is checked against the restaurant's current
    /// capacity and a changed start time against its current opening
    /// windows. Untouched fields are not re-checked, so later edits to the
    /// restaurant never invalidate an existing booking.
    pub fn revise(
        &self,
        booking: &Booking,
        changes: &BookingChanges,
        restaurant: Option<&Restaurant>,
    ) -> Result<Booking, AdmissionError> {
        let mut revised = booking.clone();

        if changes.affects_admission() {
            let restaurant = restaurant
                .filter(|r| r.id == booking.restaurant_id)
                .ok_or(AdmissionError::RestaurantNotFound)?;
            if let Some(guest_number) = changes.guest_number {
                check_capacity(restaurant, guest_number)?;
            }
            if let Some(order_hour) = changes.order_hour {
                check_opening_hours(restaurant, order_hour)?;
            }
        }

        if let Some(guest_number) = changes.guest_number {
            revised.guest_number = guest_number;
        }
        if let Some(order_date) = changes.order_date {
            revised.order_date = order_date;
        }
        if let Some(order_hour) = changes.order_hour {
            revised.order_hour = order_hour;
        }
        if let Some(allergy) = &changes.allergy {
            revised.allergy = Some(allergy.trim().to_string()).filter(|a| !a.is_empty());
        }
        revised.updated_at = Some(self.clock.now());

        Ok(revised)
    }
}

/// Only the beneficiary or a privileged actor may edit or delete a booking.
pub fn authorize_modification(booking: &Booking, actor: &Actor) -> Result<(), AdmissionError> {
    if actor.is_privileged || booking.user_id == actor.id {
        Ok(())
    } else {
        Err(AdmissionError::Forbidden(
            "Only the booking's owner or an administrator may modify it".to_string(),
        ))
    }
}

fn check_capacity(restaurant: &Restaurant, guest_number: i16) -> Result<(), AdmissionError> {
    if guest_number > restaurant.max_guest {
        return Err(AdmissionError::CapacityExceeded {
            requested: guest_number,
            max: restaurant.max_guest,
        });
    }
    Ok(())
}

fn check_opening_hours(restaurant: &Restaurant, order_hour: NaiveTime) -> Result<(), AdmissionError> {
    if !restaurant.is_open_at(order_hour) {
        return Err(AdmissionError::OutsideOpeningHours {
            requested: order_hour,
        });
    }
    Ok(())
}

fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str, AdmissionError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AdmissionError::malformed(format!("{name} is required")))
}

fn non_blank(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn parse_guest_number(raw: Option<i64>) -> Result<i16, AdmissionError> {
    let raw = raw.ok_or_else(|| AdmissionError::malformed("guestNumber is required"))?;
    if raw < 1 {
        return Err(AdmissionError::malformed(
            "guestNumber must be a positive integer",
        ));
    }
    i16::try_from(raw).map_err(|_| AdmissionError::malformed("guestNumber is too large"))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AdmissionError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AdmissionError::malformed(format!("orderDate '{raw}' is not a YYYY-MM-DD date")))
}

fn parse_hour(raw: &str) -> Result<NaiveTime, AdmissionError> {
    parse_wall_clock(raw)
        .ok_or_else(|| AdmissionError::malformed(format!("orderHour '{raw}' is not an HH:MM time")))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use bistro_core::traits::{FixedClock, SequentialIdGenerator};
    use bistro_entity::user::UserRole;

    use super::*;

    const RESTAURANT: &str = "6f1c7e5a-0000-4000-8000-000000000001";
    const GUEST: &str = "6f1c7e5a-0000-4000-8000-0000000000aa";

    fn admission() -> BookingAdmission {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap());
        BookingAdmission::new(Arc::new(clock), Arc::new(SequentialIdGenerator::default()))
    }

    fn restaurant_with(am: &[&str], pm: &[&str], max_guest: i16) -> Restaurant {
        Restaurant {
            id: Uuid::parse_str(RESTAURANT).unwrap(),
            name: "Le Test".to_string(),
            description: None,
            am_opening_time: am.iter().map(|s| s.to_string()).collect(),
            pm_opening_time: pm.iter().map(|s| s.to_string()).collect(),
            max_guest,
            owner_id: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn restaurant() -> Restaurant {
        restaurant_with(&["11:30", "14:00"], &["18:30", "22:00"], 50)
    }

    fn customer() -> Actor {
        Actor {
            id: Uuid::from_u128(7),
            is_privileged: false,
        }
    }

    fn admin() -> Actor {
        Actor {
            id: Uuid::from_u128(1),
            is_privileged: true,
        }
    }

    fn guest_user() -> User {
        User {
            id: Uuid::parse_str(GUEST).unwrap(),
            email: "guest@example.com".to_string(),
            password_hash: String::new(),
            first_name: None,
            last_name: None,
            role: UserRole::User,
            guest_number: None,
            allergy: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    fn request(guests: i64, hour: &str) -> BookingRequest {
        BookingRequest {
            guest_number: Some(guests),
            order_date: Some("2025-06-14".to_string()),
            order_hour: Some(hour.to_string()),
            restaurant: Some(RESTAURANT.to_string()),
            allergy: None,
            user: None,
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_accepts_small_party_at_dinner() {
        let booking = admission()
            .evaluate(&request(4, "19:00"), &customer(), Some(&restaurant()), None)
            .unwrap();

        assert_eq!(booking.id, Uuid::from_u128(1));
        assert_eq!(booking.guest_number, 4);
        assert_eq!(booking.order_date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert_eq!(booking.order_hour, t(19, 0));
        assert_eq!(booking.restaurant_id, restaurant().id);
        assert_eq!(booking.user_id, customer().id);
        assert_eq!(
            booking.created_at,
            Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
        );
        assert_eq!(booking.updated_at, None);
    }

    #[test]
    fn test_window_end_is_exclusive() {
        let err = admission()
            .evaluate(&request(4, "14:00"), &customer(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(err, AdmissionError::OutsideOpeningHours { requested: t(14, 0) });
    }

    #[test]
    fn test_window_start_is_inclusive() {
        let admission = admission();
        for hour in ["11:30", "18:30", "13:59:59"] {
            assert!(
                admission
                    .evaluate(&request(2, hour), &customer(), Some(&restaurant()), None)
                    .is_ok(),
                "{hour} should be bookable"
            );
        }
    }

    #[test]
    fn test_between_services_is_closed() {
        let err = admission()
            .evaluate(&request(2, "16:00"), &customer(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(err.code(), "OUTSIDE_OPENING_HOURS");
    }

    #[test]
    fn test_party_over_capacity() {
        let err = admission()
            .evaluate(&request(60, "19:00"), &customer(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(
            err,
            AdmissionError::CapacityExceeded {
                requested: 60,
                max: 50
            }
        );
    }

    #[test]
    fn test_party_at_exact_capacity() {
        assert!(
            admission()
                .evaluate(&request(50, "19:00"), &customer(), Some(&restaurant()), None)
                .is_ok()
        );
    }

    #[test]
    fn test_capacity_is_checked_before_hours() {
        let err = admission()
            .evaluate(&request(60, "16:00"), &customer(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(err.code(), "CAPACITY_EXCEEDED");
    }

    #[test]
    fn test_customer_cannot_book_for_someone_else() {
        let mut req = request(4, "19:00");
        req.user = Some(GUEST.to_string());
        let err = admission()
            .evaluate(&req, &customer(), Some(&restaurant()), Some(&guest_user()))
            .unwrap_err();
        assert!(matches!(err, AdmissionError::Forbidden(_)));
    }

    #[test]
    fn test_forbidden_override_wins_over_capacity() {
        let mut req = request(60, "03:00");
        req.user = Some(GUEST.to_string());
        let err = admission()
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_admin_books_for_existing_user() {
        let mut req = request(3, "12:15");
        req.user = Some(GUEST.to_string());
        let booking = admission()
            .evaluate(&req, &admin(), Some(&restaurant()), Some(&guest_user()))
            .unwrap();
        assert_eq!(booking.user_id, guest_user().id);
    }

    #[test]
    fn test_admin_override_with_unknown_user() {
        let mut req = request(3, "12:15");
        req.user = Some(GUEST.to_string());
        let err = admission()
            .evaluate(&req, &admin(), Some(&restaurant()), None)
            .unwrap_err();
        assert_eq!(err, AdmissionError::BeneficiaryNotFound);
    }

    #[test]
    fn test_admin_override_with_unparseable_id() {
        let mut req = request(3, "12:15");
        req.user = Some("not-a-user".to_string());
        let err = admission()
            .evaluate(&req, &admin(), Some(&restaurant()), Some(&guest_user()))
            .unwrap_err();
        assert_eq!(err, AdmissionError::BeneficiaryNotFound);
    }

    #[test]
    fn test_admin_without_override_books_for_self() {
        let booking = admission()
            .evaluate(&request(2, "20:00"), &admin(), Some(&restaurant()), None)
            .unwrap();
        assert_eq!(booking.user_id, admin().id);
    }

    #[test]
    fn test_unknown_restaurant() {
        let err = admission()
            .evaluate(&request(2, "19:00"), &customer(), None, None)
            .unwrap_err();
        assert_eq!(err, AdmissionError::RestaurantNotFound);
    }

    #[test]
    fn test_restaurant_must_match_request() {
        let mut other = restaurant();
        other.id = Uuid::from_u128(99);
        let err = admission()
            .evaluate(&request(2, "19:00"), &customer(), Some(&other), None)
            .unwrap_err();
        assert_eq!(err, AdmissionError::RestaurantNotFound);
    }

    #[test]
    fn test_malformed_request_is_reported_before_missing_restaurant() {
        let mut req = request(2, "19:00");
        req.order_date = None;
        let err = admission().evaluate(&req, &customer(), None, None).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_REQUEST");
    }

    #[test]
    fn test_missing_restaurant_wins_over_forbidden_override() {
        let mut req = request(2, "19:00");
        req.user = Some(GUEST.to_string());
        let err = admission().evaluate(&req, &customer(), None, None).unwrap_err();
        assert_eq!(err, AdmissionError::RestaurantNotFound);
    }

    #[test]
    fn test_malformed_fields() {
        let admission = admission();
        let cases: [fn(&mut BookingRequest); 13] = [
            |r| r.guest_number = None,
            |r| r.guest_number = Some(0),
            |r| r.guest_number = Some(-3),
            |r| r.guest_number = Some(40_000),
            |r| r.order_date = Some("2025-13-01".to_string()),
            |r| r.order_date = Some("tomorrow".to_string()),
            |r| r.order_date = Some("   ".to_string()),
            |r| r.order_hour = None,
            |r| r.order_hour = Some("7pm".to_string()),
            |r| r.order_hour = Some("24:00".to_string()),
            |r| r.order_hour = Some("13:59:60".to_string()),
            |r| r.restaurant = None,
            |r| r.restaurant = Some("abc".to_string()),
        ];

        for (i, mutate) in cases.iter().enumerate() {
            let mut req = request(4, "19:00");
            mutate(&mut req);
            let err = admission
                .evaluate(&req, &customer(), Some(&restaurant()), None)
                .unwrap_err();
            assert_eq!(err.code(), "MALFORMED_REQUEST", "case {i}");
        }
    }

    #[test]
    fn test_no_windows_means_never_open() {
        let closed = restaurant_with(&[], &[], 50);
        let admission = admission();
        for hour in ["00:00", "08:00", "12:00", "19:00", "23:59"] {
            let err = admission
                .evaluate(&request(2, hour), &customer(), Some(&closed), None)
                .unwrap_err();
            assert_eq!(err.code(), "OUTSIDE_OPENING_HOURS", "{hour}");
        }
    }

    #[test]
    fn test_malformed_window_is_closed() {
        let odd = restaurant_with(&["14:00", "11:30"], &["18:30"], 50);
        let admission = admission();
        for hour in ["12:00", "19:00"] {
            assert!(
                admission
                    .evaluate(&request(2, hour), &customer(), Some(&odd), None)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_blank_allergy_is_dropped() {
        let mut req = request(2, "19:00");
        req.allergy = Some("  ".to_string());
        let booking = admission()
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap();
        assert_eq!(booking.allergy, None);

        req.allergy = Some("peanuts".to_string());
        let booking = admission()
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap();
        assert_eq!(booking.allergy.as_deref(), Some("peanuts"));
    }

    #[test]
    fn test_same_inputs_give_same_booking_except_id() {
        let admission = admission();
        let req = request(4, "19:00");
        let first = admission
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap();
        let second = admission
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(
            Booking {
                id: second.id,
                ..first
            },
            second
        );
    }

    #[test]
    fn test_rejection_consumes_no_identifier() {
        let admission = admission();
        assert!(
            admission
                .evaluate(&request(60, "19:00"), &customer(), Some(&restaurant()), None)
                .is_err()
        );
        let booking = admission
            .evaluate(&request(4, "19:00"), &customer(), Some(&restaurant()), None)
            .unwrap();
        assert_eq!(booking.id, Uuid::from_u128(1));
    }

    fn existing_booking() -> Booking {
        admission()
            .evaluate(&request(4, "19:00"), &customer(), Some(&restaurant()), None)
            .unwrap()
    }

    #[test]
    fn test_prevalidated_request_gives_same_booking() {
        let req = request(4, "19:00");
        let parsed = req.validate().unwrap();
        let from_raw = admission()
            .evaluate(&req, &customer(), Some(&restaurant()), None)
            .unwrap();
        let from_parsed = admission()
            .evaluate_validated(&parsed, &customer(), Some(&restaurant()), None)
            .unwrap();
        assert_eq!(from_raw, from_parsed);
    }

    #[test]
    fn test_owner_and_admin_may_modify() {
        let booking = existing_booking();
        assert!(authorize_modification(&booking, &customer()).is_ok());
        assert!(authorize_modification(&booking, &admin()).is_ok());
    }

    #[test]
    fn test_stranger_may_not_modify() {
        let stranger = Actor {
            id: Uuid::from_u128(8),
            is_privileged: false,
        };
        let err = authorize_modification(&existing_booking(), &stranger).unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }

    #[test]
    fn test_revise_rechecks_changed_party_size() {
        let changes = BookingUpdate {
            guest_number: Some(51),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let err = admission()
            .revise(&existing_booking(), &changes, Some(&restaurant()))
            .unwrap_err();
        assert_eq!(err.code(), "CAPACITY_EXCEEDED");
    }

    #[test]
    fn test_revise_rechecks_changed_hour() {
        let changes = BookingUpdate {
            order_hour: Some("22:00".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let err = admission()
            .revise(&existing_booking(), &changes, Some(&restaurant()))
            .unwrap_err();
        assert_eq!(err.code(), "OUTSIDE_OPENING_HOURS");
    }

    #[test]
    fn test_revise_note_survives_restaurant_changes() {
        let closed_now = restaurant_with(&[], &[], 2);
        let changes = BookingUpdate {
            allergy: Some("gluten".to_string()),
            order_date: Some("2025-06-21".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let revised = admission()
            .revise(&existing_booking(), &changes, Some(&closed_now))
            .unwrap();
        assert_eq!(revised.allergy.as_deref(), Some("gluten"));
        assert_eq!(
            revised.order_date,
            NaiveDate::from_ymd_opt(2025, 6, 21).unwrap()
        );
        assert_eq!(revised.guest_number, 4);
        assert!(revised.updated_at.is_some());
    }

    #[test]
    fn test_revise_applies_valid_changes() {
        let changes = BookingUpdate {
            guest_number: Some(6),
            order_hour: Some("12:00".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        let original = existing_booking();
        let revised = admission()
            .revise(&original, &changes, Some(&restaurant()))
            .unwrap();
        assert_eq!(revised.id, original.id);
        assert_eq!(revised.guest_number, 6);
        assert_eq!(revised.order_hour, t(12, 0));
        assert_eq!(revised.created_at, original.created_at);
    }

    #[test]
    fn test_empty_update_is_malformed() {
        let err = BookingUpdate::default().validate().unwrap_err();
        assert_eq!(err.code(), "MALFORMED_REQUEST");
        let err = BookingUpdate {
            order_date: Some("soon".to_string()),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.code(), "MALFORMED_REQUEST");
    }

    #[test]
    fn test_error_mapping() {
        let cases = [
            (AdmissionError::malformed("x"), ErrorKind::Validation),
            (AdmissionError::RestaurantNotFound, ErrorKind::NotFound),
            (AdmissionError::BeneficiaryNotFound, ErrorKind::NotFound),
            (AdmissionError::Forbidden("no".into()), ErrorKind::Authorization),
            (
                AdmissionError::CapacityExceeded {
                    requested: 9,
                    max: 8,
                },
                ErrorKind::Validation,
            ),
            (
                AdmissionError::OutsideOpeningHours { requested: t(3, 0) },
                ErrorKind::Validation,
            ),
        ];
        for (err, kind) in cases {
            let code = err.code();
            let app: AppError = err.into();
            assert_eq!(app.kind, kind);
            assert_eq!(app.error_code(), code);
        }
    }
}
