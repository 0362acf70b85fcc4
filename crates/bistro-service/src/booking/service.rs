//! Booking persistence around admission control.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::{self, BookingRepository, RestaurantRepository, UserRepository};
use bistro_entity::booking::Booking;
use bistro_entity::user::User;

use super::admission::{
    Actor, BookingAdmission, BookingRequest, BookingUpdate, authorize_modification,
};
use crate::context::RequestContext;

/// Creates, reads, edits and cancels bookings.
#[derive(Debug, Clone)]
pub struct BookingService {
    booking_repo: Arc<BookingRepository>,
    restaurant_repo: Arc<RestaurantRepository>,
    user_repo: Arc<UserRepository>,
    admission: Arc<BookingAdmission>,
    rbac: Arc<RbacEnforcer>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        booking_repo: Arc<BookingRepository>,
        restaurant_repo: Arc<RestaurantRepository>,
        user_repo: Arc<UserRepository>,
        admission: Arc<BookingAdmission>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            booking_repo,
            restaurant_repo,
            user_repo,
            admission,
            rbac,
        }
    }

    /// Admit and store a booking.
    ///
    /// The restaurant row is share-locked for the whole transaction, so a
    /// concurrent change to its capacity or hours waits until this booking
    /// has been committed or rolled back.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        request: BookingRequest,
    ) -> Result<Booking, AppError> {
        let parsed = request.validate()?;

        let mut tx = repositories::begin(self.booking_repo.pool()).await?;

        let caller = self
            .user_repo
            .find_by_id_in(&mut tx, ctx.user_id)
            .await?
            .ok_or_else(account_gone)?;
        self.rbac
            .require_permission(caller.role, SystemPermission::BookingCreate)?;
        let actor = self.actor(&caller, SystemPermission::BookingOnBehalf);

        let restaurant = self
            .restaurant_repo
            .find_by_id_for_share(&mut tx, parsed.restaurant_id)
            .await?;

        let candidate = match parsed.beneficiary_id() {
            Some(id) if actor.is_privileged && restaurant.is_some() => {
                self.user_repo.find_by_id_in(&mut tx, id).await?
            }
            _ => None,
        };

        let booking = self.admission.evaluate_validated(
            &parsed,
            &actor,
            restaurant.as_ref(),
            candidate.as_ref(),
        )?;

        let booking = self.booking_repo.insert(&mut tx, &booking).await?;
        repositories::commit(tx).await?;

        info!(
            user_id = %ctx.user_id,
            booking_id = %booking.id,
            restaurant_id = %booking.restaurant_id,
            beneficiary_id = %booking.user_id,
            guests = booking.guest_number,
            "Booking created"
        );

        Ok(booking)
    }

    /// Fetch one booking.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Booking, AppError> {
        self.caller(ctx).await?;
        self.find(id).await
    }

    /// List bookings visible to the caller.
    ///
    /// Regular users see their own bookings. Admins see everything, or one
    /// user's bookings when `user_filter` is set.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        user_filter: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResponse<Booking>, AppError> {
        let caller = self.caller(ctx).await?;
        let sees_all = self
            .rbac
            .has_permission(caller.role, SystemPermission::BookingManageAll);

        match (sees_all, user_filter) {
            (true, None) => self.booking_repo.find_all(&page).await,
            (true, Some(user_id)) => self.booking_repo.find_by_user(user_id, &page).await,
            (false, Some(user_id)) if user_id != caller.id => Err(AppError::authorization(
                "Only administrators may list other users' bookings",
            )),
            (false, _) => self.booking_repo.find_by_user(caller.id, &page).await,
        }
    }

    /// Edit a booking held by the caller (or any booking, for admins).
    ///
    /// The restaurant is share-locked before the booking row is locked for
    /// update, the same order in which a restaurant delete reaches its
    /// bookings.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        update: BookingUpdate,
    ) -> Result<Booking, AppError> {
        let changes = update.validate()?;
        let restaurant_id = self.find(id).await?.restaurant_id;

        let mut tx = repositories::begin(self.booking_repo.pool()).await?;

        let caller = self
            .user_repo
            .find_by_id_in(&mut tx, ctx.user_id)
            .await?
            .ok_or_else(account_gone)?;
        let actor = self.actor(&caller, SystemPermission::BookingManageAll);

        let restaurant = self
            .restaurant_repo
            .find_by_id_for_share(&mut tx, restaurant_id)
            .await?;
        let existing = self
            .booking_repo
            .find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;
        authorize_modification(&existing, &actor)?;

        let revised = self
            .admission
            .revise(&existing, &changes, restaurant.as_ref())?;
        let booking = self.booking_repo.update(&mut tx, &revised).await?;
        repositories::commit(tx).await?;

        info!(user_id = %ctx.user_id, booking_id = %id, "Booking updated");
        Ok(booking)
    }

    /// Cancel a booking held by the caller (or any booking, for admins).
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let mut tx = repositories::begin(self.booking_repo.pool()).await?;

        let caller = self
            .user_repo
            .find_by_id_in(&mut tx, ctx.user_id)
            .await?
            .ok_or_else(account_gone)?;
        let actor = self.actor(&caller, SystemPermission::BookingManageAll);

        let existing = self
            .booking_repo
            .find_by_id_for_update(&mut tx, id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;
        authorize_modification(&existing, &actor)?;

        if !self.booking_repo.delete(&mut tx, id).await? {
            return Err(booking_not_found(id));
        }
        repositories::commit(tx).await?;

        info!(user_id = %ctx.user_id, booking_id = %id, "Booking deleted");
        Ok(())
    }

    /// The stored account behind `ctx`. Tokens outlive deleted accounts.
    async fn caller(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(account_gone)
    }

    /// `caller` as seen by admission; `authority` decides the privilege.
    fn actor(&self, caller: &User, authority: SystemPermission) -> Actor {
        Actor {
            id: caller.id,
            is_privileged: self.rbac.has_permission(caller.role, authority),
        }
    }

    async fn find(&self, id: Uuid) -> Result<Booking, AppError> {
        self.booking_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))
    }
}

fn booking_not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Booking {id} not found"))
}

fn account_gone() -> AppError {
    AppError::authentication("Account no longer exists")
}
