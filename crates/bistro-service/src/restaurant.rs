//! Restaurant management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::RestaurantRepository;
use bistro_entity::restaurant::{CreateRestaurant, Restaurant, UpdateRestaurant};

use crate::context::RequestContext;

/// Longest accepted restaurant name.
pub const MAX_NAME_LENGTH: usize = 32;

/// Browses and administers restaurants.
#[derive(Debug, Clone)]
pub struct RestaurantService {
    restaurant_repo: Arc<RestaurantRepository>,
    rbac: Arc<RbacEnforcer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(
        restaurant_repo: Arc<RestaurantRepository>,
        rbac: Arc<RbacEnforcer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            restaurant_repo,
            rbac,
            clock,
            ids,
        }
    }

    /// List restaurants.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Restaurant>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.restaurant_repo.find_all(&page).await
    }

    /// Fetch one restaurant.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Restaurant, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.restaurant_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))
    }

    /// Create a restaurant.
    ///
    /// Opening windows are stored as given; a malformed pair simply keeps
    /// the restaurant closed during that service.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateRestaurant,
    ) -> Result<Restaurant, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::RestaurantManage)?;
        check_name(&data.name)?;
        check_capacity(data.max_guest)?;

        let restaurant = self
            .restaurant_repo
            .create(self.ids.next_id(), &data)
            .await?;

        info!(
            user_id = %ctx.user_id,
            restaurant_id = %restaurant.id,
            name = %restaurant.name,
            "Restaurant created"
        );
        Ok(restaurant)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateRestaurant,
    ) -> Result<Restaurant, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::RestaurantManage)?;
        if let Some(name) = &data.name {
            check_name(name)?;
        }
        if let Some(max_guest) = data.max_guest {
            check_capacity(max_guest)?;
        }

        let restaurant = self
            .restaurant_repo
            .update(id, &data, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))?;

        info!(user_id = %ctx.user_id, restaurant_id = %id, "Restaurant updated");
        Ok(restaurant)
    }

    /// Delete a restaurant along with its bookings, menus and pictures.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::RestaurantManage)?;
        if !self.restaurant_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Restaurant {id} not found")));
        }
        info!(user_id = %ctx.user_id, restaurant_id = %id, "Restaurant deleted");
        Ok(())
    }
}

fn check_name(name: &str) -> Result<(), AppError> {
    let length = name.trim().chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Restaurant name must be 1 to {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

fn check_capacity(max_guest: i16) -> Result<(), AppError> {
    if max_guest < 1 {
        return Err(AppError::validation("maxGuest must be a positive integer"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(check_name("Chez Paul").is_ok());
        assert!(check_name("   ").is_err());
        assert!(check_name(&"x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(check_name(&"x".repeat(MAX_NAME_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_capacity_must_be_positive() {
        assert!(check_capacity(1).is_ok());
        assert!(check_capacity(0).is_err());
        assert!(check_capacity(-5).is_err());
    }
}
