//! Food service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::{CategoryRepository, FoodRepository};
use bistro_entity::catalog::{Food, FoodInput};

use super::{check_price, check_title, require};
use crate::context::RequestContext;

/// A dish with the ids of its categories.
#[derive(Debug, Clone, Serialize)]
pub struct FoodDetails {
    /// The dish row.
    #[serde(flatten)]
    pub food: Food,
    /// Linked categories.
    pub category_ids: Vec<Uuid>,
}

/// Manages dishes.
#[derive(Debug, Clone)]
pub struct FoodService {
    food_repo: Arc<FoodRepository>,
    category_repo: Arc<CategoryRepository>,
    rbac: Arc<RbacEnforcer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl FoodService {
    /// Creates a new food service.
    pub fn new(
        food_repo: Arc<FoodRepository>,
        category_repo: Arc<CategoryRepository>,
        rbac: Arc<RbacEnforcer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            food_repo,
            category_repo,
            rbac,
            clock,
            ids,
        }
    }

    /// List dishes.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Food>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.food_repo.find_all(&page).await
    }

    /// Fetch one dish with its categories.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<FoodDetails, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        let food = self.find(id).await?;
        let category_ids = self.food_repo.category_ids(id).await?;
        Ok(FoodDetails { food, category_ids })
    }

    /// Create a dish.
    pub async fn create(&self, ctx: &RequestContext, data: FoodInput) -> Result<Food, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(Some(require(&data.title, "title")?))?;
        check_price(Some(*require(&data.price_cents, "price")?))?;

        let food = self.food_repo.create(self.ids.next_id(), &data).await?;
        info!(user_id = %ctx.user_id, food_id = %food.id, "Food created");
        Ok(food)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: FoodInput,
    ) -> Result<Food, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(data.title.as_ref())?;
        check_price(data.price_cents)?;

        self.food_repo
            .update(id, &data, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food {id} not found")))
    }

    /// Delete a dish.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.food_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Food {id} not found")));
        }
        info!(user_id = %ctx.user_id, food_id = %id, "Food deleted");
        Ok(())
    }

    /// Attach a category to a dish.
    pub async fn add_category(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        category_id: Uuid,
    ) -> Result<FoodDetails, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        let food = self.find(id).await?;
        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Category {category_id} not found"
            )));
        }
        self.food_repo.add_category(id, category_id).await?;
        let category_ids = self.food_repo.category_ids(id).await?;
        Ok(FoodDetails { food, category_ids })
    }

    /// Detach a category from a dish.
    pub async fn remove_category(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        category_id: Uuid,
    ) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.food_repo.remove_category(id, category_id).await? {
            return Err(AppError::not_found("Food is not in that category"));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Food, AppError> {
        self.food_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Food {id} not found")))
    }
}
