//! Menu service.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::{CategoryRepository, MenuRepository, RestaurantRepository};
use bistro_entity::catalog::{Menu, MenuInput};

use super::{check_price, check_title, require};
use crate::context::RequestContext;

/// A menu with the ids of its categories.
#[derive(Debug, Clone, Serialize)]
pub struct MenuDetails {
    /// The menu row.
    #[serde(flatten)]
    pub menu: Menu,
    /// Linked categories.
    pub category_ids: Vec<Uuid>,
}

/// Manages restaurant menus.
#[derive(Debug, Clone)]
pub struct MenuService {
    menu_repo: Arc<MenuRepository>,
    restaurant_repo: Arc<RestaurantRepository>,
    category_repo: Arc<CategoryRepository>,
    rbac: Arc<RbacEnforcer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl MenuService {
    /// Creates a new menu service.
    pub fn new(
        menu_repo: Arc<MenuRepository>,
        restaurant_repo: Arc<RestaurantRepository>,
        category_repo: Arc<CategoryRepository>,
        rbac: Arc<RbacEnforcer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            menu_repo,
            restaurant_repo,
            category_repo,
            rbac,
            clock,
            ids,
        }
    }

    /// List menus, optionally for one restaurant.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        restaurant_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResponse<Menu>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.menu_repo.find_all(restaurant_id, &page).await
    }

    /// Fetch one menu with its categories.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<MenuDetails, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        let menu = self.find(id).await?;
        let category_ids = self.menu_repo.category_ids(id).await?;
        Ok(MenuDetails { menu, category_ids })
    }

    /// Create a menu for an existing restaurant.
    pub async fn create(&self, ctx: &RequestContext, data: MenuInput) -> Result<Menu, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(Some(require(&data.title, "title")?))?;
        check_price(Some(*require(&data.price_cents, "price")?))?;
        let restaurant_id = *require(&data.restaurant_id, "restaurant")?;
        self.ensure_restaurant(restaurant_id).await?;

        let menu = self.menu_repo.create(self.ids.next_id(), &data).await?;
        info!(user_id = %ctx.user_id, menu_id = %menu.id, %restaurant_id, "Menu created");
        Ok(menu)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: MenuInput,
    ) -> Result<Menu, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(data.title.as_ref())?;
        check_price(data.price_cents)?;
        if let Some(restaurant_id) = data.restaurant_id {
            self.ensure_restaurant(restaurant_id).await?;
        }

        let menu = self
            .menu_repo
            .update(id, &data, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Menu {id} not found")))?;
        info!(user_id = %ctx.user_id, menu_id = %id, "Menu updated");
        Ok(menu)
    }

    /// Delete a menu.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.menu_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Menu {id} not found")));
        }
        info!(user_id = %ctx.user_id, menu_id = %id, "Menu deleted");
        Ok(())
    }

    /// Attach a category to a menu.
    pub async fn add_category(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        category_id: Uuid,
    ) -> Result<MenuDetails, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        let menu = self.find(id).await?;
        if self.category_repo.find_by_id(category_id).await?.is_none() {
            return Err(AppError::not_found(format!(
                "Category {category_id} not found"
            )));
        }
        self.menu_repo.add_category(id, category_id).await?;
        let category_ids = self.menu_repo.category_ids(id).await?;
        Ok(MenuDetails { menu, category_ids })
    }

    /// Detach a category from a menu.
    pub async fn remove_category(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        category_id: Uuid,
    ) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.menu_repo.remove_category(id, category_id).await? {
            return Err(AppError::not_found("Menu is not in that category"));
        }
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Menu, AppError> {
        self.menu_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Menu {id} not found")))
    }

    async fn ensure_restaurant(&self, id: Uuid) -> Result<(), AppError> {
        match self.restaurant_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!("Restaurant {id} not found"))),
        }
    }
}
