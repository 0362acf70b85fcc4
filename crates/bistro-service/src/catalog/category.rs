//! Category service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::CategoryRepository;
use bistro_entity::catalog::Category;

use super::check_title;
use crate::context::RequestContext;

/// Manages categories.
#[derive(Debug, Clone)]
pub struct CategoryService {
    category_repo: Arc<CategoryRepository>,
    rbac: Arc<RbacEnforcer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(
        category_repo: Arc<CategoryRepository>,
        rbac: Arc<RbacEnforcer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            category_repo,
            rbac,
            clock,
            ids,
        }
    }

    /// List categories.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Category>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.category_repo.find_all(&page).await
    }

    /// Fetch one category.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Category, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Create a category. Titles are unique.
    pub async fn create(&self, ctx: &RequestContext, title: String) -> Result<Category, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(Some(&title))?;

        let category = self
            .category_repo
            .create(self.ids.next_id(), title.trim())
            .await?;
        info!(user_id = %ctx.user_id, category_id = %category.id, title = %category.title, "Category created");
        Ok(category)
    }

    /// Rename a category.
    pub async fn rename(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        title: String,
    ) -> Result<Category, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(Some(&title))?;

        self.category_repo
            .rename(id, title.trim(), self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category {id} not found")))
    }

    /// Delete a category and its links.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.category_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Category {id} not found")));
        }
        info!(user_id = %ctx.user_id, category_id = %id, "Category deleted");
        Ok(())
    }
}
