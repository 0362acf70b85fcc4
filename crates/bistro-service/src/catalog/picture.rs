//! Picture service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::{Clock, IdGenerator};
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::{PictureRepository, RestaurantRepository};
use bistro_entity::catalog::{Picture, PictureInput};

use super::{check_title, require};
use crate::context::RequestContext;

/// Manages restaurant pictures.
#[derive(Debug, Clone)]
pub struct PictureService {
    picture_repo: Arc<PictureRepository>,
    restaurant_repo: Arc<RestaurantRepository>,
    rbac: Arc<RbacEnforcer>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl PictureService {
    /// Creates a new picture service.
    pub fn new(
        picture_repo: Arc<PictureRepository>,
        restaurant_repo: Arc<RestaurantRepository>,
        rbac: Arc<RbacEnforcer>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            picture_repo,
            restaurant_repo,
            rbac,
            clock,
            ids,
        }
    }

    /// List pictures, optionally for one restaurant.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        restaurant_id: Option<Uuid>,
        page: PageRequest,
    ) -> Result<PageResponse<Picture>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.picture_repo.find_all(restaurant_id, &page).await
    }

    /// Fetch one picture.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Picture, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogRead)?;
        self.picture_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Picture {id} not found")))
    }

    /// Add a picture to an existing restaurant.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: PictureInput,
    ) -> Result<Picture, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(Some(require(&data.title, "title")?))?;
        check_slug(require(&data.slug, "slug")?)?;
        self.ensure_restaurant(*require(&data.restaurant_id, "restaurant")?)
            .await?;

        let picture = self.picture_repo.create(self.ids.next_id(), &data).await?;
        info!(user_id = %ctx.user_id, picture_id = %picture.id, slug = %picture.slug, "Picture created");
        Ok(picture)
    }

    /// Apply a partial update.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: PictureInput,
    ) -> Result<Picture, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        check_title(data.title.as_ref())?;
        if let Some(slug) = &data.slug {
            check_slug(slug)?;
        }
        if let Some(restaurant_id) = data.restaurant_id {
            self.ensure_restaurant(restaurant_id).await?;
        }

        self.picture_repo
            .update(id, &data, self.clock.now())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Picture {id} not found")))
    }

    /// Delete a picture.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::CatalogManage)?;
        if !self.picture_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Picture {id} not found")));
        }
        info!(user_id = %ctx.user_id, picture_id = %id, "Picture deleted");
        Ok(())
    }

    async fn ensure_restaurant(&self, id: Uuid) -> Result<(), AppError> {
        self.restaurant_repo
            .find_by_id(id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("Restaurant {id} not found")))
    }
}

/// Slugs are lowercase ASCII letters, digits and dashes.
fn check_slug(slug: &str) -> Result<(), AppError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(AppError::validation(
            "slug may only contain lowercase letters, digits and dashes",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_rules() {
        assert!(check_slug("terrace-view-2").is_ok());
        assert!(check_slug("").is_err());
        assert!(check_slug("Terrace").is_err());
        assert!(check_slug("a b").is_err());
    }
}
