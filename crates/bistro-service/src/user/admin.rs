//! User administration.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use bistro_auth::password::{PasswordHasher, PasswordValidator};
use bistro_auth::rbac::{RbacEnforcer, SystemPermission};
use bistro_core::error::AppError;
use bistro_core::traits::IdGenerator;
use bistro_core::types::pagination::{PageRequest, PageResponse};
use bistro_database::repositories::UserRepository;
use bistro_entity::user::{CreateUser, User, UserRole};

use super::normalize_email;
use crate::context::RequestContext;

/// Details for a new administrator account.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Handles administrative user management operations.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    user_repo: Arc<UserRepository>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    rbac: Arc<RbacEnforcer>,
    ids: Arc<dyn IdGenerator>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        rbac: Arc<RbacEnforcer>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            rbac,
            ids,
        }
    }

    /// Lists all users with pagination.
    pub async fn list_users(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<User>, AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::UserRead)?;
        self.user_repo.find_all(&page).await
    }

    /// Deletes a user along with every booking they hold.
    pub async fn delete_user(&self, ctx: &RequestContext, user_id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(ctx.role, SystemPermission::UserDelete)?;

        if user_id == ctx.user_id {
            return Err(AppError::validation("You cannot delete your own account"));
        }

        if !self.user_repo.delete_with_bookings(user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(admin_id = %ctx.user_id, deleted_user_id = %user_id, "User deleted by admin");
        Ok(())
    }

    /// Creates an administrator. Used by the command line, so there is no
    /// request context; an existing email is refused.
    pub async fn create_admin(&self, admin: NewAdmin) -> Result<User, AppError> {
        let email = normalize_email(&admin.email)?;
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(format!(
                "A user with email '{email}' already exists"
            )));
        }

        self.validator.validate(&admin.password)?;
        let password_hash = self.hasher.hash_password(&admin.password)?;

        let user = self
            .user_repo
            .create(
                self.ids.next_id(),
                &CreateUser {
                    email,
                    password_hash,
                    first_name: admin.first_name,
                    last_name: admin.last_name,
                    role: UserRole::Admin,
                },
            )
            .await?;

        info!(user_id = %user.id, email = %user.email, "Administrator created");
        Ok(user)
    }
}
