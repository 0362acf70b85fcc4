//! RBAC enforcement.

use bistro_core::error::AppError;
use bistro_entity::user::UserRole;

use super::policies::{RbacPolicies, SystemPermission};

/// Checks roles against the policy set.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    /// Enforcer with the default policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enforcer with custom policies.
    pub fn with_policies(policies: RbacPolicies) -> Self {
        Self { policies }
    }

    /// `Ok(())` if `role` holds `permission`, otherwise an authorization error.
    pub fn require_permission(
        &self,
        role: UserRole,
        permission: SystemPermission,
    ) -> Result<(), AppError> {
        if self.policies.has_permission(role, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(format!(
                "Role '{role}' lacks permission '{permission:?}'"
            )))
        }
    }

    /// Boolean form of [`Self::require_permission`].
    pub fn has_permission(&self, role: UserRole, permission: SystemPermission) -> bool {
        self.policies.has_permission(role, permission)
    }
}
