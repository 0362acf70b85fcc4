//! Role-to-permission mapping.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use bistro_entity::user::UserRole;

/// A system-level permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SystemPermission {
    /// Browse restaurants, menus, food, categories and pictures.
    CatalogRead,
    /// Create, edit and delete restaurants.
    RestaurantManage,
    /// Create, edit and delete menus, food, categories and pictures.
    CatalogManage,
    /// Book a table for oneself.
    BookingCreate,
    /// Book a table on behalf of another account.
    BookingOnBehalf,
    /// See and modify every booking.
    BookingManageAll,
    /// List accounts.
    UserRead,
    /// Delete accounts.
    UserDelete,
}

/// Role → permission set.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    policies: HashMap<UserRole, HashSet<SystemPermission>>,
}

impl RbacPolicies {
    /// The default policy set.
    pub fn new() -> Self {
        use SystemPermission::*;

        let user: HashSet<_> = [CatalogRead, BookingCreate].into_iter().collect();
        let admin: HashSet<_> = [
            CatalogRead,
            RestaurantManage,
            CatalogManage,
            BookingCreate,
            BookingOnBehalf,
            BookingManageAll,
            UserRead,
            UserDelete,
        ]
        .into_iter()
        .collect();

        let mut policies = HashMap::new();
        policies.insert(UserRole::User, user);
        policies.insert(UserRole::Admin, admin);
        Self { policies }
    }

    /// Permissions granted to `role`.
    pub fn permissions_for_role(&self, role: UserRole) -> HashSet<SystemPermission> {
        self.policies.get(&role).cloned().unwrap_or_default()
    }

    /// Whether `role` holds `permission`.
    pub fn has_permission(&self, role: UserRole, permission: SystemPermission) -> bool {
        self.policies
            .get(&role)
            .is_some_and(|perms| perms.contains(&permission))
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
