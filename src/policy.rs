//! Role default policy
//!
//! The role → default-permissions table. Built once at process start and
//! shared immutably; evaluation never consults it. Its consumer is the
//! administrative flow that seeds a managed user's permission map when the
//! user's role changes.

use crate::models::{Permission, PermissionSet, Role};

/// Immutable role → default `PermissionSet` table
///
/// Every default set is exhaustive over the permission catalog, so a seeded
/// user starts with an explicit entry (granted or denied) for every known
/// permission.
#[derive(Debug, Clone)]
pub struct RolePolicy {
    admin: PermissionSet,
    user: PermissionSet,
    viewer: PermissionSet,
}

impl RolePolicy {
    /// The built-in defaults for the three dashboard roles
    pub fn builtin() -> Self {
        Self {
            admin: Self::build(Role::Admin),
            user: Self::build(Role::User),
            viewer: Self::build(Role::Viewer),
        }
    }

    /// Default permission set for a role
    pub fn defaults_for(&self, role: Role) -> &PermissionSet {
        match role {
            Role::Admin => &self.admin,
            Role::User => &self.user,
            Role::Viewer => &self.viewer,
        }
    }

    fn build(role: Role) -> PermissionSet {
        Permission::ALL
            .into_iter()
            .map(|p| (p, default_grant(role, p)))
            .collect()
    }
}

impl Default for RolePolicy {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether a role grants a permission by default
fn default_grant(role: Role, permission: Permission) -> bool {
    match role {
        Role::Admin => true,
        Role::User => !matches!(
            permission,
            Permission::DeleteSales
                | Permission::DeleteExpenses
                | Permission::ManageDepartments
                | Permission::ManageTargets
                | Permission::ManageUsers
                | Permission::ViewAudit
        ),
        Role::Viewer => matches!(
            permission,
            Permission::ViewDashboard
                | Permission::ViewSales
                | Permission::ViewExpenses
                | Permission::ViewDepartments
                | Permission::ViewReports
                | Permission::ViewTargets
        ),
    }
}
