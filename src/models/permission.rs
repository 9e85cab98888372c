//! Permission Model
//!
//! The fixed capability catalog for the dashboard and the per-user
//! permission map layered on top of role defaults.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Capability identifier (fixed catalog)
///
/// Permissions are independent boolean flags; any structure between them
/// lives in the per-role default sets, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewDashboard,
    ViewSales,
    CreateSales,
    EditSales,
    DeleteSales,
    ViewExpenses,
    CreateExpenses,
    EditExpenses,
    DeleteExpenses,
    ViewDepartments,
    ManageDepartments,
    ViewReports,
    ViewTargets,
    ManageTargets,
    ManageUsers,
    ViewAudit,
    ExportData,
}

impl Permission {
    /// The full catalog, in module order
    pub const ALL: [Permission; 17] = [
        Permission::ViewDashboard,
        Permission::ViewSales,
        Permission::CreateSales,
        Permission::EditSales,
        Permission::DeleteSales,
        Permission::ViewExpenses,
        Permission::CreateExpenses,
        Permission::EditExpenses,
        Permission::DeleteExpenses,
        Permission::ViewDepartments,
        Permission::ManageDepartments,
        Permission::ViewReports,
        Permission::ViewTargets,
        Permission::ManageTargets,
        Permission::ManageUsers,
        Permission::ViewAudit,
        Permission::ExportData,
    ];

    /// Wire name of this permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "view_dashboard",
            Permission::ViewSales => "view_sales",
            Permission::CreateSales => "create_sales",
            Permission::EditSales => "edit_sales",
            Permission::DeleteSales => "delete_sales",
            Permission::ViewExpenses => "view_expenses",
            Permission::CreateExpenses => "create_expenses",
            Permission::EditExpenses => "edit_expenses",
            Permission::DeleteExpenses => "delete_expenses",
            Permission::ViewDepartments => "view_departments",
            Permission::ManageDepartments => "manage_departments",
            Permission::ViewReports => "view_reports",
            Permission::ViewTargets => "view_targets",
            Permission::ManageTargets => "manage_targets",
            Permission::ManageUsers => "manage_users",
            Permission::ViewAudit => "view_audit",
            Permission::ExportData => "export_data",
        }
    }
}

impl FromStr for Permission {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPermission(s.to_string()))
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-user permission map
///
/// Keys need not be exhaustive: a permission with no entry reads as denied.
/// Serializes as a JSON object keyed by the wire permission names; an
/// unknown key is a deserialization error, not a silent deny.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet(BTreeMap<Permission, bool>);

impl PermissionSet {
    /// Empty set (everything denied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the permission is explicitly granted
    pub fn granted(&self, permission: Permission) -> bool {
        self.0.get(&permission).copied().unwrap_or(false)
    }

    /// Set a single permission flag
    pub fn set(&mut self, permission: Permission, granted: bool) {
        self.0.insert(permission, granted);
    }

    /// Iterate over the entries present in the set
    pub fn iter(&self) -> impl Iterator<Item = (Permission, bool)> + '_ {
        self.0.iter().map(|(p, g)| (*p, *g))
    }

    /// Number of entries present (not the number of grants)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Permission, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (Permission, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_wire_names() {
        assert_eq!(Permission::ViewDashboard.as_str(), "view_dashboard");
        assert_eq!(Permission::ManageUsers.as_str(), "manage_users");
        assert_eq!("export_data".parse::<Permission>(), Ok(Permission::ExportData));
        assert!("export".parse::<Permission>().is_err());
    }

    #[test]
    fn test_absent_key_reads_as_denied() {
        let mut set = PermissionSet::new();
        assert!(!set.granted(Permission::ViewSales));

        set.set(Permission::ViewSales, true);
        assert!(set.granted(Permission::ViewSales));

        set.set(Permission::ViewSales, false);
        assert!(!set.granted(Permission::ViewSales));
        assert_eq!(set.len(), 1);
    }
}
