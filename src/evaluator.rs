//! Access evaluation
//!
//! Pure predicates over a [`UserSnapshot`]. Every function is total and
//! fail-closed: a missing user, a deactivated account, or an absent grant
//! all evaluate to deny. Nothing here errors or panics, and repeated calls
//! against an unchanged snapshot always agree.
//!
//! Precedence, in order: no user → deny; admin → allow (unconditionally,
//! even for a deactivated admin account); inactive → deny; otherwise the
//! snapshot's own permission map or allow-list decides.

use crate::models::{Module, Permission, ReportId, UserSnapshot};

/// Check if user may perform a capability
pub fn can_use_capability(user: Option<&UserSnapshot>, permission: Permission) -> bool {
    let Some(user) = gate(user) else {
        return false;
    };
    if user.is_admin() {
        return true;
    }
    let granted = user.permissions.granted(permission);
    if !granted {
        tracing::debug!(
            user_id = %user.id,
            username = %user.username,
            permission = %permission,
            "capability denied"
        );
    }
    granted
}

/// Check if user may open a module
pub fn can_open_module(user: Option<&UserSnapshot>, module: Module) -> bool {
    let Some(user) = gate(user) else {
        return false;
    };
    if user.is_admin() {
        return true;
    }
    let permitted = user.allowed_modules.permits(&module);
    if !permitted {
        tracing::debug!(
            user_id = %user.id,
            username = %user.username,
            module = %module,
            "module access denied"
        );
    }
    permitted
}

/// Check if user may view a report
pub fn can_view_report(user: Option<&UserSnapshot>, report_id: &ReportId) -> bool {
    let Some(user) = gate(user) else {
        return false;
    };
    if user.is_admin() {
        return true;
    }
    let permitted = user.allowed_reports.permits(report_id);
    if !permitted {
        tracing::debug!(
            user_id = %user.id,
            username = %user.username,
            report_id = %report_id,
            "report access denied"
        );
    }
    permitted
}

/// Check if user has any of the specified permissions
pub fn any_of(user: Option<&UserSnapshot>, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| can_use_capability(user, *p))
}

/// Check if user has all of the specified permissions
pub fn all_of(user: Option<&UserSnapshot>, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| can_use_capability(user, *p))
}

/// Common short-circuits: missing user and deactivated non-admin accounts
/// are denied outright. The admin check in each predicate runs before the
/// active check, so an inactive admin still passes.
fn gate(user: Option<&UserSnapshot>) -> Option<&UserSnapshot> {
    let user = user?;
    if !user.is_admin() && !user.is_active {
        tracing::debug!(
            user_id = %user.id,
            username = %user.username,
            "access denied for deactivated account"
        );
        return None;
    }
    Some(user)
}
