//! User Snapshot Model

use serde::{Deserialize, Serialize};

use crate::models::{Module, PermissionSet, ReportId, Role};
use crate::policy::RolePolicy;
use crate::types::AllowList;

/// Read-only user projection supplied by the auth/session layer
///
/// This crate never creates, mutates, or persists these records; it only
/// evaluates predicates against a snapshot fetched per request (or per
/// session, per the session layer's own staleness policy).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: String,
    pub username: String,
    pub role: Role,
    pub is_active: bool,
    /// Effective permission map, seeded from role defaults when the role
    /// was assigned and overridden per user since
    #[serde(default)]
    pub permissions: PermissionSet,
    /// Module allow-list; unrestricted when absent from the record
    #[serde(default)]
    pub allowed_modules: AllowList<Module>,
    /// Report allow-list; unrestricted when absent from the record
    #[serde(default)]
    pub allowed_reports: AllowList<ReportId>,
}

impl UserSnapshot {
    /// Build an active snapshot whose permission map is seeded from the
    /// role defaults, the way the admin change-role flow seeds a managed
    /// user before any per-user overrides are applied.
    pub fn seeded(
        id: impl Into<String>,
        username: impl Into<String>,
        role: Role,
        policy: &RolePolicy,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            role,
            is_active: true,
            permissions: policy.defaults_for(role).clone(),
            allowed_modules: AllowList::Unrestricted,
            allowed_reports: AllowList::Unrestricted,
        }
    }

    /// Check if user is an admin
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
