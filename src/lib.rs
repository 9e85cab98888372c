//! Access control for the Tally analytics dashboard
//!
//! Pure, fail-closed evaluation of what an authenticated user may do:
//! capability checks, module gating, and per-report gating, driven by a
//! read-only [`UserSnapshot`] supplied by the session layer. This crate
//! performs no I/O and holds no state; every answer is a deterministic
//! function of the snapshot it is given.

pub mod error;
pub mod evaluator;
pub mod models;
pub mod policy;
pub mod types;

// Re-exports
pub use error::ParseError;
pub use evaluator::{all_of, any_of, can_open_module, can_use_capability, can_view_report};
pub use models::{Module, Permission, PermissionSet, ReportId, Role, UserSnapshot};
pub use policy::RolePolicy;
pub use types::AllowList;
