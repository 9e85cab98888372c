//! Data models
//!
//! Read-only projections shared with the hosting service (via API).
//! The session layer supplies these as JSON; nothing here is persisted
//! or mutated by this crate.

pub mod module;
pub mod permission;
pub mod report;
pub mod role;
pub mod user;

// Re-exports
pub use module::*;
pub use permission::*;
pub use report::*;
pub use role::*;
pub use user::*;
