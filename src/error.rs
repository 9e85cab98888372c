//! Boundary errors for identifier parsing
//!
//! Evaluation itself is total and never fails; the only fallible surface is
//! turning wire strings into the closed role/permission/module tags.

use thiserror::Error;

/// Error raised when a string does not name a known tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    #[error("unknown module: {0}")]
    UnknownModule(String),
}
