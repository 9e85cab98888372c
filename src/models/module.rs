//! Module Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Functional area of the dashboard, gated as a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    Dashboard,
    Sales,
    Expenses,
    Departments,
    Reports,
    Targets,
    Users,
    Audit,
}

impl Module {
    /// All known modules
    pub const ALL: [Module; 8] = [
        Module::Dashboard,
        Module::Sales,
        Module::Expenses,
        Module::Departments,
        Module::Reports,
        Module::Targets,
        Module::Users,
        Module::Audit,
    ];

    /// Wire name of this module
    pub fn as_str(&self) -> &'static str {
        match self {
            Module::Dashboard => "dashboard",
            Module::Sales => "sales",
            Module::Expenses => "expenses",
            Module::Departments => "departments",
            Module::Reports => "reports",
            Module::Targets => "targets",
            Module::Users => "users",
            Module::Audit => "audit",
        }
    }
}

impl FromStr for Module {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ParseError::UnknownModule(s.to_string()))
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_round_trip() {
        for module in Module::ALL {
            assert_eq!(module.as_str().parse::<Module>(), Ok(module));
        }
        assert!("settings".parse::<Module>().is_err());
    }
}
