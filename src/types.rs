//! Common types for the access crate

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Optional per-user restriction over a set of values
///
/// The wire convention from the dashboard's user records is preserved
/// exactly: a missing or empty array means "no restriction", a non-empty
/// array means "only these". The two cases are distinct variants here so
/// that "unrestricted" can never be confused with "nothing permitted".
///
/// An `Only` with an empty set is constructible in code and permits
/// nothing; it cannot arrive over the wire, where an empty array collapses
/// to `Unrestricted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<T>", into = "Vec<T>")]
pub enum AllowList<T: Ord + Clone> {
    /// No restriction; every value is permitted
    Unrestricted,
    /// Only the listed values are permitted
    Only(BTreeSet<T>),
}

impl<T: Ord + Clone> AllowList<T> {
    /// Restrict to the given values
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Self::Only(values.into_iter().collect())
    }

    /// Whether the value passes this restriction
    pub fn permits(&self, value: &T) -> bool {
        match self {
            AllowList::Unrestricted => true,
            AllowList::Only(values) => values.contains(value),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, AllowList::Unrestricted)
    }
}

impl<T: Ord + Clone> Default for AllowList<T> {
    fn default() -> Self {
        Self::Unrestricted
    }
}

impl<T: Ord + Clone> From<Vec<T>> for AllowList<T> {
    fn from(values: Vec<T>) -> Self {
        if values.is_empty() {
            Self::Unrestricted
        } else {
            Self::Only(values.into_iter().collect())
        }
    }
}

impl<T: Ord + Clone> From<AllowList<T>> for Vec<T> {
    fn from(list: AllowList<T>) -> Self {
        match list {
            AllowList::Unrestricted => Vec::new(),
            AllowList::Only(values) => values.into_iter().collect(),
        }
    }
}
