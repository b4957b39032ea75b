// src/types.rs
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single employee record.
///
/// Identity is the `id` alone: two records with the same id compare equal
/// regardless of their other fields.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    pub manager_id: Option<String>,
}

impl Employee {
    /// Creates an employee. An empty `manager_id` is normalized to `None`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
        manager_id: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            manager_id: manager_id.filter(|m| !m.is_empty()).map(str::to_string),
        }
    }

    /// Returns true if this employee has no manager (the CEO).
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.manager_id.as_deref().map_or(true, str::is_empty)
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Manager id, treating an empty string as absent.
    #[must_use]
    pub fn manager(&self) -> Option<&str> {
        self.manager_id.as_deref().filter(|m| !m.is_empty())
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.full_name(), self.id)
    }
}
