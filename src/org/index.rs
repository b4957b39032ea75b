// src/org/index.rs
//! Read-only lookups over a flat employee list.

use std::collections::{HashMap, HashSet};

use crate::types::Employee;

/// Immutable snapshot of the organization.
///
/// Holds the employee lookup (`by_id`) and the manager -> direct subordinates
/// lookup. Malformed structure (duplicate ids, dangling manager references,
/// cycles) is accepted as-is and left for the evaluators to tolerate.
#[derive(Debug, Clone, Default)]
pub struct OrgIndex {
    by_id: HashMap<String, Employee>,
    subordinates_of: HashMap<String, Vec<Employee>>,
    /// Unique ids in first-seen order.
    order: Vec<String>,
    duplicates: Vec<String>,
    records: usize,
}

impl OrgIndex {
    /// Builds the index. A later record with an already-seen id replaces the
    /// earlier one in `by_id`; both still count as subordinates of their managers.
    #[must_use]
    pub fn new(employees: Vec<Employee>) -> Self {
        let mut index = Self::default();
        let mut duplicates = HashSet::new();

        for employee in employees {
            index.records += 1;
            if let Some(manager) = employee.manager() {
                index
                    .subordinates_of
                    .entry(manager.to_string())
                    .or_default()
                    .push(employee.clone());
            }
            let id = employee.id.clone();
            if index.by_id.insert(id.clone(), employee).is_some() {
                duplicates.insert(id);
            } else {
                index.order.push(id);
            }
        }

        index.duplicates = duplicates.into_iter().collect();
        index.duplicates.sort();
        index
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.by_id.get(id)
    }

    /// Direct subordinates of `manager_id` in source order; empty when none.
    #[must_use]
    pub fn subordinates(&self, manager_id: &str) -> &[Employee] {
        self.subordinates_of
            .get(manager_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Iterates every distinct employee in first-seen id order.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    /// Iterates `(manager_id, subordinates)` pairs in unspecified order.
    pub fn manager_entries(&self) -> impl Iterator<Item = (&str, &[Employee])> + '_ {
        self.subordinates_of
            .iter()
            .map(|(id, subs)| (id.as_str(), subs.as_slice()))
    }

    /// Every manager id that at least one employee reports to, sorted.
    #[must_use]
    pub fn manager_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.subordinates_of.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Number of source records, duplicates included.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Ids that appeared more than once in the source list, sorted.
    #[must_use]
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicates
    }

    /// Manager ids referenced by some employee but missing from the list, sorted.
    #[must_use]
    pub fn dangling_manager_ids(&self) -> Vec<&str> {
        self.manager_ids()
            .into_iter()
            .filter(|id| !self.by_id.contains_key(*id))
            .collect()
    }

    #[must_use]
    pub fn roots(&self) -> Vec<&Employee> {
        self.employees().filter(|e| e.is_root()).collect()
    }
}

impl FromIterator<Employee> for OrgIndex {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
