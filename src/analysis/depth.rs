// src/analysis/depth.rs
//! Reporting-line depth check.
//!
//! Walks each employee's manager chain up to the CEO. Malformed chains
//! (unknown manager ids, cycles) end the walk early instead of failing; the
//! employee is judged on the hops counted so far.

use std::collections::HashSet;

use super::types::{ReportingLineIssue, ReportingLineReport};
use crate::org::OrgIndex;
use crate::types::Employee;

/// Why a chain walk stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainEnd {
    /// Reached a manager with no manager of their own.
    Root,
    /// The next manager id does not resolve to an employee.
    Dangling(String),
    /// The next manager id was already visited during this walk.
    Cycle(String),
}

/// Result of walking one employee's reporting chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainWalk {
    /// Managers traversed, the direct manager being hop 1.
    pub length: usize,
    pub end: ChainEnd,
}

impl ChainWalk {
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        !matches!(self.end, ChainEnd::Root)
    }
}

/// Walks from `employee` up to the root. Returns `None` for a root employee.
#[must_use]
pub fn walk_reporting_chain(index: &OrgIndex, employee: &Employee) -> Option<ChainWalk> {
    let mut current = employee.manager()?;
    let mut visited: HashSet<&str> = HashSet::new();
    let mut length = 0;

    let end = loop {
        if !visited.insert(current) {
            break ChainEnd::Cycle(current.to_string());
        }
        let Some(manager) = index.get(current) else {
            break ChainEnd::Dangling(current.to_string());
        };
        length += 1;
        match manager.manager() {
            Some(next) => current = next,
            None => break ChainEnd::Root,
        }
    };

    Some(ChainWalk { length, end })
}

/// Flags every non-root employee with more than `max_reporting_line` managers above them.
///
/// Issues follow the index's enumeration order.
#[must_use]
pub fn analyze_reporting_lines(index: &OrgIndex, max_reporting_line: usize) -> ReportingLineReport {
    let mut report = ReportingLineReport {
        max_reporting_line,
        issues: Vec::new(),
    };

    for employee in index.employees() {
        let Some(walk) = walk_reporting_chain(index, employee) else {
            continue;
        };
        if walk.is_truncated() {
            tracing::debug!(
                employee = %employee.id,
                length = walk.length,
                end = ?walk.end,
                "reporting chain truncated"
            );
        }
        if walk.length > max_reporting_line {
            report.issues.push(ReportingLineIssue {
                employee: employee.clone(),
                reporting_line_length: walk.length,
                excess: walk.length - max_reporting_line,
            });
        }
    }

    report
}
