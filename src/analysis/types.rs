// src/analysis/types.rs
//! Result values produced by the evaluators.
//!
//! Every result owns a copy of the employee it refers to, so reports outlive
//! the index they were computed from.

use serde::Serialize;

use crate::types::Employee;

/// A manager whose salary falls outside the allowed band.
#[derive(Debug, Clone, Serialize)]
pub struct ManagerSalaryIssue {
    pub manager: Employee,
    pub avg_subordinate_salary: f64,
    /// The violated bound: the floor for underpaid managers, the ceiling for overpaid ones.
    pub expected_salary: f64,
    /// Distance between the actual salary and `expected_salary`. Always positive.
    pub difference: f64,
}

/// Outcome of the salary rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SalaryReport {
    pub underpaid: Vec<ManagerSalaryIssue>,
    pub overpaid: Vec<ManagerSalaryIssue>,
}

impl SalaryReport {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.underpaid.is_empty() || !self.overpaid.is_empty()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.underpaid.len() + self.overpaid.len()
    }
}

/// An employee with too many managers above them.
#[derive(Debug, Clone, Serialize)]
pub struct ReportingLineIssue {
    pub employee: Employee,
    pub reporting_line_length: usize,
    pub excess: usize,
}

/// Outcome of the reporting-line rule.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportingLineReport {
    pub max_reporting_line: usize,
    pub issues: Vec<ReportingLineIssue>,
}

impl ReportingLineReport {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }
}

/// Both analyses over one organization.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrgReport {
    pub employee_count: usize,
    pub salary: SalaryReport,
    pub reporting_lines: ReportingLineReport,
}

impl OrgReport {
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.salary.has_issues() || self.reporting_lines.has_issues()
    }

    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.salary.issue_count() + self.reporting_lines.issues.len()
    }
}
