// src/analysis/mod.rs
//! Organizational rule checks.
//!
//! Both checks are pure functions over an [`OrgIndex`]; [`Analyzer`] runs them
//! with the configured rules.

pub mod depth;
pub mod salary;
pub mod types;

pub use depth::{analyze_reporting_lines, walk_reporting_chain, ChainEnd, ChainWalk};
pub use salary::{analyze_salaries, average_salary, SalaryBand, SalaryVerdict};
pub use types::{
    ManagerSalaryIssue, OrgReport, ReportingLineIssue, ReportingLineReport, SalaryReport,
};

use crate::config::RuleConfig;
use crate::org::OrgIndex;

pub struct Analyzer {
    rules: RuleConfig,
}

impl Analyzer {
    #[must_use]
    pub fn new(rules: RuleConfig) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn analyze(&self, index: &OrgIndex) -> OrgReport {
        let start = std::time::Instant::now();

        let salary = analyze_salaries(index, &self.rules.salary_band());
        let reporting_lines = analyze_reporting_lines(index, self.rules.max_reporting_line);

        tracing::debug!(
            employees = index.record_count(),
            underpaid = salary.underpaid.len(),
            overpaid = salary.overpaid.len(),
            long_lines = reporting_lines.issues.len(),
            elapsed = ?start.elapsed(),
            "analysis complete"
        );

        OrgReport {
            employee_count: index.record_count(),
            salary,
            reporting_lines,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(RuleConfig::default())
    }
}

/// Runs both checks with `rules`.
#[must_use]
pub fn analyze(index: &OrgIndex, rules: &RuleConfig) -> OrgReport {
    Analyzer::new(rules.clone()).analyze(index)
}
