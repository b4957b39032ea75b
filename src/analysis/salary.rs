// src/analysis/salary.rs
//! Manager salary band check.
//!
//! A manager should earn between `min_ratio` and `max_ratio` times the
//! average salary of their direct subordinates, bounds inclusive.

use serde::Serialize;

use super::types::{ManagerSalaryIssue, SalaryReport};
use crate::org::OrgIndex;
use crate::types::Employee;

/// Allowed salary range as multiples of the direct-report average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SalaryBand {
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for SalaryBand {
    fn default() -> Self {
        Self {
            min_ratio: 1.20,
            max_ratio: 1.50,
        }
    }
}

/// Where a salary sits relative to the band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryVerdict {
    Compliant,
    /// Carries the floor and the shortfall below it.
    Underpaid { expected: f64, shortfall: f64 },
    /// Carries the ceiling and the excess above it.
    Overpaid { expected: f64, excess: f64 },
}

impl SalaryBand {
    #[must_use]
    pub fn new(min_ratio: f64, max_ratio: f64) -> Self {
        Self { min_ratio, max_ratio }
    }

    #[must_use]
    pub fn judge(&self, salary: f64, avg_subordinate_salary: f64) -> SalaryVerdict {
        let min_expected = avg_subordinate_salary * self.min_ratio;
        let max_expected = avg_subordinate_salary * self.max_ratio;

        if salary < min_expected {
            SalaryVerdict::Underpaid {
                expected: min_expected,
                shortfall: min_expected - salary,
            }
        } else if salary > max_expected {
            SalaryVerdict::Overpaid {
                expected: max_expected,
                excess: salary - max_expected,
            }
        } else {
            SalaryVerdict::Compliant
        }
    }
}

/// Mean salary of `employees`, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_salary(employees: &[Employee]) -> Option<f64> {
    if employees.is_empty() {
        return None;
    }
    let total: f64 = employees.iter().map(|e| e.salary).sum();
    Some(total / employees.len() as f64)
}

/// Checks every resolvable manager against `band`.
///
/// Manager ids with no employee record are skipped. Both result lists are
/// sorted by manager id.
#[must_use]
pub fn analyze_salaries(index: &OrgIndex, band: &SalaryBand) -> SalaryReport {
    let mut report = SalaryReport::default();

    for (manager_id, subordinates) in index.manager_entries() {
        let Some(manager) = index.get(manager_id) else {
            tracing::debug!(manager_id, "skipping salary check: manager not found");
            continue;
        };
        let Some(avg) = average_salary(subordinates) else {
            continue;
        };
        record_verdict(&mut report, manager, avg, band.judge(manager.salary, avg));
    }

    report.underpaid.sort_by(|a, b| a.manager.id.cmp(&b.manager.id));
    report.overpaid.sort_by(|a, b| a.manager.id.cmp(&b.manager.id));
    report
}

fn record_verdict(report: &mut SalaryReport, manager: &Employee, avg: f64, verdict: SalaryVerdict) {
    match verdict {
        SalaryVerdict::Compliant => {}
        SalaryVerdict::Underpaid { expected, shortfall } => {
            report.underpaid.push(issue(manager, avg, expected, shortfall));
        }
        SalaryVerdict::Overpaid { expected, excess } => {
            report.overpaid.push(issue(manager, avg, expected, excess));
        }
    }
}

fn issue(manager: &Employee, avg: f64, expected: f64, difference: f64) -> ManagerSalaryIssue {
    ManagerSalaryIssue {
        manager: manager.clone(),
        avg_subordinate_salary: avg,
        expected_salary: expected,
        difference,
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    fn team(manager_salary: f64) -> OrgIndex {
        OrgIndex::new(vec![
            Employee::new("1", "CEO", "Boss", 100_000.0, None),
            Employee::new("2", "Manager", "Mid", manager_salary, Some("1")),
            Employee::new("3", "Dev", "One", 50_000.0, Some("2")),
            Employee::new("4", "Dev", "Two", 50_000.0, Some("2")),
        ])
    }

    fn issue_for<'a>(issues: &'a [ManagerSalaryIssue], id: &str) -> Option<&'a ManagerSalaryIssue> {
        issues.iter().find(|i| i.manager.id == id)
    }

    #[test]
    fn underpaid_manager() {
        let report = analyze_salaries(&team(45_000.0), &SalaryBand::default());
        assert_eq!(report.underpaid.len(), 1);

        let issue = &report.underpaid[0];
        assert_eq!(issue.manager.id, "2");
        assert!((issue.avg_subordinate_salary - 50_000.0).abs() < EPS);
        assert!((issue.expected_salary - 60_000.0).abs() < EPS);
        assert!((issue.difference - 15_000.0).abs() < EPS);

        // The CEO's only report earns 45k, so 100k is above the 67.5k ceiling.
        assert_eq!(report.overpaid.len(), 1);
        assert_eq!(report.overpaid[0].manager.id, "1");
        assert!((report.overpaid[0].difference - 32_500.0).abs() < EPS);
    }

    #[test]
    fn overpaid_manager() {
        let report = analyze_salaries(&team(80_000.0), &SalaryBand::default());
        assert!(report.underpaid.is_empty());
        assert_eq!(report.overpaid.len(), 1);

        let issue = &report.overpaid[0];
        assert_eq!(issue.manager.id, "2");
        assert!((issue.avg_subordinate_salary - 50_000.0).abs() < EPS);
        assert!((issue.expected_salary - 75_000.0).abs() < EPS);
        assert!((issue.difference - 5_000.0).abs() < EPS);
    }

    #[test]
    fn compliant_manager() {
        let report = analyze_salaries(&team(60_000.0), &SalaryBand::default());
        assert!(issue_for(&report.underpaid, "2").is_none());
        assert!(issue_for(&report.overpaid, "2").is_none());

        // 100k over a single 60k report exceeds the 90k ceiling.
        assert!(report.underpaid.is_empty());
        let ceo = issue_for(&report.overpaid, "1").unwrap();
        assert!((ceo.difference - 10_000.0).abs() < EPS);
    }

    #[test]
    fn fully_compliant_organization() {
        let index = OrgIndex::new(vec![
            Employee::new("1", "CEO", "Boss", 80_000.0, None),
            Employee::new("2", "Manager", "Mid", 60_000.0, Some("1")),
            Employee::new("3", "Dev", "One", 50_000.0, Some("2")),
            Employee::new("4", "Dev", "Two", 50_000.0, Some("2")),
        ]);
        let report = analyze_salaries(&index, &SalaryBand::default());
        assert!(!report.has_issues());
        assert_eq!(report.issue_count(), 0);
    }

    #[test]
    fn band_edges_are_compliant() {
        let band = SalaryBand::default();
        assert_eq!(band.judge(75_000.0, 50_000.0), SalaryVerdict::Compliant);
        assert_eq!(band.judge(60_000.0, 50_000.0), SalaryVerdict::Compliant);
        assert!(matches!(band.judge(59_999.0, 50_000.0), SalaryVerdict::Underpaid { .. }));
        assert!(matches!(band.judge(75_001.0, 50_000.0), SalaryVerdict::Overpaid { .. }));
    }

    #[test]
    fn verdicts_are_exclusive() {
        let band = SalaryBand::default();
        for salary in [0.0, 10_000.0, 59_999.99, 60_000.0, 70_000.0, 75_000.0, 75_000.01, 1e6] {
            let under = salary < 50_000.0 * 1.20;
            let over = salary > 50_000.0 * 1.50;
            match band.judge(salary, 50_000.0) {
                SalaryVerdict::Underpaid { .. } => assert!(under && !over),
                SalaryVerdict::Overpaid { .. } => assert!(over && !under),
                SalaryVerdict::Compliant => assert!(!under && !over),
            }
        }
    }

    #[test]
    fn only_direct_reports_count() {
        // Manager 2 has one report (3) who in turn manages a highly paid 4.
        let index = OrgIndex::new(vec![
            Employee::new("1", "C", "E", 200_000.0, None),
            Employee::new("2", "M", "A", 65_000.0, Some("1")),
            Employee::new("3", "M", "B", 50_000.0, Some("2")),
            Employee::new("4", "D", "C", 40_000.0, Some("3")),
        ]);
        let report = analyze_salaries(&index, &SalaryBand::default());
        // 2 sees only 3 (50k) and 3 sees only 4 (40k): both compliant.
        // 1 sees only 2 (65k): ceiling 97.5k, so 200k is over by 102.5k.
        assert!(report.underpaid.is_empty());
        assert_eq!(report.overpaid.len(), 1);
        assert_eq!(report.overpaid[0].manager.id, "1");
        assert!((report.overpaid[0].difference - 102_500.0).abs() < EPS);
    }

    #[test]
    fn dangling_manager_is_skipped() {
        let index = OrgIndex::new(vec![
            Employee::new("1", "C", "E", 100_000.0, None),
            Employee::new("2", "D", "O", 50_000.0, Some("999")),
        ]);
        let report = analyze_salaries(&index, &SalaryBand::default());
        assert!(!report.has_issues());
    }

    #[test]
    fn results_sorted_by_manager_id() {
        let index = OrgIndex::new(vec![
            Employee::new("c", "C", "E", 13.0, None),
            Employee::new("b", "M", "B", 10.0, Some("c")),
            Employee::new("a", "M", "A", 10.0, Some("c")),
            Employee::new("x", "D", "X", 100.0, Some("b")),
            Employee::new("y", "D", "Y", 100.0, Some("a")),
        ]);
        let report = analyze_salaries(&index, &SalaryBand::default());
        let ids: Vec<&str> = report.underpaid.iter().map(|i| i.manager.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn custom_band() {
        let band = SalaryBand::new(1.0, 1.1);
        let report = analyze_salaries(&team(56_000.0), &band);
        let issue = issue_for(&report.overpaid, "2").unwrap();
        assert!((issue.expected_salary - 55_000.0).abs() < EPS);
        assert!((issue.difference - 1_000.0).abs() < EPS);
    }

    #[test]
    fn average_of_empty_is_none() {
        assert_eq!(average_salary(&[]), None);
        let devs = [
            Employee::new("a", "A", "A", 10.0, Some("m")),
            Employee::new("b", "B", "B", 20.0, Some("m")),
            Employee::new("c", "C", "C", 33.0, Some("m")),
        ];
        assert!((average_salary(&devs).unwrap() - 21.0).abs() < EPS);
    }

    #[test]
    fn empty_index_yields_empty_report() {
        let report = analyze_salaries(&OrgIndex::new(Vec::new()), &SalaryBand::default());
        assert!(!report.has_issues());
    }
}
