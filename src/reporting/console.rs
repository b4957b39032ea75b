//! Console output for analysis results.
//!
//! Sections are printed in a fixed order: underpaid managers, overpaid
//! managers, long reporting lines, then a one-line verdict.

use anyhow::Result;
use colored::Colorize;
use std::fmt::Write;

use crate::analysis::{ManagerSalaryIssue, OrgReport, ReportingLineReport, SalaryReport};

const RULE: &str = "========================================";

/// Prints the full report to stdout.
///
/// # Errors
/// Returns error if formatting fails.
pub fn print_report(report: &OrgReport) -> Result<()> {
    print!("{}", render_report(report)?);
    Ok(())
}

/// Renders the full report, including the header and closing verdict.
///
/// # Errors
/// Returns error if formatting fails.
pub fn render_report(report: &OrgReport) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Analyzing organizational structure for {} employees...",
        report.employee_count
    )?;
    writeln!(out)?;

    write_salary_report(&mut out, &report.salary)?;
    write_reporting_line_report(&mut out, &report.reporting_lines)?;

    writeln!(out)?;
    if report.has_issues() {
        writeln!(
            out,
            "{}",
            "Analysis complete. Please review the issues above.".yellow().bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            "No issues found. Organizational structure looks good!".green().bold()
        )?;
    }
    Ok(out)
}

/// Writes the underpaid and overpaid sections.
///
/// # Errors
/// Returns error if formatting fails.
pub fn write_salary_report(out: &mut String, report: &SalaryReport) -> Result<()> {
    write_salary_section(
        out,
        &report.underpaid,
        SalarySection {
            title: "MANAGERS EARNING LESS THAN THEY SHOULD:",
            empty: "No managers earning less than they should.",
            bound_label: "Should earn at least",
            diff_label: "Short by",
        },
    )?;
    write_salary_section(
        out,
        &report.overpaid,
        SalarySection {
            title: "MANAGERS EARNING MORE THAN THEY SHOULD:",
            empty: "No managers earning more than they should.",
            bound_label: "Should earn at most",
            diff_label: "Over by",
        },
    )
}

struct SalarySection {
    title: &'static str,
    empty: &'static str,
    bound_label: &'static str,
    diff_label: &'static str,
}

fn write_salary_section(
    out: &mut String,
    issues: &[ManagerSalaryIssue],
    section: SalarySection,
) -> Result<()> {
    if issues.is_empty() {
        writeln!(out, "{}", section.empty.green())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", section.title.red().bold())?;
    writeln!(out, "{RULE}")?;
    for issue in issues {
        let m = &issue.manager;
        writeln!(out, "{} {} (ID: {})", m.first_name, m.last_name, m.id.cyan())?;
        writeln!(out, "  Current salary: {}", money(m.salary))?;
        writeln!(out, "  Avg subordinate salary: {}", money(issue.avg_subordinate_salary))?;
        writeln!(out, "  {}: {}", section.bound_label, money(issue.expected_salary))?;
        writeln!(out, "  {}: {}", section.diff_label, money(issue.difference).red())?;
        writeln!(out)?;
    }
    Ok(())
}

/// Writes the long reporting lines section.
///
/// # Errors
/// Returns error if formatting fails.
pub fn write_reporting_line_report(out: &mut String, report: &ReportingLineReport) -> Result<()> {
    if report.issues.is_empty() {
        writeln!(out, "{}", "No employees with reporting lines too long.".green())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", "EMPLOYEES WITH REPORTING LINES TOO LONG:".red().bold())?;
    writeln!(out, "{RULE}=")?;
    for issue in &report.issues {
        let e = &issue.employee;
        writeln!(out, "{} {} (ID: {})", e.first_name, e.last_name, e.id.cyan())?;
        writeln!(
            out,
            "  Reporting line length: {} managers",
            issue.reporting_line_length
        )?;
        writeln!(
            out,
            "  Maximum allowed: {} managers",
            report.max_reporting_line
        )?;
        writeln!(
            out,
            "  Too long by: {} manager(s)",
            issue.excess.to_string().red()
        )?;
        writeln!(out)?;
    }
    Ok(())
}

fn money(amount: f64) -> String {
    format!("${amount:.2}")
}
