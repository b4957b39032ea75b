// src/cli/handlers.rs
use anyhow::{Context, Result};
use colored::Colorize;

use crate::analysis::Analyzer;
use crate::cli::args::Cli;
use crate::config::Config;
use crate::exit::OrgAuditExit;
use crate::org::OrgIndex;
use crate::reporting;
use crate::source;

/// Resolves rules from the config file and command-line overrides.
///
/// # Errors
/// Returns error if the config file is unreadable or the resulting rules are invalid.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(min) = cli.min_ratio {
        config.rules.min_salary_ratio = min;
    }
    if let Some(max) = cli.max_ratio {
        config.rules.max_salary_ratio = max;
    }
    if let Some(depth) = cli.max_depth {
        config.rules.max_reporting_line = depth;
    }

    config.validate()?;
    Ok(config)
}

/// Reads the input, runs both checks and prints the report.
///
/// # Errors
/// Returns error if configuration, reading or parsing fails.
pub fn handle_analyze(cli: &Cli) -> Result<OrgAuditExit> {
    let config = resolve_config(cli)?;

    let employees = source::read_employees(&cli.file)
        .with_context(|| format!("failed to load employees from {}", cli.file.display()))?;

    let analyzer = Analyzer::new(config.rules);

    if employees.is_empty() {
        if cli.json {
            reporting::print_json(&analyzer.analyze(&OrgIndex::default()))?;
        } else {
            println!("{}", "No employees found in the file.".yellow());
        }
        return Ok(OrgAuditExit::Success);
    }

    let index = OrgIndex::new(employees);
    warn_on_structure(&index);

    let report = analyzer.analyze(&index);

    if cli.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_report(&report)?;
    }

    if cli.strict && report.has_issues() {
        Ok(OrgAuditExit::IssuesFound)
    } else {
        Ok(OrgAuditExit::Success)
    }
}

/// Logs structural anomalies the checks tolerate silently.
fn warn_on_structure(index: &OrgIndex) {
    for id in index.duplicate_ids() {
        tracing::warn!(id = %id, "duplicate employee id; the last record wins");
    }
    for id in index.dangling_manager_ids() {
        tracing::warn!(
            manager_id = id,
            subordinates = index.subordinates(id).len(),
            "manager id does not match any employee"
        );
    }
    match index.roots().len() {
        0 => tracing::warn!("no employee without a manager; reporting lines cannot reach a CEO"),
        1 => {}
        n => tracing::warn!(roots = n, "more than one employee without a manager"),
    }
}
