use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analysis::salary::SalaryBand;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Managers must earn at least this multiple of their reports' average salary.
    #[serde(default = "default_min_ratio")]
    pub min_salary_ratio: f64,
    /// ...and at most this multiple.
    #[serde(default = "default_max_ratio")]
    pub max_salary_ratio: f64,
    /// Maximum number of managers between an employee and the CEO.
    #[serde(default = "default_max_line", alias = "max_depth")]
    pub max_reporting_line: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            min_salary_ratio: default_min_ratio(),
            max_salary_ratio: default_max_ratio(),
            max_reporting_line: default_max_line(),
        }
    }
}

impl RuleConfig {
    #[must_use]
    pub fn salary_band(&self) -> SalaryBand {
        SalaryBand::new(self.min_salary_ratio, self.max_salary_ratio)
    }
}

const fn default_min_ratio() -> f64 {
    1.20
}

const fn default_max_ratio() -> f64 {
    1.50
}

const fn default_max_line() -> usize {
    4
}

/// On-disk shape of `orgaudit.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrgAuditToml {
    #[serde(default)]
    pub rules: RuleConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rules: RuleConfig,
    /// File the rules were read from, if any.
    pub loaded_from: Option<PathBuf>,
}
