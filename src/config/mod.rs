// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{Config, OrgAuditToml, RuleConfig};

use anyhow::{bail, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `orgaudit.toml` from the current directory, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but is unreadable or malformed.
    pub fn load() -> Result<Self> {
        let mut config = Self::new();
        io::load_local_config(&mut config, Path::new("."))?;
        Ok(config)
    }

    /// Loads rules from an explicit file. The file must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_file(&mut config, path)?;
        Ok(config)
    }

    /// # Errors
    /// Returns error if the content is not valid TOML.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Validates the salary band and depth limit.
    ///
    /// # Errors
    /// Returns error if a ratio is non-finite or not positive, or if
    /// `min_salary_ratio` exceeds `max_salary_ratio`.
    pub fn validate(&self) -> Result<()> {
        let r = &self.rules;
        for (name, value) in [
            ("min_salary_ratio", r.min_salary_ratio),
            ("max_salary_ratio", r.max_salary_ratio),
        ] {
            if !value.is_finite() || value <= 0.0 {
                bail!(crate::error::OrgAuditError::Config(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if r.min_salary_ratio > r.max_salary_ratio {
            bail!(crate::error::OrgAuditError::Config(format!(
                "min_salary_ratio ({}) exceeds max_salary_ratio ({})",
                r.min_salary_ratio, r.max_salary_ratio
            )));
        }
        Ok(())
    }
}
