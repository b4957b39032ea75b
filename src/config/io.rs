// src/config/io.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::{Config, OrgAuditToml};

pub const CONFIG_FILE: &str = "orgaudit.toml";

/// Reads and applies a TOML config file.
///
/// # Errors
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_toml_file(config: &mut Config, path: &Path) -> Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_toml(config, &content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config.loaded_from = Some(path.to_path_buf());
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(())
}

/// Applies TOML content on top of `config`.
///
/// # Errors
/// Returns error if the content is not valid TOML for `OrgAuditToml`.
pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: OrgAuditToml = toml::from_str(content)?;
    config.rules = parsed.rules;
    Ok(())
}

/// Loads `orgaudit.toml` from `dir` when it exists. A missing file is not an error.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn load_local_config(config: &mut Config, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(());
    }
    load_toml_file(config, &path)
}
