// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrgAuditError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("CSV input is empty (path: {path})")]
    EmptyInput { path: PathBuf },

    #[error("invalid CSV format at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: RecordError },

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Field-level problems with a single employee record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 5 fields but found {found}")]
    FieldCount { found: usize },

    #[error("employee ID cannot be empty")]
    EmptyId,

    #[error("employee name cannot be empty")]
    EmptyName,

    #[error("invalid salary value: {0}")]
    InvalidSalary(String),

    #[error("salary cannot be negative")]
    NegativeSalary,
}

pub type Result<T> = std::result::Result<T, OrgAuditError>;

impl OrgAuditError {
    /// True when the error comes from malformed input rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::InvalidRecord { .. })
    }
}
