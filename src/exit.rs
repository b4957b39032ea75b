// src/exit.rs
//! Standardized process exit codes for `orgaudit`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

use crate::error::OrgAuditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum OrgAuditExit {
    /// Analysis completed (issues, if any, were reported but not enforced).
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// The employee CSV could not be parsed.
    InvalidInput = 2,
    /// `--strict` was given and at least one issue was found.
    IssuesFound = 6,
}

impl OrgAuditExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Maps an application error to its exit code.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<OrgAuditError>() {
            Some(e) if e.is_input_error() => Self::InvalidInput,
            _ => Self::Error,
        }
    }
}

impl Termination for OrgAuditExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
