// src/source/mod.rs
//! Record sources: turn external input into `Employee` values.

pub mod csv;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::{OrgAuditError, Result};
use crate::types::Employee;

pub use self::csv::{parse_employees, parse_record};

/// Path argument that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Reads employees from a CSV file, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns `Io` if the file cannot be opened or read, otherwise any parse error.
pub fn read_employees(path: &Path) -> Result<Vec<Employee>> {
    if path == Path::new(STDIN_PATH) {
        let stdin = io::stdin();
        return parse_employees(stdin.lock(), Path::new("<stdin>"));
    }

    let file = File::open(path).map_err(|source| OrgAuditError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    parse_employees(BufReader::new(file), path)
}
