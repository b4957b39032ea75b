// src/source/csv.rs
//! Employee CSV parsing.
//!
//! Expected layout: a header row (skipped, not validated) followed by
//! `Id,firstName,lastName,salary,managerId` records. An empty `managerId`
//! marks the CEO. Blank lines are ignored.

use std::io::BufRead;
use std::path::Path;

use crate::error::{OrgAuditError, RecordError, Result};
use crate::types::Employee;

/// Parses employees from any buffered reader. `origin` is only used in errors.
///
/// # Errors
/// Returns `EmptyInput` if there is no header line, `InvalidRecord` for the
/// first malformed record, or `Io` if reading fails.
pub fn parse_employees<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Employee>> {
    let mut lines = reader.lines();

    match lines.next() {
        None => {
            return Err(OrgAuditError::EmptyInput {
                path: origin.to_path_buf(),
            })
        }
        Some(header) => {
            header.map_err(|source| io_error(source, origin))?;
        }
    }

    let mut employees = Vec::new();
    for (offset, line) in lines.enumerate() {
        let line = line.map_err(|source| io_error(source, origin))?;
        if line.trim().is_empty() {
            continue;
        }
        // +2: one for the header, one for 1-based numbering
        let line_number = offset + 2;
        let employee = parse_record(&line)
            .map_err(|reason| OrgAuditError::InvalidRecord { line: line_number, reason })?;
        employees.push(employee);
    }

    tracing::debug!(count = employees.len(), origin = %origin.display(), "parsed employee records");
    Ok(employees)
}

/// Parses a single CSV record.
///
/// # Errors
/// Returns the first field-level problem found.
pub fn parse_record(line: &str) -> std::result::Result<Employee, RecordError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [id, first_name, last_name, salary, manager_id] = fields.as_slice() else {
        return Err(RecordError::FieldCount { found: fields.len() });
    };

    if id.is_empty() {
        return Err(RecordError::EmptyId);
    }
    if first_name.is_empty() || last_name.is_empty() {
        return Err(RecordError::EmptyName);
    }

    let salary = parse_salary(salary)?;
    let manager = (!manager_id.is_empty()).then_some(*manager_id);

    Ok(Employee::new(*id, *first_name, *last_name, salary, manager))
}

fn parse_salary(raw: &str) -> std::result::Result<f64, RecordError> {
    let value: f64 = raw
        .parse()
        .map_err(|_| RecordError::InvalidSalary(raw.to_string()))?;
    if !value.is_finite() {
        return Err(RecordError::InvalidSalary(raw.to_string()));
    }
    if value < 0.0 {
        return Err(RecordError::NegativeSalary);
    }
    Ok(value)
}

fn io_error(source: std::io::Error, origin: &Path) -> OrgAuditError {
    OrgAuditError::Io {
        source,
        path: origin.to_path_buf(),
    }
}
