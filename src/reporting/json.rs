//! Machine-readable report output.

use anyhow::Result;

use crate::analysis::OrgReport;

/// Serializes the report as pretty-printed JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_json(report: &OrgReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Prints the report as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(report: &OrgReport) -> Result<()> {
    println!("{}", to_json(report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;
    use crate::org::OrgIndex;
    use crate::types::Employee;

    #[test]
    fn json_has_report_shape() {
        let index = OrgIndex::new(vec![
            Employee::new("1", "CEO", "Boss", 100_000.0, None),
            Employee::new("2", "Manager", "Low", 45_000.0, Some("1")),
            Employee::new("3", "Dev", "One", 50_000.0, Some("2")),
        ]);
        let report = Analyzer::default().analyze(&index);
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(value["employee_count"], 3);
        let underpaid = value["salary"]["underpaid"].as_array().unwrap();
        assert_eq!(underpaid.len(), 1);
        assert_eq!(underpaid[0]["manager"]["id"], "2");
        assert_eq!(underpaid[0]["manager"]["manager_id"], "1");
        assert!(value["salary"]["overpaid"].is_array());
        assert_eq!(value["reporting_lines"]["max_reporting_line"], 4);
        assert!(value["reporting_lines"]["issues"].as_array().unwrap().is_empty());
    }
}
