//! Output formatting utilities.

use serde_json::{json, Value};
use sigpolicy_notice::ValidationError;

/// Formats a value as indented JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a validation error for a JSON report.
pub fn error_json(err: &ValidationError) -> Value {
    json!({
        "code": err.code(),
        "field": err.field(),
        "message": err.to_string(),
    })
}

/// Formats an organization for display, marking absence.
pub fn organization_label(organization: Option<&str>) -> String {
    match organization {
        Some(org) => format!("{:?}", org),
        None => "<absent>".to_string(),
    }
}

/// Prints the notice-number table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<8} {}", "INDEX", "NUMBER");
    println!("{}", "-".repeat(24));
}

/// Formats a notice number as a table row.
pub fn format_table_row(index: usize, number: i32) -> String {
    format!("{:<8} {}", index, number)
}
