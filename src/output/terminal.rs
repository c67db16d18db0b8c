//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a `label: value` line with the label padded to `width`.
pub fn format_row(label: &str, value: &str, width: usize) -> String {
    let padded = format!("{label:<width$}");
    format!("{} {value}", padded.bold())
}

/// Format one line of a numbered listing (hosts, subnets).
pub fn format_list_row<T: ToString>(index: usize, value: T) -> String {
    format!("{},{}", format_field(index, 8), format_field(value, 20))
}
