//! Rendering of CSV rows as SQL value tuples.
//!
//! Every cell is classified again on its own rather than taking the type
//! declared for its column, so a column whose first row is numeric may still
//! contain quoted text further down.

use crate::inference::classify;

/// Render one raw cell as a SQL literal.
///
/// - Numbers are written as-is, unquoted.
/// - JSON string arrays become array literals by substituting every `[` with
///   `'{` and every `]` with `}'`.
/// - Everything else is wrapped in single quotes. Embedded quotes are not
///   escaped.
pub fn format_value(raw: &str) -> String {
    let column_type = classify(raw);
    if column_type.is_numeric() {
        raw.to_string()
    } else if column_type.is_varchar() {
        format!("'{}'", raw)
    } else {
        raw.replace('[', "'{").replace(']', "}'")
    }
}

/// Render a single row as a parenthesized tuple, e.g. `(1,'abc')`.
pub fn format_row(row: &[String]) -> String {
    let values: Vec<String> = row.iter().map(|v| format_value(v)).collect();
    format!("({})", values.join(","))
}

/// Render all rows as a comma-separated list of tuples.
///
/// The result has no statement keyword, trailing separator or semicolon.
pub fn format_rows(rows: &[Vec<String>]) -> String {
    rows.iter()
        .map(|row| format_row(row))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the `INSERT INTO` statement for a table.
pub fn insert_statement(table_name: &str, value_tuples: &str) -> String {
    format!("INSERT INTO {} values {};", table_name, value_tuples)
}
