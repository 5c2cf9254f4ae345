//! Schema building from a header row and a sample data row.

use crate::error::{Error, Result};
use crate::inference::classify;
use crate::input::ParsedTable;
use crate::schema::types::{ColumnDef, ColumnType, SchemaOptions};

/// Build a column list from column names and one sample row.
///
/// Sensitive columns (by default only `password`) are always
/// [`ColumnType::VarcharPassword`]; every other column takes the type of its
/// sample value.
pub fn build_schema(
    columns: &[String],
    sample_row: &[String],
    options: &SchemaOptions,
) -> Result<Vec<ColumnDef>> {
    if columns.len() != sample_row.len() {
        return Err(Error::Parse(format!(
            "sample row has {} values but there are {} columns",
            sample_row.len(),
            columns.len()
        )));
    }

    let schema = columns
        .iter()
        .zip(sample_row)
        .map(|(name, value)| {
            let column_type = if options.is_sensitive(name) {
                ColumnType::VarcharPassword
            } else {
                classify(value)
            };
            ColumnDef::new(name.clone(), column_type)
        })
        .collect();

    Ok(schema)
}

/// Infer the schema of a parsed table from its first data row.
pub fn infer_table_schema(table: &ParsedTable, options: &SchemaOptions) -> Result<Vec<ColumnDef>> {
    let sample = table.rows.first().ok_or_else(|| Error::Schema {
        table: table.name.clone(),
    })?;
    build_schema(&table.columns, sample, options)
}

/// Render columns as the body of a `CREATE TABLE` statement.
pub fn schema_fragment(schema: &[ColumnDef]) -> String {
    schema
        .iter()
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the `CREATE TABLE IF NOT EXISTS` statement for a table.
pub fn create_table_statement(table_name: &str, fragment: &str) -> String {
    format!("CREATE TABLE IF NOT EXISTS {} ({});", table_name, fragment)
}
