//! Core types for SQL table schema representation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Column type tags inferred from CSV cell text.
///
/// The set is closed: every cell classifies into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// Signed 64-bit integer, `int`
    Integer,
    /// Floating point text, stored as `decimal(10,2)`
    Decimal,
    /// JSON array of strings, stored as `text[]`
    TextArray,
    /// Anything else, `varchar(255)`
    VarcharDefault,
    /// Sensitive column forced to `varchar(255)` regardless of its sample value
    VarcharPassword,
}

impl ColumnType {
    /// Returns the SQL type used in `CREATE TABLE` statements.
    pub fn sql_type(&self) -> &'static str {
        match self {
            ColumnType::Integer => "int",
            ColumnType::Decimal => "decimal(10,2)",
            ColumnType::TextArray => "text[]",
            ColumnType::VarcharDefault | ColumnType::VarcharPassword => "varchar(255)",
        }
    }

    /// Returns true if values of this type are written unquoted.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Decimal)
    }

    /// Returns true if this is a plain string type.
    pub fn is_varchar(&self) -> bool {
        matches!(
            self,
            ColumnType::VarcharDefault | ColumnType::VarcharPassword
        )
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql_type())
    }
}

/// A single column of an inferred table schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
        }
    }
}

impl fmt::Display for ColumnDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.column_type)
    }
}

/// Options controlling schema inference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaOptions {
    /// Column names always typed as `varchar(255)`. Matched exactly and case-sensitively.
    pub sensitive_columns: Vec<String>,
}

impl SchemaOptions {
    /// Returns true if `name` is one of the sensitive columns.
    pub fn is_sensitive(&self, name: &str) -> bool {
        self.sensitive_columns.iter().any(|c| c == name)
    }
}

impl Default for SchemaOptions {
    fn default() -> Self {
        Self {
            sensitive_columns: vec!["password".to_string()],
        }
    }
}
