//! Schema representation and inference for SQL tables.

pub mod builder;
pub mod types;

pub use builder::{build_schema, create_table_statement, infer_table_schema, schema_fragment};
pub use types::{ColumnDef, ColumnType, SchemaOptions};
