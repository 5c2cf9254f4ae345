//! csv2sql
//!
//! A library and CLI tool that scans a directory for CSV files, infers a SQL
//! table schema for each one from its first data row, creates the tables and
//! bulk-inserts the rows.
//!
//! The inference and formatting core is pure: it turns raw cell text into
//! `CREATE TABLE` and `INSERT` statement strings and never touches a
//! database. Running those statements is left to an [`SqlExecutor`].
//!
//! # Example
//!
//! ```rust
//! use csv2sql::{build_plan, ParsedTable, SchemaOptions};
//!
//! let users = ParsedTable {
//!     name: "users".to_string(),
//!     columns: vec!["id".into(), "name".into(), "password".into()],
//!     rows: vec![vec!["1".into(), "Alice".into(), "secret".into()]],
//! };
//!
//! let plan = build_plan(&[users], &SchemaOptions::default()).unwrap();
//! assert_eq!(
//!     plan.tables[0].create,
//!     "CREATE TABLE IF NOT EXISTS users (id int, name varchar(255), password varchar(255));"
//! );
//! assert_eq!(plan.tables[0].insert, "INSERT INTO users values (1,'Alice','secret');");
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod inference;
pub mod input;
pub mod output;
pub mod plan;
pub mod schema;
pub mod values;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use executor::{execute_plan, DryRunExecutor, PostgresExecutor, SqlExecutor};
pub use inference::classify;
pub use input::{list_csv_files, read_directory, read_table, ParsedTable};
pub use output::{write_plan, OutputFormat};
pub use plan::{build_plan, plan_table, LoadPlan, TablePlan};
pub use schema::{build_schema, schema_fragment, ColumnDef, ColumnType, SchemaOptions};
pub use values::format_rows;

use tracing::info;

/// Read every CSV file in the configured directory and generate its statements.
pub fn plan_directory(config: &Config) -> Result<LoadPlan> {
    let tables = read_directory(&config.dir, config.ignore_case)?;
    info!(
        dir = %config.dir.display(),
        tables = tables.len(),
        "read CSV files"
    );
    build_plan(&tables, &config.schema)
}

/// Plan and load the configured directory through `executor`.
///
/// Nothing is executed unless every file reads, parses and plans cleanly.
pub fn load_directory<E: SqlExecutor + ?Sized>(
    config: &Config,
    executor: &mut E,
) -> Result<LoadPlan> {
    let plan = plan_directory(config)?;
    execute_plan(&plan, executor)?;
    Ok(plan)
}
