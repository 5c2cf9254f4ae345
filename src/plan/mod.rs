//! Statement generation for a set of parsed tables.
//!
//! All SQL is generated up front, before anything runs against the database,
//! so a table that cannot be planned stops the load with nothing executed.

use serde::Serialize;

use crate::error::Result;
use crate::input::ParsedTable;
use crate::schema::{create_table_statement, infer_table_schema, schema_fragment};
use crate::schema::{ColumnDef, SchemaOptions};
use crate::values::{format_rows, insert_statement};

/// Generated statements for one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePlan {
    pub table: String,
    pub columns: Vec<ColumnDef>,
    pub create: String,
    pub insert: String,
    pub rows: usize,
}

/// Generated statements for every table in a load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadPlan {
    pub tables: Vec<TablePlan>,
}

impl LoadPlan {
    /// All `CREATE TABLE` statements in file order, followed by all
    /// `INSERT` statements in file order.
    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.tables
            .iter()
            .map(|t| t.create.as_str())
            .chain(self.tables.iter().map(|t| t.insert.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Generate the `CREATE TABLE` and `INSERT` statements for one table.
pub fn plan_table(table: &ParsedTable, options: &SchemaOptions) -> Result<TablePlan> {
    let columns = infer_table_schema(table, options)?;
    let create = create_table_statement(&table.name, &schema_fragment(&columns));
    let insert = insert_statement(&table.name, &format_rows(&table.rows));

    Ok(TablePlan {
        table: table.name.clone(),
        columns,
        create,
        insert,
        rows: table.row_count(),
    })
}

/// Plan every table, failing on the first one that cannot be planned.
pub fn build_plan(tables: &[ParsedTable], options: &SchemaOptions) -> Result<LoadPlan> {
    let tables = tables
        .iter()
        .map(|t| plan_table(t, options))
        .collect::<Result<Vec<_>>>()?;
    Ok(LoadPlan { tables })
}
