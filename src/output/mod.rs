//! Reporting of a generated load plan without touching a database.
//!
//! Supports two output formats:
//! - SQL: every statement on its own line, in execution order (default)
//! - JSON: per-table summary with inferred columns and statements

use std::io::Write;

use crate::error::{Error, Result};
use crate::executor::{execute_plan, DryRunExecutor};
use crate::plan::LoadPlan;

/// Output format for a dry run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain SQL statements (default)
    #[default]
    Sql,
    /// Pretty-printed JSON
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sql" => Ok(OutputFormat::Sql),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Write the plan in the requested format.
pub fn write_plan<W: Write>(plan: &LoadPlan, format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Sql => write_plan_sql(plan, writer),
        OutputFormat::Json => write_plan_json(plan, writer),
    }
}

/// Write every statement on its own line, in the order they would run.
pub fn write_plan_sql<W: Write>(plan: &LoadPlan, writer: &mut W) -> Result<()> {
    let mut executor = DryRunExecutor::new(writer);
    execute_plan(plan, &mut executor)
}

/// Write the plan as a pretty-printed JSON array, one object per table.
pub fn write_plan_json<W: Write>(plan: &LoadPlan, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(&plan.tables)
        .map_err(|e| Error::Parse(format!("cannot serialize plan: {}", e)))?;
    writeln!(writer, "{}", json).map_err(|e| Error::io("<output>", e))?;
    Ok(())
}
