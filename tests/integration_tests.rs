//! End-to-end tests for csv2sql: directory in, statements out.

use std::fs;
use std::path::Path;

use csv2sql::{
    load_directory, plan_directory, Config, Error, LoadPlan, Result, SchemaOptions, SqlExecutor,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Executor that records every statement it is given.
#[derive(Default)]
struct RecordingExecutor {
    statements: Vec<String>,
    fail_on: Option<&'static str>,
}

impl SqlExecutor for RecordingExecutor {
    fn execute(&mut self, sql: &str) -> Result<()> {
        if let Some(needle) = self.fail_on {
            if sql.contains(needle) {
                return Err(Error::Execution {
                    statement: sql.to_string(),
                    message: "relation already exists".to_string(),
                });
            }
        }
        self.statements.push(sql.to_string());
        Ok(())
    }
}

fn write_files(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        fs::write(dir.path().join(name), content).unwrap();
    }
    dir
}

fn load(dir: &Path) -> (Result<LoadPlan>, Vec<String>) {
    let mut executor = RecordingExecutor::default();
    let result = load_directory(&Config::new(dir), &mut executor);
    (result, executor.statements)
}

// =============================================================================
// HAPPY PATH
// =============================================================================

#[test]
fn test_users_scenario() {
    let dir = write_files(&[("users.csv", "id,name,password\n1,Alice,secret\n")]);
    let (result, statements) = load(dir.path());

    result.unwrap();
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE IF NOT EXISTS users (id int, name varchar(255), password varchar(255));",
            "INSERT INTO users values (1,'Alice','secret');",
        ]
    );
}

#[test]
fn test_all_creates_run_before_inserts() {
    let dir = write_files(&[
        ("orders.csv", "id,total\n1,19.99\n2,5.00\n"),
        ("users.csv", "id,name\n1,Alice\n"),
    ]);
    let (result, statements) = load(dir.path());

    result.unwrap();
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE IF NOT EXISTS orders (id int, total decimal(10,2));",
            "CREATE TABLE IF NOT EXISTS users (id int, name varchar(255));",
            "INSERT INTO orders values (1,19.99),(2,5.00);",
            "INSERT INTO users values (1,'Alice');",
        ]
    );
}

#[test]
fn test_text_array_column() {
    let dir = write_files(&[(
        "posts.csv",
        "id,tags\n1,\"[\"\"rust\"\",\"\"sql\"\"]\"\n",
    )]);
    let (result, statements) = load(dir.path());

    result.unwrap();
    assert_eq!(
        statements,
        vec![
            "CREATE TABLE IF NOT EXISTS posts (id int, tags text[]);",
            r#"INSERT INTO posts values (1,'{"rust","sql"}');"#,
        ]
    );
}

#[test]
fn test_declared_type_and_cell_rendering_can_differ() {
    let dir = write_files(&[("mixed.csv", "code\n42\nABC\n")]);
    let (result, statements) = load(dir.path());

    result.unwrap();
    assert_eq!(statements[0], "CREATE TABLE IF NOT EXISTS mixed (code int);");
    assert_eq!(statements[1], "INSERT INTO mixed values (42),('ABC');");
}

#[test]
fn test_non_csv_files_are_ignored() {
    let dir = write_files(&[
        ("README.md", "# not data"),
        ("data.json", "[]"),
        ("t.csv", "a\nx\n"),
    ]);
    let (result, statements) = load(dir.path());

    let plan = result.unwrap();
    assert_eq!(plan.tables.len(), 1);
    assert_eq!(statements.len(), 2);
}

#[test]
fn test_plan_reports_columns() {
    let dir = write_files(&[("users.csv", "id,password\n1,hunter2\n")]);
    let plan = plan_directory(&Config::new(dir.path())).unwrap();

    let columns: Vec<String> = plan.tables[0]
        .columns
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(columns, vec!["id int", "password varchar(255)"]);
}

#[test]
fn test_extra_sensitive_column() {
    let dir = write_files(&[("people.csv", "name,ssn\nBob,123456789\n")]);
    let mut config = Config::new(dir.path());
    config.schema = SchemaOptions {
        sensitive_columns: vec!["password".to_string(), "ssn".to_string()],
    };

    let plan = plan_directory(&config).unwrap();
    assert_eq!(
        plan.tables[0].create,
        "CREATE TABLE IF NOT EXISTS people (name varchar(255), ssn varchar(255));"
    );
}

#[test]
fn test_ignore_case_extension() {
    let dir = write_files(&[("LEGACY.CSV", "a\n1\n")]);

    let strict = plan_directory(&Config::new(dir.path())).unwrap();
    assert!(strict.is_empty());

    let mut config = Config::new(dir.path());
    config.ignore_case = true;
    let relaxed = plan_directory(&config).unwrap();
    assert_eq!(relaxed.tables[0].table, "LEGACY");
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_header_only_file_is_schema_error() {
    let dir = write_files(&[("empty.csv", "id,name\n")]);
    let (result, statements) = load(dir.path());

    match result {
        Err(Error::Schema { table }) => assert_eq!(table, "empty"),
        other => panic!("expected schema error, got {:?}", other),
    }
    assert!(statements.is_empty());
}

#[test]
fn test_nothing_runs_when_a_later_file_fails() {
    let dir = write_files(&[("a.csv", "x\n1\n"), ("b.csv", "x\n")]);
    let (result, statements) = load(dir.path());

    assert!(matches!(result, Err(Error::Schema { .. })));
    assert!(statements.is_empty());
}

#[test]
fn test_ragged_csv_is_parse_error() {
    let dir = write_files(&[("bad.csv", "a,b,c\n1,2,3\n4,5\n")]);
    let (result, statements) = load(dir.path());

    match result {
        Err(e @ Error::CsvParse { .. }) => {
            assert_eq!(e.exit_code(), 1);
            assert!(e.to_string().contains("bad.csv"));
        }
        other => panic!("expected CSV parse error, got {:?}", other),
    }
    assert!(statements.is_empty());
}

#[test]
fn test_missing_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let (result, _) = load(&dir.path().join("missing"));
    assert!(matches!(result, Err(Error::Io { .. })));
}

#[test]
fn test_execution_failure_stops_the_load() {
    let dir = write_files(&[("a.csv", "x\n1\n"), ("b.csv", "y\n2\n")]);
    let mut executor = RecordingExecutor {
        fail_on: Some("CREATE TABLE IF NOT EXISTS b"),
        ..Default::default()
    };

    let result = load_directory(&Config::new(dir.path()), &mut executor);

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        executor.statements,
        vec!["CREATE TABLE IF NOT EXISTS a (x int);"]
    );
}
