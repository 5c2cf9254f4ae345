//! Error types for the CSV loader.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for csv2sql.
///
/// Every failure is fatal: the first error stops the run and is reported
/// once at the top level, which picks the process exit status from
/// [`Error::exit_code`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unable to connect to database: {0}")]
    Connection(String),

    #[error("IO error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in '{}': {message}", .path.display())]
    CsvParse { path: PathBuf, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema error: table '{table}' has no data rows to infer column types from")]
    Schema { table: String },

    #[error("SQL execution failed: {message}\n  statement: {statement}")]
    Execution { statement: String, message: String },
}

impl Error {
    /// Process exit status for this error.
    ///
    /// SQL execution failures exit with 2; everything else exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Execution { .. } => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
