//! Runtime configuration for a load.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::schema::SchemaOptions;

/// Environment variable holding the database connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Default env file loaded at start-up.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Settings for one run of the loader.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory to scan for CSV files
    pub dir: PathBuf,
    /// Connection string, passed through unchanged
    pub database_url: Option<String>,
    /// Match the `.csv` extension case-insensitively
    pub ignore_case: bool,
    /// Print statements instead of executing them
    pub dry_run: bool,
    /// Output format for dry runs
    pub format: OutputFormat,
    /// Schema inference options
    pub schema: SchemaOptions,
}

impl Config {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            database_url: None,
            ignore_case: false,
            dry_run: false,
            format: OutputFormat::default(),
            schema: SchemaOptions::default(),
        }
    }

    /// The connection string, required unless this is a dry run.
    pub fn require_database_url(&self) -> Result<&str> {
        match self.database_url.as_deref() {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(Error::Configuration(format!(
                "{} is not set; export it, add it to {}, or pass --database-url",
                DATABASE_URL_VAR, DEFAULT_ENV_FILE
            ))),
        }
    }
}

/// Load variables from an env file into the process environment.
///
/// Variables already set in the environment are left alone. A missing file
/// is not an error; a malformed one is.
pub fn load_env_file(path: &Path) -> Result<()> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "loaded env file");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no env file");
            Ok(())
        }
        Err(e) => Err(Error::Configuration(format!(
            "cannot load env file '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Pick the connection string: an explicit value wins over the environment.
pub fn resolve_database_url(explicit: Option<String>) -> Option<String> {
    explicit.or_else(|| std::env::var(DATABASE_URL_VAR).ok())
}
