//! Load command: scan, plan, then execute or print.

use std::io;
use std::path::PathBuf;

use csv2sql::config::{load_env_file, resolve_database_url};
use csv2sql::{
    load_directory, plan_directory, write_plan, Config, Error, OutputFormat, PostgresExecutor,
    Result,
};
use tracing::info;

use super::Cli;

/// Build the run configuration from parsed arguments.
///
/// Loads the env file first so `DATABASE_URL` can come from it.
pub fn build_config(cli: &Cli, dir: PathBuf) -> Result<Config> {
    load_env_file(&cli.env_file)?;

    let format: OutputFormat = cli.format.parse().map_err(|_| {
        Error::Configuration(format!(
            "Unknown output format '{}'. Use 'sql' or 'json'.",
            cli.format
        ))
    })?;

    let mut config = Config::new(dir);
    config.database_url = resolve_database_url(cli.database_url.clone());
    config.ignore_case = cli.ignore_case;
    config.dry_run = cli.dry_run;
    config.format = format;
    for name in &cli.sensitive_columns {
        if !config.schema.is_sensitive(name) {
            config.schema.sensitive_columns.push(name.clone());
        }
    }

    Ok(config)
}

/// Run a load for `dir`.
pub fn run(cli: &Cli, dir: PathBuf) -> Result<()> {
    let config = build_config(cli, dir)?;

    if config.dry_run {
        let plan = plan_directory(&config)?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        return write_plan(&plan, config.format, &mut out);
    }

    // Connect before touching any files so a bad connection string fails fast.
    let database_url = config.require_database_url()?;
    let mut executor = PostgresExecutor::connect(database_url)?;
    info!("connected to database");

    let plan = load_directory(&config, &mut executor)?;

    info!(tables = plan.tables.len(), "load complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    /// Parse `args` with a non-existent env file and the temp dir as DIR.
    fn parse(dir: &tempfile::TempDir, args: &[&str]) -> Cli {
        let env_file = dir.path().join("none.env");
        let mut argv = vec![
            "csv2sql".to_string(),
            "--env-file".to_string(),
            env_file.to_string_lossy().to_string(),
        ];
        argv.extend(args.iter().map(|s| s.to_string()));
        argv.push(dir.path().to_string_lossy().to_string());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_build_config_merges_sensitive_columns() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(
            &dir,
            &["--sensitive-column", "password", "--sensitive-column", "ssn"],
        );

        let config = build_config(&cli, dir.path().to_path_buf()).unwrap();
        assert_eq!(config.schema.sensitive_columns, vec!["password", "ssn"]);
    }

    #[test]
    fn test_build_config_rejects_unknown_format() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&dir, &["--format", "xml"]);

        let result = build_config(&cli, dir.path().to_path_buf());
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_build_config_flags() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&dir, &["--dry-run", "--ignore-case", "--format", "json"]);

        let config = build_config(&cli, dir.path().to_path_buf()).unwrap();
        assert!(config.dry_run);
        assert!(config.ignore_case);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_explicit_database_url() {
        let dir = tempfile::tempdir().unwrap();
        let cli = parse(&dir, &["--database-url", "postgres://localhost/test"]);

        let config = build_config(&cli, dir.path().to_path_buf()).unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/test")
        );
    }
}
