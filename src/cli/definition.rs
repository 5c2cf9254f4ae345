// Shared CLI definition, included by both `src/cli/mod.rs` and `build.rs`.
// Keep it free of crate-internal types so the build script can compile it.

/// Create SQL tables from a directory of CSV files and bulk-load their rows
#[derive(Parser, Debug)]
#[command(
    name = "csv2sql",
    about = "Create SQL tables from a directory of CSV files and bulk-load their rows",
    version = VERSION,
    author
)]
pub struct Cli {
    /// Directory containing the CSV files to load (not searched recursively)
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Database connection string (overrides DATABASE_URL)
    #[arg(long, value_name = "URL")]
    pub database_url: Option<String>,

    /// Env file to load before reading DATABASE_URL
    #[arg(long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Match the .csv extension case-insensitively
    #[arg(long)]
    pub ignore_case: bool,

    /// Extra column name always stored as varchar(255), in addition to 'password'
    #[arg(long = "sensitive-column", value_name = "NAME")]
    pub sensitive_columns: Vec<String>,

    /// Print the generated statements instead of executing them
    #[arg(long)]
    pub dry_run: bool,

    /// Dry-run output format: 'sql' (default) or 'json'
    #[arg(long, default_value = "sql")]
    pub format: String,

    /// Color output: 'auto' (default), 'always', or 'never'
    #[arg(long, default_value = "auto")]
    pub color: String,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log generated SQL and other debugging detail
    #[arg(short, long)]
    pub verbose: bool,
}
