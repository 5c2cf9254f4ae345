//! CLI module for csv2sql.
//!
//! Parses arguments, sets up logging and configuration, and is the single
//! place where an error is turned into a process exit status.

pub mod load;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

/// Version string with git hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

include!("definition.rs");

/// Run the CLI application and return the process exit status.
pub fn run() -> i32 {
    let cli = Cli::parse();

    configure_color(&cli.color);
    init_logging(cli.quiet, cli.verbose);

    let Some(dir) = cli.dir.clone() else {
        eprintln!("Please provide a directory");
        eprintln!();
        eprintln!("{}", Cli::command().render_usage());
        return 1;
    };

    match load::run(&cli, dir) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            e.exit_code()
        }
    }
}

fn configure_color(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::unset_override(),
    }
}

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over the flags.
fn init_logging(quiet: bool, verbose: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
