//! Directory scanning for CSV files.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::input::csv::{read_table, ParsedTable};

/// List the `.csv` files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched. With `ignore_case`, `.CSV` and other
/// spellings of the extension match too.
pub fn list_csv_files(dir: &Path, ignore_case: bool) -> Result<Vec<PathBuf>> {
    // Surface a missing or unreadable directory as an IO error; glob would
    // silently yield nothing.
    std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let pattern = format!("{}/*.csv", Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions {
        case_sensitive: !ignore_case,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let paths = glob::glob_with(&pattern, options)
        .map_err(|e| Error::Parse(format!("invalid directory pattern '{}': {}", pattern, e)))?;

    let mut files = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(path) => debug!(path = %path.display(), "skipping non-file entry"),
            Err(e) => return Err(Error::io(e.path().to_path_buf(), e.into_error())),
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read every CSV file in `dir` into a [`ParsedTable`].
///
/// Stops at the first file that cannot be read or parsed.
pub fn read_directory(dir: &Path, ignore_case: bool) -> Result<Vec<ParsedTable>> {
    let files = list_csv_files(dir, ignore_case)?;
    if files.is_empty() {
        warn!(dir = %dir.display(), "no CSV files found");
    }

    files
        .iter()
        .map(|path| {
            debug!(path = %path.display(), "reading CSV file");
            read_table(path)
        })
        .collect()
}
