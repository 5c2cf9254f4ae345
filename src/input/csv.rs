//! CSV input reader.
//!
//! Reads a whole CSV document into a [`ParsedTable`]: the first record is the
//! header, every following record is a data row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// The full contents of one CSV file.
///
/// Every row has the same length as `columns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTable {
    /// Table name, derived from the file name without its extension
    pub name: String,
    /// Header row
    pub columns: Vec<String>,
    /// Data rows, raw cell text
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Parse CSV content from a reader.
///
/// `path` is only used in error messages.
pub fn parse_table<R: Read>(name: &str, reader: R, path: &Path) -> Result<ParsedTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let parse_error = |e: csv::Error| Error::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let columns: Vec<String> = csv_reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(|s| s.to_string())
        .collect();

    if columns.is_empty() {
        return Err(Error::CsvParse {
            path: path.to_path_buf(),
            message: "missing header row".to_string(),
        });
    }

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(parse_error)?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(ParsedTable {
        name: name.to_string(),
        columns,
        rows,
    })
}

/// Read and parse a CSV file, naming the table after the file stem.
pub fn read_table(path: &Path) -> Result<ParsedTable> {
    let name = table_name(path)?;
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    parse_table(&name, file, path)
}

/// Derive a table name from a file path by dropping the extension.
pub fn table_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(|stem| stem.to_string())
        .ok_or_else(|| Error::CsvParse {
            path: path.to_path_buf(),
            message: "cannot derive a table name from the file name".to_string(),
        })
}
