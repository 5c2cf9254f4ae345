//! CSV input: directory scanning and file parsing.

pub mod csv;
pub mod dir;

pub use self::csv::{parse_table, read_table, table_name, ParsedTable};
pub use self::dir::{list_csv_files, read_directory};
