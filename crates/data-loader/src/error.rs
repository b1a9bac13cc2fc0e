//! Error types for the data-loader crate.
//!
//! Loading failures are fatal for the application, while write failures
//! are reported and the session carries on, so both live in one enum and
//! the caller decides how to react.

use thiserror::Error;

/// Errors that can occur while loading, querying or exporting a table
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The CSV reader or writer failed in a way that has no line context
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A record in the data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: u64,
        reason: String,
    },

    /// The header row lacks one of the columns the filters rely on
    #[error("Missing column '{column}' in {file}")]
    MissingColumn { file: String, column: String },

    /// A row does not have one value per column
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: u64,
    },

    /// A query referenced a column the table doesn't have
    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    /// The destination of an export could not be written
    #[error("Failed to write {path}: {reason}")]
    WriteError { path: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
