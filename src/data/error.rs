//! Dataset loading error types
//!
//! All of these are fatal at startup: the server must not serve traffic with
//! partially loaded data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the source files.
#[derive(Error, Debug)]
pub enum DataError {
    /// Source file could not be opened or read
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV structure error (beyond per-row coercion)
    #[error("failed to parse {path:?}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column header is absent from the source
    #[error("{path:?} is missing required column {column:?}")]
    MissingColumn { path: PathBuf, column: String },
}

/// Result type for dataset loading.
pub type DataResult<T> = Result<T, DataError>;
