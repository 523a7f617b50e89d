//! Error types for treegrid
//!
//! Library code returns `TreeGridError`; the binary wraps it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treegrid operations
pub type TreeGridResult<T> = Result<T, TreeGridError>;

/// Main error type for treegrid operations
#[derive(Error, Debug)]
pub enum TreeGridError {
    /// A required configuration value was not provided
    #[error("the '{field}' option must be specified")]
    MissingConfiguration { field: &'static str },

    /// A configuration value has the wrong type or an unknown value
    #[error("invalid value for '{option}': {message}")]
    InvalidOption { option: String, message: String },

    /// A record lacks the configured key or parent field
    ///
    /// `index` is the record's position in the sequence handed to the
    /// failing operation. Grids validate every record before reordering,
    /// so errors from `TreeGrid` carry the position in the data source.
    #[error("record #{index} has no '{field}' field")]
    MalformedRecord { index: usize, field: String },

    /// The parent links loop back on themselves
    #[error("cyclic hierarchy detected at key {key}")]
    CyclicHierarchy { key: String },

    /// Two records share the same key
    #[error("duplicate key {key}")]
    DuplicateKey { key: String },

    /// The data source returned parallel sequences of different lengths
    #[error("data source returned {models} records but {keys} keys")]
    KeyCountMismatch { models: usize, keys: usize },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Record file could not be parsed
    #[error("invalid record data in {file}: {message}")]
    InvalidData { file: PathBuf, message: String },

    /// Record file has an extension we cannot read
    #[error("unsupported data format for {file} (expected .json, .yaml or .yml)")]
    UnsupportedDataFormat { file: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
