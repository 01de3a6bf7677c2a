//! Error types for rowset-core

use thiserror::Error;

use crate::column_type::ColumnType;

/// Result type alias using [`ReadError`]
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Errors surfaced while reading a tabular source.
///
/// The options model itself never raises these: builders are total and
/// `build()` is infallible. Reading engines use this vocabulary to report
/// configuration-related failures as distinct, actionable kinds.
#[derive(Debug, Error)]
pub enum ReadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Option combination the engine cannot honor
    #[error("Malformed options: {0}")]
    MalformedOptions(String),

    /// A record exceeded the configured column cap
    #[error("Record at row {row} has {found} columns, limit is {limit}")]
    ColumnCountExceeded {
        limit: usize,
        found: usize,
        row: usize,
    },

    /// A cell value did not parse as its declared column type
    #[error("Column '{column}': expected {expected}, got '{value}'")]
    TypeMismatch {
        column: String,
        expected: ColumnType,
        value: String,
    },
}

impl ReadError {
    /// Create a malformed-options error with a message
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        ReadError::MalformedOptions(msg.into())
    }
}
