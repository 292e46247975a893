//! Frame construction errors
//!
//! These are the only fatal conditions in the crate: input that cannot be
//! shaped into a readable table. Per-cell coercion failures are never errors.

use thiserror::Error;

/// Result type for frame operations
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised while building a `Frame`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("column '{column}' has {length} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        length: usize,
        expected: usize,
    },

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("column name must not be empty")]
    EmptyColumnName,

    #[error("row {row} is not a JSON object (found {found})")]
    RowNotObject { row: usize, found: &'static str },

    #[error("unsupported nested value in column '{column}' at row {row}")]
    UnsupportedValue { column: String, row: usize },
}
