//! Schema configuration errors
//!
//! Every variant is a construction-time failure: a rule with malformed
//! parameters is rejected before it can enter a schema. Validation itself
//! never raises; bad cells surface in the validity mask, not as errors.

use thiserror::Error;

/// Result type for schema building
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors raised while building rules and schemas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("column name must not be empty")]
    EmptyColumnName,

    #[error("invalid pattern for column '{column}': {reason}")]
    InvalidPattern { column: String, reason: String },

    #[error("min_length {min} exceeds max_length {max} for column '{column}'")]
    LengthBoundsReversed {
        column: String,
        min: usize,
        max: usize,
    },

    #[error("min_value {min} exceeds max_value {max} for column '{column}'")]
    ValueBoundsReversed { column: String, min: i64, max: i64 },

    #[error("precision must be positive for column '{column}'")]
    ZeroPrecision { column: String },

    #[error("scale {scale} exceeds precision {precision} for column '{column}'")]
    ScaleExceedsPrecision {
        column: String,
        precision: u32,
        scale: u32,
    },

    #[error("format mask must not be empty for column '{column}'")]
    EmptyFormatMask { column: String },
}
