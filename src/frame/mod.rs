//! Tabular data model for rowcheck
//!
//! A `Frame` is a column-oriented table: ordered named columns of uniform
//! length, with `Value::Null` as the explicit missing-value marker.
//!
//! # Design Principles
//!
//! - Malformed input is rejected at construction, never mid-validation
//! - Columns are uniform in length and uniquely named
//! - Cell coercion never panics; failure is an `Option::None`

mod errors;
#[allow(clippy::module_inception)]
mod frame;
mod value;

pub use errors::{FrameError, FrameResult};
pub use frame::Frame;
pub use value::Value;
