//! Row-level schema subsystem for rowcheck
//!
//! A schema is an ordered, immutable collection of per-column rules; the
//! validator evaluates every rule against a frame, AND-combines the per-rule
//! validity masks, partitions rows into accepted and rejected sets and casts
//! accepted columns to canonical types.
//!
//! # Design Principles
//!
//! - Malformed rule parameters fail at build time, never during validation
//! - Validation never raises; bad cells surface in the mask
//! - Rejected rows are returned byte-for-byte untouched
//! - Validation is deterministic and side-effect-free

mod errors;
mod result;
mod rule;
#[allow(clippy::module_inception)]
mod schema;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use result::ValidationResult;
pub use rule::ColumnRule;
pub use schema::Schema;
pub use validator::RowValidator;
