//! rowcheck - a strict, deterministic row-level schema validator for tabular data
//!
//! Phase 0: core validation engine

pub mod frame;
pub mod schema;
pub mod util;
