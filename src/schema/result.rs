//! Result types for row-level validation

use crate::frame::Frame;

/// Outcome of validating a frame against a schema.
///
/// The accepted and rejected partitions are disjoint and together cover every
/// input row exactly once; `accepted_index` and `rejected_index` hold the
/// original row ordinals in ascending order. The result owns its frames and
/// keeps no reference to the input.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Conforming rows with rule-governed columns cast to canonical types
    pub accepted_rows: Frame,
    /// Number of accepted rows
    pub accepted_count: usize,
    /// Original ordinals of the accepted rows
    pub accepted_index: Vec<usize>,
    /// Non-conforming rows with completely untouched values and types
    pub rejected_rows: Frame,
    /// Number of rejected rows
    pub rejected_count: usize,
    /// Original ordinals of the rejected rows
    pub rejected_index: Vec<usize>,
}

impl ValidationResult {
    /// Returns the total number of input rows
    pub fn total_rows(&self) -> usize {
        self.accepted_count + self.rejected_count
    }

    /// Returns true if no row was rejected
    pub fn is_fully_accepted(&self) -> bool {
        self.rejected_count == 0
    }
}
