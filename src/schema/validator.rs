//! Row-level schema validator
//!
//! Validation semantics:
//! - Every rule is evaluated against its named column; an absent column is
//!   treated as an all-null column of the frame's row count
//! - Per-rule validity vectors are AND-combined into one per-row mask
//! - Rows partition into accepted and rejected sets; original row ordinals
//!   are preserved
//! - Accepted columns governed by a rule are cast to canonical types;
//!   rejected rows keep their original values untouched
//!
//! The validator is a pure function of its inputs: no shared state, no I/O,
//! deterministic output. It never fails; uncoercible cells surface in the
//! mask, not as errors.

use tracing::{debug, trace};

use super::result::ValidationResult;
use super::schema::Schema;
use crate::frame::{Frame, Value};

/// Evaluates a schema against a frame and partitions its rows
pub struct RowValidator;

impl RowValidator {
    /// Validates a frame against a schema.
    ///
    /// Column ordering in the accepted output is an observable contract:
    /// rule-governed columns come first, in rule-declaration order (the first
    /// rule for a name fixes its position; when several rules target the same
    /// name, the last one's cast wins), followed by pass-through columns in
    /// their original relative order, uncast. The rejected output keeps all
    /// original columns, order and values.
    pub fn validate(frame: &Frame, schema: &Schema) -> ValidationResult {
        let row_count = frame.row_count();
        let null_column = vec![Value::Null; row_count];

        let mut mask = vec![true; row_count];
        for rule in schema.rules() {
            let column = frame.column(rule.name()).unwrap_or(&null_column);
            let validity = rule.is_valid(column);
            trace!(
                column = rule.name(),
                kind = rule.kind(),
                valid = validity.iter().filter(|&&v| v).count(),
                "rule evaluated"
            );
            for (keep, ok) in mask.iter_mut().zip(validity) {
                *keep &= ok;
            }
        }

        let accepted_index: Vec<usize> = (0..row_count).filter(|&i| mask[i]).collect();
        let rejected_index: Vec<usize> = (0..row_count).filter(|&i| !mask[i]).collect();

        // Rule-governed columns first, in declaration order. A rule over an
        // absent column contributes a synthesized null column so nullable
        // rules still materialize in the output.
        let mut accepted_columns: Vec<(String, Vec<Value>)> = Vec::new();
        for rule in schema.rules() {
            let source = frame.column(rule.name()).unwrap_or(&null_column);
            let taken: Vec<Value> = accepted_index.iter().map(|&i| source[i].clone()).collect();
            let casted = rule.cast(&taken);
            match accepted_columns.iter_mut().find(|(n, _)| n == rule.name()) {
                Some((_, existing)) => *existing = casted,
                None => accepted_columns.push((rule.name().to_string(), casted)),
            }
        }

        // Pass-through columns keep their original relative order and types
        for (name, values) in frame.columns() {
            if !schema.covers(name) {
                let taken: Vec<Value> =
                    accepted_index.iter().map(|&i| values[i].clone()).collect();
                accepted_columns.push((name.clone(), taken));
            }
        }

        let accepted_rows = Frame::from_parts(accepted_columns, accepted_index.len());
        let rejected_rows = frame.take_rows(&rejected_index);

        debug!(
            total = row_count,
            accepted = accepted_index.len(),
            rejected = rejected_index.len(),
            rules = schema.len(),
            "row validation complete"
        );

        ValidationResult {
            accepted_count: accepted_rows.row_count(),
            accepted_rows,
            accepted_index,
            rejected_count: rejected_rows.row_count(),
            rejected_rows,
            rejected_index,
        }
    }
}
