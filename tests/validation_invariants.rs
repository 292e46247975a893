//! Validation Invariant Tests
//!
//! Properties the validator must uphold for every frame and schema:
//! - Completeness: accepted + rejected counts equal the input row count,
//!   and the two index sets are disjoint and exhaustive
//! - Determinism: the same inputs validate the same way every time
//! - Cast idempotence: casting an already-canonical column is a no-op
//! - Nullability monotonicity: flipping nullable to false never grows the
//!   accepted set
//! - Order independence: permuting distinct-column rules does not change
//!   which rows are accepted

use rowcheck::frame::{Frame, Value};
use rowcheck::schema::{RowValidator, Schema};
use std::collections::HashSet;

// =============================================================================
// Helper Functions
// =============================================================================

fn column(values: &[Option<&str>]) -> Vec<Value> {
    values
        .iter()
        .map(|v| v.map(Value::from).unwrap_or(Value::Null))
        .collect()
}

fn mixed_frame() -> Frame {
    Frame::from_columns(vec![
        (
            "s".into(),
            column(&[Some("ab"), Some("a"), None, Some("abcd"), Some("xy")]),
        ),
        (
            "i".into(),
            column(&[Some("1"), Some("9"), Some("2"), None, Some("bad")]),
        ),
        (
            "d".into(),
            column(&[Some("1.2"), Some("12.34"), None, Some("9.99"), Some("1")]),
        ),
    ])
    .unwrap()
}

fn mixed_schema() -> Schema {
    Schema::new()
        .with_string_column("s", false, Some(2), Some(3), None)
        .unwrap()
        .with_integer_column("i", true, Some(1), Some(5))
        .unwrap()
        .with_decimal_column("d", 3, 2, true)
        .unwrap()
}

// =============================================================================
// Completeness
// =============================================================================

/// Accepted and rejected partitions cover every input row exactly once.
#[test]
fn test_partition_is_complete_and_disjoint() {
    let frame = mixed_frame();
    let result = RowValidator::validate(&frame, &mixed_schema());

    assert_eq!(
        result.accepted_count + result.rejected_count,
        frame.row_count()
    );
    assert_eq!(result.accepted_rows.row_count(), result.accepted_count);
    assert_eq!(result.rejected_rows.row_count(), result.rejected_count);

    let accepted: HashSet<usize> = result.accepted_index.iter().copied().collect();
    let rejected: HashSet<usize> = result.rejected_index.iter().copied().collect();
    assert!(accepted.is_disjoint(&rejected));

    let all: HashSet<usize> = accepted.union(&rejected).copied().collect();
    let expected: HashSet<usize> = (0..frame.row_count()).collect();
    assert_eq!(all, expected);
}

/// Completeness holds for the degenerate inputs too.
#[test]
fn test_partition_complete_on_empty_inputs() {
    let result = RowValidator::validate(&Frame::new(), &mixed_schema());
    assert_eq!(result.total_rows(), 0);

    let frame = mixed_frame();
    let result = RowValidator::validate(&frame, &Schema::new());
    assert_eq!(result.accepted_count, frame.row_count());
    assert_eq!(result.rejected_count, 0);
}

// =============================================================================
// Determinism
// =============================================================================

/// The same frame and schema validate identically every time.
#[test]
fn test_validation_is_deterministic() {
    let frame = mixed_frame();
    let schema = mixed_schema();

    let first = RowValidator::validate(&frame, &schema);
    for _ in 0..100 {
        let again = RowValidator::validate(&frame, &schema);
        assert_eq!(again.accepted_index, first.accepted_index);
        assert_eq!(again.accepted_rows, first.accepted_rows);
        assert_eq!(again.rejected_rows, first.rejected_rows);
    }
}

/// Validation does not mutate its inputs.
#[test]
fn test_input_frame_untouched() {
    let frame = mixed_frame();
    let snapshot = frame.clone();
    let _ = RowValidator::validate(&frame, &mixed_schema());
    assert_eq!(frame, snapshot);
}

// =============================================================================
// Cast Idempotence
// =============================================================================

/// Re-validating the accepted output accepts every row and changes nothing:
/// canonical columns cast to themselves.
#[test]
fn test_cast_is_idempotent_through_validate() {
    let frame = mixed_frame();
    let schema = mixed_schema();

    let first = RowValidator::validate(&frame, &schema);
    let second = RowValidator::validate(&first.accepted_rows, &schema);

    assert!(second.is_fully_accepted());
    assert_eq!(second.accepted_rows, first.accepted_rows);
}

// =============================================================================
// Nullability Monotonicity
// =============================================================================

/// A nullable rule accepts a null wherever it accepts a non-null value, and
/// tightening nullable to false can only shrink the accepted set.
#[test]
fn test_non_nullable_only_shrinks_accepted_set() {
    let frame = Frame::from_columns(vec![(
        "i".into(),
        column(&[Some("1"), None, Some("3"), Some("bad"), None]),
    )])
    .unwrap();

    let relaxed = Schema::new()
        .with_integer_column("i", true, None, None)
        .unwrap();
    let strict = Schema::new()
        .with_integer_column("i", false, None, None)
        .unwrap();

    let relaxed_accepted: HashSet<usize> = RowValidator::validate(&frame, &relaxed)
        .accepted_index
        .into_iter()
        .collect();
    let strict_accepted: HashSet<usize> = RowValidator::validate(&frame, &strict)
        .accepted_index
        .into_iter()
        .collect();

    assert!(strict_accepted.is_subset(&relaxed_accepted));
    assert!(relaxed_accepted.contains(&1));
    assert!(!strict_accepted.contains(&1));
}

// =============================================================================
// Order Independence
// =============================================================================

/// Permuting distinct-column rules changes the accepted column order but not
/// which rows are accepted.
#[test]
fn test_rule_order_does_not_change_acceptance() {
    let frame = mixed_frame();

    let forward = mixed_schema();
    let reversed = Schema::new()
        .with_decimal_column("d", 3, 2, true)
        .unwrap()
        .with_integer_column("i", true, Some(1), Some(5))
        .unwrap()
        .with_string_column("s", false, Some(2), Some(3), None)
        .unwrap();

    let a = RowValidator::validate(&frame, &forward);
    let b = RowValidator::validate(&frame, &reversed);

    assert_eq!(a.accepted_index, b.accepted_index);
    assert_eq!(a.rejected_index, b.rejected_index);
    assert_eq!(
        a.accepted_rows.column_names().collect::<Vec<_>>(),
        vec!["s", "i", "d"]
    );
    assert_eq!(
        b.accepted_rows.column_names().collect::<Vec<_>>(),
        vec!["d", "i", "s"]
    );
}
