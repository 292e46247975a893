//! Column-oriented table
//!
//! Shape invariants (uniform column length, unique non-empty names) are
//! enforced once at construction, which keeps everything downstream
//! infallible.

use serde_json::Value as JsonValue;

use super::errors::{FrameError, FrameResult};
use super::value::Value;

/// An in-memory table of named columns with uniform length
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    columns: Vec<(String, Vec<Value>)>,
    row_count: usize,
}

impl Frame {
    /// Creates an empty frame with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from ordered `(name, values)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `FrameError` if a column name is empty or duplicated, or if
    /// column lengths disagree.
    pub fn from_columns(columns: Vec<(String, Vec<Value>)>) -> FrameResult<Self> {
        let row_count = columns.first().map(|(_, v)| v.len()).unwrap_or(0);

        for (i, (name, values)) in columns.iter().enumerate() {
            if name.is_empty() {
                return Err(FrameError::EmptyColumnName);
            }
            if columns[..i].iter().any(|(other, _)| other == name) {
                return Err(FrameError::DuplicateColumn(name.clone()));
            }
            if values.len() != row_count {
                return Err(FrameError::RaggedColumn {
                    column: name.clone(),
                    length: values.len(),
                    expected: row_count,
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Builds a frame from an array of JSON objects, one object per row.
    ///
    /// The column set is the union of keys in first-appearance order; keys
    /// absent from a row become `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns `FrameError::RowNotObject` for non-object rows and
    /// `FrameError::UnsupportedValue` for nested arrays or objects.
    pub fn from_json_rows(rows: &[JsonValue]) -> FrameResult<Self> {
        let mut names: Vec<String> = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let obj = row.as_object().ok_or(FrameError::RowNotObject {
                row: i,
                found: json_type_name(row),
            })?;
            for key in obj.keys() {
                if !names.iter().any(|n| n == key) {
                    names.push(key.clone());
                }
            }
        }

        let mut columns: Vec<(String, Vec<Value>)> = names
            .into_iter()
            .map(|name| (name, Vec::with_capacity(rows.len())))
            .collect();

        for (i, row) in rows.iter().enumerate() {
            let obj = row.as_object().ok_or(FrameError::RowNotObject {
                row: i,
                found: json_type_name(row),
            })?;
            for (name, values) in columns.iter_mut() {
                let cell = match obj.get(name) {
                    None | Some(JsonValue::Null) => Value::Null,
                    Some(JsonValue::Bool(b)) => Value::Bool(*b),
                    Some(JsonValue::Number(n)) => match n.as_i64() {
                        Some(v) => Value::Int(v),
                        None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
                    },
                    Some(JsonValue::String(s)) => Value::Str(s.clone()),
                    Some(JsonValue::Array(_)) | Some(JsonValue::Object(_)) => {
                        return Err(FrameError::UnsupportedValue {
                            column: name.clone(),
                            row: i,
                        })
                    }
                };
                values.push(cell);
            }
        }

        Ok(Self {
            row_count: rows.len(),
            columns,
        })
    }

    /// Internal constructor for columns already known to satisfy the shape
    /// invariants
    pub(crate) fn from_parts(columns: Vec<(String, Vec<Value>)>, row_count: usize) -> Self {
        debug_assert!(columns.iter().all(|(_, v)| v.len() == row_count));
        Self { columns, row_count }
    }

    /// Returns the number of rows
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the frame has no rows
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Returns the named column, if present
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Returns column names in declaration order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the ordered columns
    pub fn columns(&self) -> &[(String, Vec<Value>)] {
        &self.columns
    }

    /// Returns the cell at (column, row), if both exist
    pub fn value(&self, name: &str, row: usize) -> Option<&Value> {
        self.column(name).and_then(|c| c.get(row))
    }

    /// Projects the given rows into a new frame, preserving column order.
    ///
    /// Indices must be in range; this is only called with indices derived
    /// from this frame's own row count.
    pub fn take_rows(&self, indices: &[usize]) -> Frame {
        debug_assert!(indices.iter().all(|&i| i < self.row_count));
        let columns = self
            .columns
            .iter()
            .map(|(name, values)| {
                let taken: Vec<Value> = indices.iter().map(|&i| values[i].clone()).collect();
                (name.clone(), taken)
            })
            .collect();
        Frame::from_parts(columns, indices.len())
    }
}

/// Returns the JSON type name for error messages
fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
