//! Per-column rules
//!
//! A `ColumnRule` binds one column name to a type, a nullability policy and
//! the type's constraint payload. The variant set is closed: adding a new
//! column kind forces both `is_valid` and `cast` to handle it.
//!
//! Validity and casting never raise. An uncoercible cell is invalid in the
//! mask and becomes `Value::Null` in the cast output.

use regex::Regex;
use rust_decimal::Decimal;

use super::errors::{SchemaError, SchemaResult};
use crate::frame::Value;

/// A named, typed constraint plus canonicalization rule for one column
#[derive(Debug, Clone)]
pub enum ColumnRule {
    /// Nullability check only, no type constraint
    Generic { name: String, nullable: bool },
    /// UTF-8 string with optional length bounds and anchored pattern.
    ///
    /// Length and pattern constraints are enforced only when
    /// `nullable == false`; a nullable string column accepts any string.
    /// Callers that need a constrained-but-nullable column must declare it
    /// non-nullable.
    String {
        name: String,
        nullable: bool,
        min_length: Option<usize>,
        max_length: Option<usize>,
        pattern: Option<Regex>,
    },
    /// 64-bit integer with optional inclusive bounds
    Integer {
        name: String,
        nullable: bool,
        min_value: Option<i64>,
        max_value: Option<i64>,
    },
    /// Exact decimal bounded by total significant digits and fractional digits
    Decimal {
        name: String,
        nullable: bool,
        precision: u32,
        scale: u32,
    },
    /// Timestamp parsed with a strftime-style format mask
    Timestamp {
        name: String,
        nullable: bool,
        format_mask: String,
    },
}

impl ColumnRule {
    /// Creates a nullability-only rule
    pub fn generic(name: impl Into<String>, nullable: bool) -> SchemaResult<Self> {
        Ok(ColumnRule::Generic {
            name: non_empty(name)?,
            nullable,
        })
    }

    /// Creates a string rule.
    ///
    /// The pattern is anchored: a cell matches only if the whole string
    /// matches.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty name, reversed length bounds or an invalid
    /// pattern.
    pub fn string(
        name: impl Into<String>,
        nullable: bool,
        min_length: Option<usize>,
        max_length: Option<usize>,
        pattern: Option<&str>,
    ) -> SchemaResult<Self> {
        let name = non_empty(name)?;
        if let (Some(min), Some(max)) = (min_length, max_length) {
            if min > max {
                return Err(SchemaError::LengthBoundsReversed { column: name, min, max });
            }
        }
        let pattern = match pattern {
            Some(p) => Some(Regex::new(&format!("^(?:{})$", p)).map_err(|e| {
                SchemaError::InvalidPattern {
                    column: name.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => None,
        };
        Ok(ColumnRule::String {
            name,
            nullable,
            min_length,
            max_length,
            pattern,
        })
    }

    /// Creates an integer rule with optional inclusive bounds.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty name or reversed bounds.
    pub fn integer(
        name: impl Into<String>,
        nullable: bool,
        min_value: Option<i64>,
        max_value: Option<i64>,
    ) -> SchemaResult<Self> {
        let name = non_empty(name)?;
        if let (Some(min), Some(max)) = (min_value, max_value) {
            if min > max {
                return Err(SchemaError::ValueBoundsReversed { column: name, min, max });
            }
        }
        Ok(ColumnRule::Integer {
            name,
            nullable,
            min_value,
            max_value,
        })
    }

    /// Creates a decimal rule.
    ///
    /// `precision` is the maximum count of significant digits, `scale` the
    /// maximum count of fractional digits.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty name, zero precision or `scale > precision`.
    pub fn decimal(
        name: impl Into<String>,
        precision: u32,
        scale: u32,
        nullable: bool,
    ) -> SchemaResult<Self> {
        let name = non_empty(name)?;
        if precision == 0 {
            return Err(SchemaError::ZeroPrecision { column: name });
        }
        if scale > precision {
            return Err(SchemaError::ScaleExceedsPrecision {
                column: name,
                precision,
                scale,
            });
        }
        Ok(ColumnRule::Decimal {
            name,
            nullable,
            precision,
            scale,
        })
    }

    /// Creates a timestamp rule.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty name or an empty format mask.
    pub fn timestamp(
        name: impl Into<String>,
        format_mask: impl Into<String>,
        nullable: bool,
    ) -> SchemaResult<Self> {
        let name = non_empty(name)?;
        let format_mask = format_mask.into();
        if format_mask.is_empty() {
            return Err(SchemaError::EmptyFormatMask { column: name });
        }
        Ok(ColumnRule::Timestamp {
            name,
            nullable,
            format_mask,
        })
    }

    /// Returns the target column name
    pub fn name(&self) -> &str {
        match self {
            ColumnRule::Generic { name, .. }
            | ColumnRule::String { name, .. }
            | ColumnRule::Integer { name, .. }
            | ColumnRule::Decimal { name, .. }
            | ColumnRule::Timestamp { name, .. } => name,
        }
    }

    /// Returns the nullability policy
    pub fn nullable(&self) -> bool {
        match self {
            ColumnRule::Generic { nullable, .. }
            | ColumnRule::String { nullable, .. }
            | ColumnRule::Integer { nullable, .. }
            | ColumnRule::Decimal { nullable, .. }
            | ColumnRule::Timestamp { nullable, .. } => *nullable,
        }
    }

    /// Returns the rule kind name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnRule::Generic { .. } => "generic",
            ColumnRule::String { .. } => "string",
            ColumnRule::Integer { .. } => "integer",
            ColumnRule::Decimal { .. } => "decimal",
            ColumnRule::Timestamp { .. } => "timestamp",
        }
    }

    /// Computes the per-element validity vector for a column
    pub fn is_valid(&self, column: &[Value]) -> Vec<bool> {
        column.iter().map(|v| self.element_is_valid(v)).collect()
    }

    fn element_is_valid(&self, value: &Value) -> bool {
        match self {
            ColumnRule::Generic { nullable, .. } => *nullable || !value.is_null(),
            ColumnRule::String {
                nullable,
                min_length,
                max_length,
                pattern,
                ..
            } => {
                if value.is_null() {
                    return *nullable;
                }
                let Value::Str(s) = value else {
                    return false;
                };
                if *nullable {
                    // constraints only fire on non-nullable string columns
                    return true;
                }
                let length = s.chars().count();
                if min_length.map_or(false, |min| length < min) {
                    return false;
                }
                if max_length.map_or(false, |max| length > max) {
                    return false;
                }
                if let Some(re) = pattern {
                    if !re.is_match(s) {
                        return false;
                    }
                }
                true
            }
            ColumnRule::Integer {
                nullable,
                min_value,
                max_value,
                ..
            } => {
                if value.is_null() {
                    return *nullable;
                }
                match value.coerce_int() {
                    Some(n) => {
                        min_value.map_or(true, |min| n >= min)
                            && max_value.map_or(true, |max| n <= max)
                    }
                    None => false,
                }
            }
            ColumnRule::Decimal {
                nullable,
                precision,
                scale,
                ..
            } => {
                if value.is_null() {
                    return *nullable;
                }
                match value.coerce_decimal() {
                    Some(d) => {
                        significant_digits(&d) <= *precision as usize && d.scale() <= *scale
                    }
                    None => false,
                }
            }
            ColumnRule::Timestamp {
                nullable,
                format_mask,
                ..
            } => {
                if value.is_null() {
                    return *nullable;
                }
                value.coerce_timestamp(format_mask).is_some()
            }
        }
    }

    /// Casts a column to its canonical representation.
    ///
    /// Null stays null; an uncoercible non-null cell degrades to null rather
    /// than interrupting the batch. Generic and string columns are already
    /// canonical and pass through unchanged.
    pub fn cast(&self, column: &[Value]) -> Vec<Value> {
        match self {
            ColumnRule::Generic { .. } | ColumnRule::String { .. } => column.to_vec(),
            ColumnRule::Integer { .. } => column
                .iter()
                .map(|v| v.coerce_int().map(Value::Int).unwrap_or(Value::Null))
                .collect(),
            ColumnRule::Decimal { .. } => column
                .iter()
                .map(|v| v.coerce_decimal().map(Value::Decimal).unwrap_or(Value::Null))
                .collect(),
            ColumnRule::Timestamp { format_mask, .. } => column
                .iter()
                .map(|v| {
                    v.coerce_timestamp(format_mask)
                        .map(Value::Timestamp)
                        .unwrap_or(Value::Null)
                })
                .collect(),
        }
    }
}

/// Counts the significant digits of a decimal (mantissa digit count, sign
/// excluded; zero counts as one digit)
fn significant_digits(d: &Decimal) -> usize {
    let mut mantissa = d.mantissa().unsigned_abs();
    if mantissa == 0 {
        return 1;
    }
    let mut digits = 0;
    while mantissa > 0 {
        digits += 1;
        mantissa /= 10;
    }
    digits
}

fn non_empty(name: impl Into<String>) -> SchemaResult<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(SchemaError::EmptyColumnName);
    }
    Ok(name)
}
