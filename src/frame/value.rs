//! Scalar cell values
//!
//! `Value` is the closed set of cell types a frame can hold. `Null` is the
//! explicit missing-value marker. Coercion helpers return `Option` and never
//! panic; an uncoercible value is simply `None`.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single cell in a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Missing-value marker
    Null,
    /// Boolean
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// UTF-8 string
    Str(String),
    /// Exact decimal
    Decimal(Decimal),
    /// Timestamp without timezone
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Returns true for the missing-value marker
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name for error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Decimal(_) => "decimal",
            Value::Timestamp(_) => "timestamp",
        }
    }

    /// Attempts to coerce this value to a 64-bit integer.
    ///
    /// Accepts integers, integral floats, strings holding an integer (or an
    /// integral float), and integral decimals. Null never coerces.
    pub fn coerce_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Float(f) => float_to_i64(*f),
            Value::Str(s) => {
                let trimmed = s.trim();
                trimmed
                    .parse::<i64>()
                    .ok()
                    .or_else(|| trimmed.parse::<f64>().ok().and_then(float_to_i64))
            }
            Value::Decimal(d) => {
                if d.is_integer() {
                    d.to_i64()
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Attempts to coerce this value to an exact decimal.
    ///
    /// Floats go through their shortest decimal representation, so the result
    /// carries the digits a human would read, not the binary expansion.
    pub fn coerce_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            Value::Int(n) => Some(Decimal::from(*n)),
            Value::Float(f) => {
                if f.is_finite() {
                    Decimal::from_str(&f.to_string()).ok()
                } else {
                    None
                }
            }
            Value::Str(s) => {
                let trimmed = s.trim();
                Decimal::from_str(trimmed)
                    .ok()
                    .or_else(|| Decimal::from_scientific(trimmed).ok())
            }
            _ => None,
        }
    }

    /// Attempts to coerce this value to a timestamp using a strftime-style
    /// format mask.
    ///
    /// A value that is already a timestamp passes through unchanged, so
    /// casting a canonical column is a no-op. Date-only masks parse to
    /// midnight.
    pub fn coerce_timestamp(&self, format_mask: &str) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(t) => Some(*t),
            Value::Str(s) => parse_timestamp(s.trim(), format_mask),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

/// Converts a float to i64 only when the conversion is exact
fn float_to_i64(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Parses a string with a strftime mask, trying datetime first and then
/// date-at-midnight for date-only masks
fn parse_timestamp(s: &str, format_mask: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, format_mask)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, format_mask)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
