//! Schema: an ordered, immutable collection of column rules
//!
//! Builders take `&self` and return a fresh schema with one rule appended
//! (copy-on-append), so a schema value can be shared, reused and extended in
//! several directions without locking.

use super::errors::SchemaResult;
use super::rule::ColumnRule;

/// An ordered collection of column rules.
///
/// Rule order determines the column order of the accepted output, never which
/// rows are accepted: per-column checks are independent and commute.
///
/// Duplicate rules for the same column name are permitted; the validator
/// applies all of them and combines their validity masks conjunctively.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: Vec<ColumnRule>,
}

impl Schema {
    /// Creates an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new schema with the given rule appended; the receiver is
    /// unmodified
    pub fn with_rule(&self, rule: ColumnRule) -> Schema {
        let mut rules = self.rules.clone();
        rules.push(rule);
        Schema { rules }
    }

    /// Returns a new schema with a string rule appended.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed parameters, see [`ColumnRule::string`].
    pub fn with_string_column(
        &self,
        name: &str,
        nullable: bool,
        min_length: Option<usize>,
        max_length: Option<usize>,
        pattern: Option<&str>,
    ) -> SchemaResult<Schema> {
        Ok(self.with_rule(ColumnRule::string(
            name, nullable, min_length, max_length, pattern,
        )?))
    }

    /// Returns a new schema with an integer rule appended.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed parameters, see [`ColumnRule::integer`].
    pub fn with_integer_column(
        &self,
        name: &str,
        nullable: bool,
        min_value: Option<i64>,
        max_value: Option<i64>,
    ) -> SchemaResult<Schema> {
        Ok(self.with_rule(ColumnRule::integer(name, nullable, min_value, max_value)?))
    }

    /// Returns a new schema with a decimal rule appended.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed parameters, see [`ColumnRule::decimal`].
    pub fn with_decimal_column(
        &self,
        name: &str,
        precision: u32,
        scale: u32,
        nullable: bool,
    ) -> SchemaResult<Schema> {
        Ok(self.with_rule(ColumnRule::decimal(name, precision, scale, nullable)?))
    }

    /// Returns a new schema with a timestamp rule appended.
    ///
    /// # Errors
    ///
    /// Fails fast on malformed parameters, see [`ColumnRule::timestamp`].
    pub fn with_timestamp_column(
        &self,
        name: &str,
        format_mask: &str,
        nullable: bool,
    ) -> SchemaResult<Schema> {
        Ok(self.with_rule(ColumnRule::timestamp(name, format_mask, nullable)?))
    }

    /// Returns the rules in declaration order
    pub fn rules(&self) -> &[ColumnRule] {
        &self.rules
    }

    /// Returns true if any rule targets the given column
    pub fn covers(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name() == name)
    }

    /// Returns the number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the schema holds no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
