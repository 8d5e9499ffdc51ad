//! In-memory table model
//!
//! A `Table` is an ordered sequence of rows; each `Row` maps column names to
//! loosely typed scalar values. The intended column set and its order are
//! carried separately as an explicit columns list, so a row is free to omit
//! or null any field.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Label used when a grouping value is missing or null.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A loosely typed scalar cell value.
///
/// Data arrives from CSV/JSON ingestion, so every engine operation parses or
/// pattern-matches instead of assuming a static type. Serializes untagged:
/// a row round-trips as a plain JSON object of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A numeric value
    Number(f64),
    /// A text value
    Text(String),
    /// A boolean value
    Boolean(bool),
    /// An explicit null
    Null,
}

impl Value {
    /// Attempts to read this value as a finite number.
    ///
    /// Numbers must be finite; text must be non-empty and parse fully as a
    /// finite float. Booleans and nulls never count as numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Text(s) if !s.is_empty() => s.parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// Returns true if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A single record: column name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literals in tests and demos.
    pub fn with<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Inserts or replaces a field.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) {
        self.fields.insert(name.into(), value);
    }

    /// Looks up a field by column name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Reads a field as a finite number, if it parses as one.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_number)
    }

    /// Stringified value of a column for grouping purposes.
    ///
    /// Missing and null fields both collapse to [`UNKNOWN_LABEL`].
    pub fn label(&self, name: &str) -> String {
        match self.get(name) {
            None | Some(Value::Null) => UNKNOWN_LABEL.to_string(),
            Some(value) => value.to_string(),
        }
    }

    /// Number of fields present in this row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the row carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// An in-memory table: an ordered sequence of rows.
///
/// Column order is not derivable from the rows themselves; callers carry an
/// explicit ordered columns list alongside.
pub type Table = Vec<Row>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_number_variants() {
        assert_eq!(Value::Number(3.5).as_number(), Some(3.5));
        assert_eq!(Value::Text("42".to_string()).as_number(), Some(42.0));
        assert_eq!(Value::Text("4.25".to_string()).as_number(), Some(4.25));
        assert_eq!(Value::Text("".to_string()).as_number(), None);
        assert_eq!(Value::Text("12abc".to_string()).as_number(), None);
        assert_eq!(Value::Boolean(true).as_number(), None);
        assert_eq!(Value::Null.as_number(), None);
    }

    #[test]
    fn test_as_number_rejects_non_finite() {
        assert_eq!(Value::Number(f64::NAN).as_number(), None);
        assert_eq!(Value::Number(f64::INFINITY).as_number(), None);
        assert_eq!(Value::Text("inf".to_string()).as_number(), None);
        assert_eq!(Value::Text("NaN".to_string()).as_number(), None);
    }

    #[test]
    fn test_label_falls_back_to_unknown() {
        let row = Row::new().with("region", "east").with("gap", Value::Null);
        assert_eq!(row.label("region"), "east");
        assert_eq!(row.label("gap"), UNKNOWN_LABEL);
        assert_eq!(row.label("absent"), UNKNOWN_LABEL);
    }

    #[test]
    fn test_label_stringifies_numbers() {
        let row = Row::new().with("n", 1.0).with("m", 2.5);
        assert_eq!(row.label("n"), "1");
        assert_eq!(row.label("m"), "2.5");
    }

    #[test]
    fn test_row_serializes_as_plain_object() {
        let row = Row::new().with("name", "Ada").with("age", 36.0);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["age"], 36.0);
    }
}
