//! JSON ingestion
//!
//! Accepts an array of flat JSON objects. Scalars map straight onto table
//! values; nested arrays or objects are rejected rather than silently
//! flattened. The columns list is the first-seen key order across rows.

use tablite_core::{Row, Table, Value};
use tracing::info;

use crate::error::{IngestError, Result};

/// Parses a JSON document into a table.
pub fn read_json(input: &str) -> Result<(Table, Vec<String>)> {
    let parsed: serde_json::Value = serde_json::from_str(input)?;
    let items = parsed
        .as_array()
        .ok_or_else(|| IngestError::Shape("expected a JSON array of row objects".to_string()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut table = Table::with_capacity(items.len());

    for item in items {
        let object = item
            .as_object()
            .ok_or_else(|| IngestError::Shape("every row must be a JSON object".to_string()))?;

        let mut row = Row::new();
        for (key, value) in object {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            row.insert(key.clone(), convert(key, value)?);
        }
        table.push(row);
    }

    info!(rows = table.len(), columns = columns.len(), "ingested JSON");
    Ok((table, columns))
}

fn convert(key: &str, value: &serde_json::Value) -> Result<Value> {
    match value {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(*b)),
        serde_json::Value::Number(n) => Ok(Value::Number(n.as_f64().unwrap_or(f64::NAN))),
        serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(IngestError::Shape(
            format!("field '{}' holds a nested value", key),
        )),
    }
}
