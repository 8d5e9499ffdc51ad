//! CSV ingestion
//!
//! Reads delimited text into a table. The header row becomes the columns
//! list; fields are loosely typed on the way in: empty fields become null,
//! fields that parse fully as finite numbers become numbers, everything
//! else stays text.

use ::csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tablite_core::{Row, Table, Value};
use tracing::info;

use crate::error::Result;

/// Reads CSV from any reader.
///
/// Ragged records are tolerated: missing trailing fields are simply absent
/// from the row, extra fields beyond the header are dropped.
pub fn read_csv<R: Read>(reader: R) -> Result<(Table, Vec<String>)> {
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut table = Table::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (i, field) in record.iter().enumerate() {
            if let Some(name) = columns.get(i) {
                row.insert(name.clone(), parse_field(field));
            }
        }
        table.push(row);
    }

    info!(rows = table.len(), columns = columns.len(), "ingested CSV");
    Ok((table, columns))
}

/// Reads CSV from a string slice.
pub fn read_csv_str(input: &str) -> Result<(Table, Vec<String>)> {
    read_csv(input.as_bytes())
}

/// Reads CSV from a file path.
pub fn read_csv_path<P: AsRef<Path>>(path: P) -> Result<(Table, Vec<String>)> {
    read_csv(File::open(path)?)
}

fn parse_field(field: &str) -> Value {
    if field.is_empty() {
        return Value::Null;
    }
    match field.parse::<f64>() {
        Ok(n) if n.is_finite() => Value::Number(n),
        _ => Value::Text(field.to_string()),
    }
}
