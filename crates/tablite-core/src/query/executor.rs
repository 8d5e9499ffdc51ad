/// Query executor
///
/// Applies a resolved [`QueryIntent`] to an in-memory table. Execution is
/// all-or-nothing: a failure never comes with partial rows.
use super::intent::{QueryIntent, QueryKind};
use crate::error::Result;
use crate::infer::classify;
use crate::table::{Row, Value};
use std::collections::HashMap;
use tracing::debug;

/// Result of executing one query: derived rows, their column order, and the
/// result-kind tag.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Result rows
    pub rows: Vec<Row>,
    /// Column order of the result rows
    pub columns: Vec<String>,
    /// What kind of query produced this result
    pub kind: QueryKind,
}

/// Executes `intent` against the table.
pub fn execute(rows: &[Row], columns: &[String], intent: &QueryIntent) -> Result<QueryResult> {
    debug!(kind = %intent.kind(), rows = rows.len(), "executing query");

    let result = match intent {
        QueryIntent::Select => QueryResult {
            rows: rows.to_vec(),
            columns: columns.to_vec(),
            kind: QueryKind::Select,
        },
        QueryIntent::Aggregate => aggregate_table(rows, columns),
        QueryIntent::GroupBy { column } => group_by(rows, columns, column),
        QueryIntent::Filter { clause } => filter(rows, columns, clause),
    };

    Ok(result)
}

/// Whole-table summary: one row with count/sum/avg/min/max per numeric
/// column. Columns with no parseable values contribute no fields at all.
fn aggregate_table(rows: &[Row], columns: &[String]) -> QueryResult {
    let mut out = Row::new();
    let mut out_columns = Vec::new();

    for column in columns {
        if !classify(rows, column).is_numeric() {
            continue;
        }
        let values: Vec<f64> = rows.iter().filter_map(|row| row.number(column)).collect();
        if values.is_empty() {
            continue;
        }

        let count = values.len();
        let sum: f64 = values.iter().sum();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        out.insert(format!("count_{}", column), Value::Number(count as f64));
        out.insert(format!("sum_{}", column), Value::Number(sum));
        out.insert(format!("avg_{}", column), Value::Number(sum / count as f64));
        out.insert(format!("min_{}", column), Value::Number(min));
        out.insert(format!("max_{}", column), Value::Number(max));

        for prefix in ["count", "sum", "avg", "min", "max"] {
            out_columns.push(format!("{}_{}", prefix, column));
        }
    }

    QueryResult {
        rows: vec![out],
        columns: out_columns,
        kind: QueryKind::Aggregate,
    }
}

/// Partitions rows by the group column's stringified value and summarizes
/// every numeric column within each group. Groups keep first-seen order;
/// missing and null group values share the "Unknown" bucket.
fn group_by(rows: &[Row], columns: &[String], group_column: &str) -> QueryResult {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (i, row) in rows.iter().enumerate() {
        let key = row.label(group_column);
        match positions.get(&key) {
            Some(&at) => groups[at].1.push(i),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, vec![i]));
            }
        }
    }

    let mut out_rows = Vec::with_capacity(groups.len());
    for (key, members) in &groups {
        let subset: Vec<Row> = members.iter().map(|&i| rows[i].clone()).collect();
        let mut out = Row::new();
        out.insert(group_column, Value::Text(key.clone()));

        for column in columns {
            // Numeric-ness is judged per group, over the group's own rows.
            if !classify(&subset, column).is_numeric() {
                continue;
            }
            let values: Vec<f64> = subset.iter().filter_map(|row| row.number(column)).collect();
            if values.is_empty() {
                continue;
            }
            let count = values.len();
            let sum: f64 = values.iter().sum();
            out.insert(format!("count_{}", column), Value::Number(count as f64));
            out.insert(format!("sum_{}", column), Value::Number(sum));
            out.insert(format!("avg_{}", column), Value::Number(sum / count as f64));
        }

        out_rows.push(out);
    }

    let mut out_columns = vec![group_column.to_string()];
    for column in columns {
        for prefix in ["count", "sum", "avg"] {
            let name = format!("{}_{}", prefix, column);
            if out_rows.iter().any(|row| row.get(&name).is_some()) {
                out_columns.push(name);
            }
        }
    }

    QueryResult {
        rows: out_rows,
        columns: out_columns,
        kind: QueryKind::GroupBy,
    }
}

/// Single-equality filter. A clause without `=` or without a column name
/// passes every row through unfiltered; comparison is always on the
/// stringified value, never numeric.
fn filter(rows: &[Row], columns: &[String], clause: &str) -> QueryResult {
    let kept = match split_equality(clause) {
        Some((column, literal)) => rows
            .iter()
            .filter(|row| match row.get(column) {
                None | Some(Value::Null) => false,
                Some(value) => value.to_string() == literal,
            })
            .cloned()
            .collect(),
        None => rows.to_vec(),
    };

    QueryResult {
        rows: kept,
        columns: columns.to_vec(),
        kind: QueryKind::Filter,
    }
}

/// Splits `clause` at its first `=` into a column name and a quote-stripped
/// literal. Returns `None` when the clause cannot filter anything.
fn split_equality(clause: &str) -> Option<(&str, &str)> {
    let at = clause.find('=')?;
    let column = clause[..at].trim();
    if column.is_empty() {
        return None;
    }
    let literal = strip_quotes(clause[at + 1..].trim());
    Some((column, literal))
}

fn strip_quotes(text: &str) -> &str {
    let quoted = text.len() >= 2
        && ((text.starts_with('\'') && text.ends_with('\''))
            || (text.starts_with('"') && text.ends_with('"')));
    if quoted {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
