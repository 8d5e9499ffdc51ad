//! Column type inference
//!
//! Classifies a column as numeric or categorical by sampling the first few
//! rows. Sampling is part of the observable contract: a column whose numeric
//! values only appear after the sample window is still categorical.

use crate::table::Row;

/// Number of leading rows examined when classifying a column.
pub const SAMPLE_ROWS: usize = 10;

/// How a column is treated by aggregation and plotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// At least one sampled value parses as a finite number
    Numeric,
    /// No sampled value parses as a number
    Categorical,
}

impl ColumnKind {
    /// Returns true for [`ColumnKind::Numeric`].
    pub fn is_numeric(self) -> bool {
        self == ColumnKind::Numeric
    }
}

/// Classifies `column` over the first [`SAMPLE_ROWS`] rows of the table.
///
/// Deterministic: the same table always yields the same classification.
/// A column absent from every sampled row is categorical.
pub fn classify(rows: &[Row], column: &str) -> ColumnKind {
    let numeric = rows
        .iter()
        .take(SAMPLE_ROWS)
        .filter_map(|row| row.get(column))
        .any(|value| value.as_number().is_some());

    if numeric {
        ColumnKind::Numeric
    } else {
        ColumnKind::Categorical
    }
}
