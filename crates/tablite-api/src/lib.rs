//! # Tablite
//!
//! A lightweight in-memory tabular query and chart-data toolkit.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablite::{ChartKind, Dataset};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let data = "region,amount\neast,10\nwest,20\neast,30\n";
//!     let dataset = Dataset::from_csv_str(data)?;
//!
//!     // Ask a question in the restricted query language
//!     let response = dataset.query("group by region");
//!     assert!(response.success);
//!
//!     // Derive chart-ready data
//!     let chart = dataset.chart(ChartKind::Bar, "region", "amount");
//!     assert!(chart.success);
//!
//!     // Get advisory hints for the chosen chart
//!     for hint in dataset.advise(ChartKind::Pie, "region", "amount") {
//!         println!("{}", hint);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The engine is deliberately permissive: queries it cannot resolve fall
//! back to a full pass-through instead of failing, and responses always
//! come wrapped in a success/failure envelope rather than an error type.

pub mod logging;
mod response;

// Re-export core types
pub use tablite_core::chart::{
    BoxSummary, CategoryPoint, ChartKind, ChartSeries, HistogramBin, PieSlice, ScatterPoint,
};
pub use tablite_core::infer::{classify, ColumnKind, SAMPLE_ROWS};
pub use tablite_core::query::{QueryIntent, QueryKind, QueryResult};
pub use tablite_core::{Error, Result, Row, Table, Value, UNKNOWN_LABEL};

// Ingestion entry points
pub use tablite_ingest::{read_csv, read_csv_path, read_csv_str, read_json, IngestError};

pub use response::{ChartConfig, ChartResponse, QueryResponse};

use tablite_core::query::{execute, parse_intent};
use tablite_core::{chart, recommend};
use tracing::debug;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An in-memory dataset: a table plus its declared column order.
///
/// This is the primary entry point. A `Dataset` is immutable once built;
/// every call derives fresh output and leaves the table untouched, so a
/// dataset can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Dataset {
    table: Table,
    columns: Vec<String>,
}

impl Dataset {
    /// Wraps an already-built table and its columns list.
    pub fn new(table: Table, columns: Vec<String>) -> Self {
        Self { table, columns }
    }

    /// Ingests a CSV file from disk.
    pub fn from_csv_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let (table, columns) =
            read_csv_path(path).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self::new(table, columns))
    }

    /// Ingests CSV text.
    pub fn from_csv_str(input: &str) -> Result<Self> {
        let (table, columns) = read_csv_str(input).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self::new(table, columns))
    }

    /// Ingests a JSON array of row objects.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let (table, columns) = read_json(input).map_err(|e| Error::Parse(e.to_string()))?;
        Ok(Self::new(table, columns))
    }

    /// The declared column order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The underlying rows.
    pub fn rows(&self) -> &Table {
        &self.table
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Runs a free-form query against the dataset.
    ///
    /// The query is resolved to an intent (SELECT / AGGREGATE / GROUP BY /
    /// FILTER) by keyword detection; anything unresolvable degrades to a
    /// full pass-through. The result always arrives in an envelope: on
    /// failure `success` is false and no data fields are populated.
    pub fn query(&self, text: &str) -> QueryResponse {
        let intent = parse_intent(text, &self.columns);
        debug!(query = text, kind = %intent.kind(), "running query");

        match execute(&self.table, &self.columns, &intent) {
            Ok(result) => QueryResponse::completed(result),
            Err(e) => QueryResponse::failed(e.to_string()),
        }
    }

    /// Builds chart-ready series for the given kind and axes.
    ///
    /// Axis columns are validated against the declared columns list before
    /// any processing; histograms only need `x`.
    pub fn chart(&self, kind: ChartKind, x: &str, y: &str) -> ChartResponse {
        if let Err(e) = self.check_column(x) {
            return ChartResponse::failed(e.to_string());
        }
        if kind.uses_y_axis() {
            if let Err(e) = self.check_column(y) {
                return ChartResponse::failed(e.to_string());
            }
        }

        let series = chart::aggregate(&self.table, x, y, kind);
        ChartResponse::completed(
            series,
            ChartConfig {
                kind,
                x: x.to_string(),
                y: y.to_string(),
            },
        )
    }

    /// Advisory hints for the chosen chart kind and axes.
    ///
    /// Advisories are hints, not errors: the list is empty when nothing
    /// applies, and an unknown axis simply triggers no heuristics.
    pub fn advise(&self, kind: ChartKind, x: &str, y: &str) -> Vec<String> {
        recommend::recommend(&self.table, kind, x, y)
    }

    fn check_column(&self, name: &str) -> Result<()> {
        if self.columns.iter().any(|c| c == name) {
            Ok(())
        } else {
            Err(Error::UnknownColumn(name.to_string()))
        }
    }
}
