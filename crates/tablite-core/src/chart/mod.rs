/// Chart data module
///
/// Turns a table into chart-ready series for the supported plot kinds.
/// Series and point types
#[allow(missing_docs)]
pub mod series;
/// Chart aggregation
#[allow(missing_docs)]
pub mod aggregate;

// Re-export main types
pub use aggregate::{aggregate, MAX_HISTOGRAM_BINS};
pub use series::{
    BoxSummary, CategoryPoint, ChartKind, ChartSeries, HistogramBin, PieSlice, ScatterPoint,
};
