/// Series and point types for the supported chart kinds.
use serde::{Deserialize, Serialize};
use std::fmt;

/// The supported plot kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
    Pie,
    Histogram,
    Box,
}

impl ChartKind {
    /// Whether this chart kind reads the y axis. Histograms bin x alone.
    pub fn uses_y_axis(self) -> bool {
        !matches!(self, ChartKind::Histogram)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Line => write!(f, "line"),
            ChartKind::Scatter => write!(f, "scatter"),
            ChartKind::Pie => write!(f, "pie"),
            ChartKind::Histogram => write!(f, "histogram"),
            ChartKind::Box => write!(f, "box"),
        }
    }
}

/// One category on a bar or line chart: mean of y per distinct x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub x: String,
    pub y: f64,
    pub count: usize,
}

/// One point on a scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// One slice of a pie chart: sum of y per distinct label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
}

/// One histogram bin: x is the bin center, y the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub x: f64,
    pub y: usize,
}

/// Five-number summary for one box-plot group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub x: String,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Chart-ready data, variant by chart kind.
///
/// Serializes untagged: consumers receive a bare array of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartSeries {
    /// Bar and line charts
    Category(Vec<CategoryPoint>),
    /// Scatter plots
    Scatter(Vec<ScatterPoint>),
    /// Pie charts
    Pie(Vec<PieSlice>),
    /// Histograms
    Histogram(Vec<HistogramBin>),
    /// Box plots
    Box(Vec<BoxSummary>),
}

impl ChartSeries {
    /// Number of points or groups in the series.
    pub fn len(&self) -> usize {
        match self {
            ChartSeries::Category(points) => points.len(),
            ChartSeries::Scatter(points) => points.len(),
            ChartSeries::Pie(slices) => slices.len(),
            ChartSeries::Histogram(bins) => bins.len(),
            ChartSeries::Box(groups) => groups.len(),
        }
    }

    /// Returns true if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
