//! Response envelopes returned at the outer call boundary.
//!
//! Every engine failure is caught and normalized into a `success = false`
//! envelope with a human-readable message; no error crosses this boundary,
//! and a failed response never carries partial data.

use serde::Serialize;
use tablite_core::chart::{ChartKind, ChartSeries};
use tablite_core::query::{QueryKind, QueryResult};
use tablite_core::Row;

/// Outcome of a query call.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    /// Whether the query produced a result
    pub success: bool,
    /// Result rows, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<Row>>,
    /// Column order of the result rows, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// What kind of query ran, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<QueryKind>,
    /// Human-readable message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    pub(crate) fn completed(result: QueryResult) -> Self {
        Self {
            success: true,
            rows: Some(result.rows),
            columns: Some(result.columns),
            query_type: Some(result.kind),
            error: None,
        }
    }

    pub(crate) fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            rows: None,
            columns: None,
            query_type: None,
            error: Some(message.into()),
        }
    }
}

/// Echo of the chart request a series was built for.
#[derive(Debug, Clone, Serialize)]
pub struct ChartConfig {
    /// Chart kind
    pub kind: ChartKind,
    /// x axis column
    pub x: String,
    /// y axis column as requested (ignored by histograms)
    pub y: String,
}

/// Outcome of a chart call.
#[derive(Debug, Clone, Serialize)]
pub struct ChartResponse {
    /// Whether a series was produced
    pub success: bool,
    /// Chart-ready series, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<ChartSeries>,
    /// Echoed chart configuration, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ChartConfig>,
    /// Human-readable message, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChartResponse {
    pub(crate) fn completed(series: ChartSeries, config: ChartConfig) -> Self {
        Self {
            success: true,
            series: Some(series),
            config: Some(config),
            error: None,
        }
    }

    pub(crate) fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            series: None,
            config: None,
            error: Some(message.into()),
        }
    }
}
