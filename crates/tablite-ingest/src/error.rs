//! Error types for ingestion.

use std::fmt;

/// Errors raised while reading flat data into a table.
#[derive(Debug)]
pub enum IngestError {
    /// I/O error
    Io(std::io::Error),

    /// Malformed CSV input
    Csv(csv::Error),

    /// Malformed JSON input
    Json(serde_json::Error),

    /// Input parsed, but does not have the expected row/column shape
    Shape(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Io(e) => write!(f, "I/O error: {}", e),
            IngestError::Csv(e) => write!(f, "CSV error: {}", e),
            IngestError::Json(e) => write!(f, "JSON error: {}", e),
            IngestError::Shape(msg) => write!(f, "Shape error: {}", msg),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Io(e) => Some(e),
            IngestError::Csv(e) => Some(e),
            IngestError::Json(e) => Some(e),
            IngestError::Shape(_) => None,
        }
    }
}

impl From<std::io::Error> for IngestError {
    fn from(err: std::io::Error) -> Self {
        IngestError::Io(err)
    }
}

impl From<csv::Error> for IngestError {
    fn from(err: csv::Error) -> Self {
        IngestError::Csv(err)
    }
}

impl From<serde_json::Error> for IngestError {
    fn from(err: serde_json::Error) -> Self {
        IngestError::Json(err)
    }
}

/// A specialized `Result` type for ingestion.
pub type Result<T> = std::result::Result<T, IngestError>;
