/// Query intent types
///
/// The restricted query language has no grammar; a query resolves to one of
/// four intents, each carrying the little structure the executor needs.
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a query asks the engine to do.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIntent {
    /// Full pass-through of the input table
    Select,
    /// Whole-table summary of every numeric column
    Aggregate,
    /// Partition rows by one column and summarize each group
    GroupBy {
        /// The grouping column, already checked against the columns list
        column: String,
    },
    /// Keep only rows matching a single equality clause
    Filter {
        /// Raw clause text, e.g. `status = 'active'`
        clause: String,
    },
}

impl QueryIntent {
    /// The result-kind tag for this intent.
    pub fn kind(&self) -> QueryKind {
        match self {
            QueryIntent::Select => QueryKind::Select,
            QueryIntent::Aggregate => QueryKind::Aggregate,
            QueryIntent::GroupBy { .. } => QueryKind::GroupBy,
            QueryIntent::Filter { .. } => QueryKind::Filter,
        }
    }
}

/// Result-kind tag reported alongside query output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    Select,
    Aggregate,
    GroupBy,
    Filter,
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKind::Select => write!(f, "SELECT"),
            QueryKind::Aggregate => write!(f, "AGGREGATE"),
            QueryKind::GroupBy => write!(f, "GROUP_BY"),
            QueryKind::Filter => write!(f, "FILTER"),
        }
    }
}
