//! Error types for Tablite.

use std::fmt;

/// The main error type for Tablite engine operations.
#[derive(Debug)]
pub enum Error {
    /// A requested column is not in the declared columns list
    UnknownColumn(String),

    /// Malformed input data
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColumn(name) => write!(f, "Unknown column: '{}'", name),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// A specialized `Result` type for Tablite operations.
pub type Result<T> = std::result::Result<T, Error>;
