//! # Tablite Core
//!
//! Core table model, query engine, and chart aggregation for Tablite.
//!
//! Everything here is a pure, synchronous function over an immutable
//! in-memory table: no I/O, no shared state, no cross-call memory.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chart;
pub mod error;
pub mod infer;
pub mod query;
pub mod recommend;
pub mod stats;
pub mod table;

pub use error::{Error, Result};
pub use table::{Row, Table, Value, UNKNOWN_LABEL};
