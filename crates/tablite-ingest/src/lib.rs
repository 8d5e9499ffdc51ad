//! # Tablite Ingest
//!
//! CSV and JSON ingestion for Tablite: thin I/O plumbing that turns flat
//! data into an in-memory [`Table`](tablite_core::Table) plus its ordered
//! columns list. The engine itself never touches files or parsers; this
//! crate is the only place raw bytes are interpreted.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of Tablite.**
//!
//! Users should depend on the main [`tablite`](https://crates.io/crates/tablite) crate
//! instead, which provides the stable public API. This crate's API may change
//! without notice between minor versions.
//!
//! ```toml
//! # In your Cargo.toml - use the main crate, not this one:
//! [dependencies]
//! tablite = "0.3"
//! ```

pub mod csv;
pub mod error;
pub mod json;

pub use csv::{read_csv, read_csv_path, read_csv_str};
pub use error::{IngestError, Result};
pub use json::read_json;
