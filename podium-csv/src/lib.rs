//! podium-csv
//!
//! Ingestion connector that reads a leaderboard CSV export into raw rows and
//! feeds them through the `podium-core` normalizer. This is the only crate in
//! the workspace that reads input from the filesystem.
#![warn(missing_docs)]

/// CSV reading and record loading.
pub mod reader;

pub use reader::{load_records, records_from_reader, rows_from_reader};
