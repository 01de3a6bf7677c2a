//! # rowset-csv
//!
//! CSV read configuration for rowset.
//!
//! [`CsvReadOptions`] extends the shared [`rowset_core::ReadOptions`] with
//! the CSV-specific surface: separator, quote, line-ending override,
//! explicit column types, column cap, and comment prefix. The snapshot is
//! immutable and is what a CSV reading engine queries for every decision
//! about how to interpret its source.

mod options;

pub use options::{CsvReadOptions, CsvReadOptionsBuilder, LineEnding, DEFAULT_MAX_COLUMNS};
