//! # rowset
//!
//! The read-configuration model for rowset tabular readers.
//!
//! Rowset models everything a reading engine must know to turn a CSV
//! source into an in-memory table: where the records come from, how fields
//! are delimited, which locale and date formats govern parsing, and how
//! far type detection may go. It does not parse bytes, infer types, or
//! perform I/O; it hands the engine one immutable, validated snapshot.
//!
//! ## Example
//!
//! ```rust
//! use rowset::prelude::*;
//!
//! let options = CsvReadOptions::builder("data/cities.csv")
//!     .with_separator(b';')
//!     .with_header(true)
//!     .with_missing_value_indicator("N/A")
//!     .with_column_types(vec![ColumnType::String, ColumnType::Double])
//!     .build();
//!
//! assert_eq!(options.table_name(), "cities.csv");
//! assert!(!options.infers_types());
//! ```

pub mod prelude;

// Re-export core types
pub use rowset_core::{
    parse_locale, system_locale, ColumnType, Locale, ReadError, ReadOptions, ReadOptionsBuilder,
    ReadResult, Source,
};

// Re-export CSV types
pub use rowset_csv::{CsvReadOptions, CsvReadOptionsBuilder, LineEnding, DEFAULT_MAX_COLUMNS};
