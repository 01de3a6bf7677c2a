//! # rowset-core
//!
//! Shared read-configuration model for rowset tabular readers.
//!
//! This crate provides the types every format-specific reader builds on:
//! - [`ReadOptions`] and [`ReadOptionsBuilder`] - the options common to all
//!   tabular formats (source, table name, header flag, sampling, locale,
//!   date/time formats, missing-value indicator)
//! - [`Source`] - the file / byte-stream / in-memory-text origin of a read
//! - [`ColumnType`] - the tag vocabulary for explicit column typing
//! - [`ReadError`] - the error kinds engines report read failures with
//!
//! ## Example
//!
//! ```rust
//! use rowset_core::ReadOptionsBuilder;
//!
//! let options = ReadOptionsBuilder::from_file("data/cities.csv")
//!     .with_sample(false)
//!     .with_missing_value_indicator("N/A")
//!     .build();
//!
//! assert_eq!(options.table_name(), "cities.csv");
//! ```

pub mod column_type;
pub mod error;
pub mod locale;
pub mod options;

// Re-exports for convenience
pub use column_type::ColumnType;
pub use error::{ReadError, ReadResult};
pub use locale::{parse_locale, system_locale};
pub use options::{ReadOptions, ReadOptionsBuilder, Source};

// The locale type carried by read options
pub use chrono::Locale;
