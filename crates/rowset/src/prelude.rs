//! Prelude module - common imports for rowset users
//!
//! ```rust
//! use rowset::prelude::*;
//! ```

pub use crate::{
    // Column typing
    ColumnType,
    // CSV options
    CsvReadOptions,
    CsvReadOptionsBuilder,
    LineEnding,
    // Locale
    Locale,
    // Error types
    ReadError,
    // Shared options
    ReadOptions,
    ReadOptionsBuilder,
    ReadResult,
    Source,
};
