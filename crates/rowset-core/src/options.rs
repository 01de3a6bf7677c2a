//! Shared read options for tabular-format readers

use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Locale;

use crate::locale::system_locale;

/// Where the records of a table come from.
///
/// Exactly one source backs a read operation. Files and in-memory text can
/// be read more than once (e.g. a sampling pass followed by a full pass);
/// a byte stream cannot be reopened, so engines may buffer it fully.
pub enum Source {
    /// A file on disk, opened by the reading engine
    File(PathBuf),
    /// An arbitrary byte stream, consumed in a single pass
    Bytes(Box<dyn Read + Send>),
    /// Already-decoded text held in memory
    Text(String),
}

impl Source {
    /// Get the file path if this source is file-backed
    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::File(path) => Some(path),
            _ => None,
        }
    }

    /// Check whether the engine can make a second pass over this source
    pub fn supports_rescan(&self) -> bool {
        !matches!(self, Source::Bytes(_))
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => f.debug_tuple("File").field(path).finish(),
            Source::Bytes(_) => f.debug_tuple("Bytes").field(&"<stream>").finish(),
            Source::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
        }
    }
}

/// Options shared by every tabular-format reader.
///
/// Immutable once built: the snapshot exposes read accessors only and can
/// be inspected concurrently by downstream operations without locking.
#[derive(Debug)]
pub struct ReadOptions {
    source: Source,
    table_name: String,
    header: bool,
    sample: bool,
    date_format: Option<String>,
    time_format: Option<String>,
    date_time_format: Option<String>,
    locale: Locale,
    missing_value_indicator: Option<String>,
    minimize_column_sizes: bool,
}

impl ReadOptions {
    /// The source records are read from
    pub fn source(&self) -> &Source {
        &self.source
    }

    /// Consume the snapshot and take ownership of the source
    ///
    /// Engines call this when acquiring a byte stream, which must be read
    /// by value; configuration should be queried before this point.
    pub fn into_source(self) -> Source {
        self.source
    }

    /// Name of the resulting table
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Whether the first record is a column-name row
    pub fn header(&self) -> bool {
        self.header
    }

    /// Whether type detection may sample a subset of records
    pub fn sample(&self) -> bool {
        self.sample
    }

    /// Format pattern for date columns, if overridden
    pub fn date_format(&self) -> Option<&str> {
        self.date_format.as_deref()
    }

    /// Format pattern for time columns, if overridden
    pub fn time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }

    /// Format pattern for date-time columns, if overridden
    pub fn date_time_format(&self) -> Option<&str> {
        self.date_time_format.as_deref()
    }

    /// Locale used when parsing locale-sensitive literals
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Cell content treated as a missing value when matched verbatim
    pub fn missing_value_indicator(&self) -> Option<&str> {
        self.missing_value_indicator.as_deref()
    }

    /// Whether column storage should be shrunk after reading
    pub fn minimize_column_sizes(&self) -> bool {
        self.minimize_column_sizes
    }
}

/// Accumulates [`ReadOptions`] prior to finalization.
///
/// Setters may be called in any order, any number of times; the last write
/// per field wins. `build` consumes the builder, so a finished snapshot can
/// never be mutated through it afterwards. Builders are not meant to be
/// shared across threads while options are still being accumulated.
#[derive(Debug)]
pub struct ReadOptionsBuilder {
    source: Source,
    table_name: String,
    header: bool,
    sample: bool,
    date_format: Option<String>,
    time_format: Option<String>,
    date_time_format: Option<String>,
    locale: Locale,
    missing_value_indicator: Option<String>,
    minimize_column_sizes: bool,
}

impl ReadOptionsBuilder {
    /// Start options for reading a file.
    ///
    /// The table name defaults to the file name; override it with
    /// `with_table_name`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let table_name = derive_table_name(&path);
        Self::new(Source::File(path), table_name)
    }

    /// Start options for reading an arbitrary byte stream.
    ///
    /// The stream cannot be reopened for a second pass, so the engine may
    /// buffer it fully. Supplying explicit column types lets the engine
    /// skip the type-detection pass and avoid reading ahead.
    pub fn from_bytes(reader: impl Read + Send + 'static, table_name: impl Into<String>) -> Self {
        Self::new(Source::Bytes(Box::new(reader)), table_name.into())
    }

    /// Start options for reading already-decoded text held in memory.
    pub fn from_text(text: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self::new(Source::Text(text.into()), table_name.into())
    }

    fn new(source: Source, table_name: String) -> Self {
        Self {
            source,
            table_name,
            header: true,
            sample: true,
            date_format: None,
            time_format: None,
            date_time_format: None,
            locale: system_locale(),
            missing_value_indicator: None,
            minimize_column_sizes: false,
        }
    }

    /// Set the name of the resulting table
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    /// Set whether the first record is a column-name row
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set whether type detection may sample a subset of records
    pub fn with_sample(mut self, sample: bool) -> Self {
        self.sample = sample;
        self
    }

    /// Set the format pattern for date columns
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Set the format pattern for time columns
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.time_format = Some(format.into());
        self
    }

    /// Set the format pattern for date-time columns
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> Self {
        self.date_time_format = Some(format.into());
        self
    }

    /// Set the locale used when parsing locale-sensitive literals
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the cell content treated as a missing value
    pub fn with_missing_value_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.missing_value_indicator = Some(indicator.into());
        self
    }

    /// Set whether column storage should be shrunk after reading
    pub fn with_minimize_column_sizes(mut self, minimize: bool) -> Self {
        self.minimize_column_sizes = minimize;
        self
    }

    /// Finalize into an immutable snapshot.
    ///
    /// Consumes the builder; building a second snapshot requires a second
    /// builder.
    pub fn build(self) -> ReadOptions {
        ReadOptions {
            source: self.source,
            table_name: self.table_name,
            header: self.header,
            sample: self.sample,
            date_format: self.date_format,
            time_format: self.time_format,
            date_time_format: self.date_time_format,
            locale: self.locale,
            missing_value_indicator: self.missing_value_indicator,
            minimize_column_sizes: self.minimize_column_sizes,
        }
    }
}

fn derive_table_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => {
            log::warn!("no file name in '{}', table name left empty", path.display());
            String::new()
        }
    }
}
