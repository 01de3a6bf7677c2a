//! CSV read options

use std::io::Read;
use std::path::PathBuf;

use rowset_core::options::{ReadOptions, ReadOptionsBuilder, Source};
use rowset_core::{ColumnType, Locale};

/// Default cap on the number of columns tolerated in any one record
pub const DEFAULT_MAX_COLUMNS: usize = 10_000;

/// Line terminator override for CSV sources.
///
/// When no override is set, the engine auto-detects among `\n`, `\r\n`
/// and `\r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

/// Options for reading CSV data into a table.
///
/// Built once through [`CsvReadOptionsBuilder`] and handed to the reading
/// engine by reference. The snapshot exposes no mutators; concurrent
/// readers can query it without locking.
#[derive(Debug)]
pub struct CsvReadOptions {
    common: ReadOptions,
    column_types: Option<Vec<ColumnType>>,
    separator: u8,
    quote: u8,
    line_ending: Option<LineEnding>,
    max_number_of_columns: usize,
    comment_prefix: Option<u8>,
}

impl CsvReadOptions {
    /// Start options for reading a CSV file.
    ///
    /// The table name defaults to the file name; override it with
    /// `with_table_name`.
    pub fn builder(path: impl Into<PathBuf>) -> CsvReadOptionsBuilder {
        CsvReadOptionsBuilder::from_common(ReadOptionsBuilder::from_file(path))
    }

    /// Start options for reading CSV data from an arbitrary byte stream.
    ///
    /// The stream cannot be reopened for a second pass, so the engine may
    /// buffer it fully. If the data is large, read from a file instead, or
    /// supply explicit column types so the engine can skip the
    /// type-detection pass.
    pub fn builder_from_bytes(
        reader: impl Read + Send + 'static,
        table_name: impl Into<String>,
    ) -> CsvReadOptionsBuilder {
        CsvReadOptionsBuilder::from_common(ReadOptionsBuilder::from_bytes(reader, table_name))
    }

    /// Start options for reading CSV data from already-decoded text.
    pub fn builder_from_text(
        text: impl Into<String>,
        table_name: impl Into<String>,
    ) -> CsvReadOptionsBuilder {
        CsvReadOptionsBuilder::from_common(ReadOptionsBuilder::from_text(text, table_name))
    }

    // === Shared accessors ===

    /// The source records are read from
    pub fn source(&self) -> &Source {
        self.common.source()
    }

    /// Consume the snapshot and take ownership of the source
    pub fn into_source(self) -> Source {
        self.common.into_source()
    }

    /// Name of the resulting table
    pub fn table_name(&self) -> &str {
        self.common.table_name()
    }

    /// Whether the first record is a column-name row
    pub fn header(&self) -> bool {
        self.common.header()
    }

    /// Whether type detection may sample a subset of records
    pub fn sample(&self) -> bool {
        self.common.sample()
    }

    /// Format pattern for date columns, if overridden
    pub fn date_format(&self) -> Option<&str> {
        self.common.date_format()
    }

    /// Format pattern for time columns, if overridden
    pub fn time_format(&self) -> Option<&str> {
        self.common.time_format()
    }

    /// Format pattern for date-time columns, if overridden
    pub fn date_time_format(&self) -> Option<&str> {
        self.common.date_time_format()
    }

    /// Locale used when parsing locale-sensitive literals
    pub fn locale(&self) -> Locale {
        self.common.locale()
    }

    /// Cell content treated as a missing value when matched verbatim
    pub fn missing_value_indicator(&self) -> Option<&str> {
        self.common.missing_value_indicator()
    }

    /// Whether column storage should be shrunk after reading
    pub fn minimize_column_sizes(&self) -> bool {
        self.common.minimize_column_sizes()
    }

    // === CSV-specific accessors ===

    /// Explicit column types, in column order.
    ///
    /// Trusted as given; the engine checks the length against the actual
    /// input at parse time, not here.
    pub fn column_types(&self) -> Option<&[ColumnType]> {
        self.column_types.as_deref()
    }

    /// Field separator
    pub fn separator(&self) -> u8 {
        self.separator
    }

    /// Quote character
    pub fn quote(&self) -> u8 {
        self.quote
    }

    /// Explicit line terminator, if overridden
    pub fn line_ending(&self) -> Option<LineEnding> {
        self.line_ending
    }

    /// Cap on the number of columns tolerated in any one record.
    ///
    /// The engine enforces this per record, failing fast instead of
    /// allocating unbounded columns from malformed input.
    pub fn max_number_of_columns(&self) -> usize {
        self.max_number_of_columns
    }

    /// Prefix marking records to discard before any field splitting
    pub fn comment_prefix(&self) -> Option<u8> {
        self.comment_prefix
    }

    /// Whether the engine should run column type detection.
    ///
    /// False as soon as explicit column types are supplied; the engine
    /// must then skip inference and sampling entirely.
    pub fn infers_types(&self) -> bool {
        self.column_types.is_none()
    }

    /// Configure a `csv::ReaderBuilder` from this snapshot.
    ///
    /// Pure configuration, no byte is read here. The column cap, missing
    /// values and type resolution stay with the engine; an absent line
    /// ending leaves the csv crate's own terminator handling in place,
    /// which accepts `\n`, `\r\n` and `\r`.
    pub fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(self.separator)
            .quote(self.quote)
            .has_headers(self.header())
            .comment(self.comment_prefix);
        if let Some(ending) = self.line_ending {
            let terminator = match ending {
                LineEnding::LF => csv::Terminator::Any(b'\n'),
                LineEnding::CRLF => csv::Terminator::CRLF,
                LineEnding::CR => csv::Terminator::Any(b'\r'),
            };
            builder.terminator(terminator);
        }
        builder
    }
}

/// Accumulates [`CsvReadOptions`] prior to finalization.
///
/// Wraps the shared [`ReadOptionsBuilder`] so chains can mix shared and
/// CSV-specific setters freely, in any order; the last write per field
/// wins. `build` consumes the builder.
#[derive(Debug)]
pub struct CsvReadOptionsBuilder {
    common: ReadOptionsBuilder,
    column_types: Option<Vec<ColumnType>>,
    separator: u8,
    quote: u8,
    line_ending: Option<LineEnding>,
    max_number_of_columns: usize,
    comment_prefix: Option<u8>,
}

impl CsvReadOptionsBuilder {
    fn from_common(common: ReadOptionsBuilder) -> Self {
        Self {
            common,
            column_types: None,
            separator: b',',
            quote: b'"',
            line_ending: None,
            max_number_of_columns: DEFAULT_MAX_COLUMNS,
            comment_prefix: None,
        }
    }

    // === CSV-specific setters ===

    /// Set the field separator
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    /// Set an explicit line terminator instead of auto-detection
    pub fn with_line_ending(mut self, ending: LineEnding) -> Self {
        self.line_ending = Some(ending);
        self
    }

    /// Supply explicit column types, one per column in order.
    ///
    /// Disables type detection and sampling entirely. The list is trusted
    /// as given; its length is checked against the actual input at parse
    /// time, not here.
    pub fn with_column_types(mut self, types: impl Into<Vec<ColumnType>>) -> Self {
        self.column_types = Some(types.into());
        self
    }

    /// Cap the number of columns tolerated in any one record.
    ///
    /// Must be positive. The value is stored as given, never clamped; the
    /// engine enforces it per record at read time.
    pub fn with_max_number_of_columns(mut self, max: usize) -> Self {
        debug_assert!(max > 0, "column cap must be positive");
        self.max_number_of_columns = max;
        self
    }

    /// Discard records whose first byte matches this prefix
    pub fn with_comment_prefix(mut self, prefix: u8) -> Self {
        self.comment_prefix = Some(prefix);
        self
    }

    // === Shared setters, delegated to the embedded builder ===

    /// Set the name of the resulting table
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.common = self.common.with_table_name(table_name);
        self
    }

    /// Set whether the first record is a column-name row
    pub fn with_header(mut self, header: bool) -> Self {
        self.common = self.common.with_header(header);
        self
    }

    /// Set whether type detection may sample a subset of records
    pub fn with_sample(mut self, sample: bool) -> Self {
        self.common = self.common.with_sample(sample);
        self
    }

    /// Set the format pattern for date columns
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.common = self.common.with_date_format(format);
        self
    }

    /// Set the format pattern for time columns
    pub fn with_time_format(mut self, format: impl Into<String>) -> Self {
        self.common = self.common.with_time_format(format);
        self
    }

    /// Set the format pattern for date-time columns
    pub fn with_date_time_format(mut self, format: impl Into<String>) -> Self {
        self.common = self.common.with_date_time_format(format);
        self
    }

    /// Set the locale used when parsing locale-sensitive literals
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.common = self.common.with_locale(locale);
        self
    }

    /// Set the cell content treated as a missing value
    pub fn with_missing_value_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.common = self.common.with_missing_value_indicator(indicator);
        self
    }

    /// Set whether column storage should be shrunk after reading
    pub fn with_minimize_column_sizes(mut self, minimize: bool) -> Self {
        self.common = self.common.with_minimize_column_sizes(minimize);
        self
    }

    /// Finalize into an immutable snapshot.
    ///
    /// Every accumulated field moves into the snapshot exactly once;
    /// nothing is recomputed or re-defaulted. Consumes the builder, so a
    /// second snapshot requires a second builder.
    pub fn build(self) -> CsvReadOptions {
        CsvReadOptions {
            common: self.common.build(),
            column_types: self.column_types,
            separator: self.separator,
            quote: self.quote,
            line_ending: self.line_ending,
            max_number_of_columns: self.max_number_of_columns,
            comment_prefix: self.comment_prefix,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let options = CsvReadOptions::builder_from_text("a,b\n1,2", "inline").build();
        assert_eq!(options.separator(), b',');
        assert_eq!(options.quote(), b'"');
        assert_eq!(options.max_number_of_columns(), 10_000);
        assert!(options.header());
        assert!(options.sample());
        assert!(!options.minimize_column_sizes());
        assert_eq!(options.line_ending(), None);
        assert_eq!(options.column_types(), None);
        assert_eq!(options.comment_prefix(), None);
        assert_eq!(options.date_format(), None);
        assert_eq!(options.time_format(), None);
        assert_eq!(options.date_time_format(), None);
        assert_eq!(options.missing_value_indicator(), None);
    }

    #[test]
    fn test_file_builder_derives_table_name() {
        let options = CsvReadOptions::builder("data/bush.csv").build();
        assert_eq!(options.table_name(), "bush.csv");
    }

    #[test]
    fn test_last_write_wins_on_separator() {
        let options = CsvReadOptions::builder_from_text("x", "t")
            .with_separator(b';')
            .with_separator(b',')
            .build();
        assert_eq!(options.separator(), b',');
    }

    #[test]
    fn test_mixed_chain_preserves_all_settings() {
        let options = CsvReadOptions::builder("data/bush.csv")
            .with_header(false)
            .with_separator(b'|')
            .with_sample(true)
            .build();
        assert!(!options.header());
        assert_eq!(options.separator(), b'|');
        assert!(options.sample());
        // untouched fields keep their defaults
        assert_eq!(options.quote(), b'"');
        assert_eq!(options.max_number_of_columns(), 10_000);
        assert_eq!(options.table_name(), "bush.csv");
    }

    #[test]
    fn test_explicit_column_types_disable_inference() {
        let options = CsvReadOptions::builder_from_text("x", "t")
            .with_column_types(vec![
                ColumnType::Integer,
                ColumnType::String,
                ColumnType::Date,
            ])
            .build();
        // accepted without any check against the actual input shape
        assert_eq!(options.column_types().unwrap().len(), 3);
        assert!(!options.infers_types());

        let plain = CsvReadOptions::builder_from_text("x", "t").build();
        assert!(plain.infers_types());
    }

    #[test]
    fn test_line_ending_override() {
        let options = CsvReadOptions::builder_from_text("x", "t")
            .with_line_ending(LineEnding::CRLF)
            .build();
        assert_eq!(options.line_ending(), Some(LineEnding::CRLF));
    }

    #[test]
    fn test_comment_prefix() {
        let options = CsvReadOptions::builder_from_text("x", "t")
            .with_comment_prefix(b'#')
            .build();
        assert_eq!(options.comment_prefix(), Some(b'#'));
    }
}
