//! Tests for default values and source construction across the options model

use std::io::Cursor;

use pretty_assertions::assert_eq;
use rowset::prelude::*;

fn assert_all_defaults(options: &CsvReadOptions) {
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
    assert!(options.infers_types());
}

/// Test a bare file builder yields the documented default table
#[test]
fn test_defaults_from_file() {
    let options = CsvReadOptions::builder("data.csv").build();
    assert_all_defaults(&options);
    assert_eq!(options.table_name(), "data.csv");
}

/// Test a bare byte-stream builder yields the documented default table
#[test]
fn test_defaults_from_bytes() {
    let options = CsvReadOptions::builder_from_bytes(Cursor::new(b"a,b".to_vec()), "stream").build();
    assert_all_defaults(&options);
    assert_eq!(options.table_name(), "stream");
}

/// Test a bare text builder yields the documented default table
#[test]
fn test_defaults_from_text() {
    let options = CsvReadOptions::builder_from_text("a,b", "inline").build();
    assert_all_defaults(&options);
    assert_eq!(options.table_name(), "inline");
}

/// Test each constructor populates exactly its own source kind
#[test]
fn test_exactly_one_source_kind() {
    let file = CsvReadOptions::builder("data.csv").build();
    assert!(matches!(file.source(), Source::File(_)));
    assert!(file.source().supports_rescan());

    let bytes = CsvReadOptions::builder_from_bytes(Cursor::new(Vec::new()), "t").build();
    assert!(matches!(bytes.source(), Source::Bytes(_)));
    assert!(!bytes.source().supports_rescan());

    let text = CsvReadOptions::builder_from_text("", "t").build();
    assert!(matches!(text.source(), Source::Text(_)));
    assert!(text.source().supports_rescan());
}

/// Test the derived table name is the final path component, until overridden
#[test]
fn test_table_name_derivation_and_override() {
    let derived = CsvReadOptions::builder("some/dir/bush.csv").build();
    assert_eq!(derived.table_name(), "bush.csv");

    let renamed = CsvReadOptions::builder("some/dir/bush.csv")
        .with_table_name("approval")
        .build();
    assert_eq!(renamed.table_name(), "approval");
}

/// Test snapshots can cross threads to the reading engine
#[test]
fn test_snapshot_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<CsvReadOptions>();
    assert_send::<ReadOptions>();
}
