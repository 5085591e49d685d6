//! Tests for layout file loading.

use std::fs;
use std::path::PathBuf;

use d2fw_ingest::{LayoutLoadError, load_layout};
use d2fw_model::{FieldSchema, OutputFormat, ResourceError, SchemaError};
use tempfile::TempDir;

fn write_layout(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("layout.csv");
    fs::write(&path, contents).expect("write layout");
    path
}

#[test]
fn loads_fields_in_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_layout(
        &dir,
        "Field,Length,Output format,Skip field\n\
         Start time,4,Time,False\n\
         Comment,20,Text,\n\
         Filler,0,Text,True\n\
         Visit date,8,Date (DD/MM/YYYY to YYYYMMDD),False\n",
    );
    let layout = load_layout(&path).expect("load layout");
    assert_eq!(
        layout.iter().copied().collect::<Vec<_>>(),
        vec![
            FieldSchema::new(OutputFormat::Time, 4, false),
            FieldSchema::new(OutputFormat::Text, 20, false),
            FieldSchema::new(OutputFormat::Text, 0, true),
            FieldSchema::new(OutputFormat::DateDdMmYyyy, 8, false),
        ]
    );
}

#[test]
fn header_order_does_not_matter() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_layout(
        &dir,
        "Skip field,Output format,Length\n,Decimal,9\nTrue,Integer,3\n",
    );
    let layout = load_layout(&path).expect("load layout");
    assert_eq!(layout.len(), 2);
    assert_eq!(
        layout.get(0),
        Some(&FieldSchema::new(OutputFormat::Decimal, 9, false))
    );
    assert_eq!(
        layout.get(1),
        Some(&FieldSchema::new(OutputFormat::Integer, 3, true))
    );
}

#[test]
fn missing_columns_are_listed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_layout(&dir, "Length,Format\n4,Time\n");
    let err = load_layout(&path).unwrap_err();
    assert!(matches!(
        err,
        LayoutLoadError::Schema(SchemaError::MissingColumns { ref missing })
            if missing == &["Output format".to_string(), "Skip field".to_string()]
    ));
}

#[test]
fn invalid_rows_report_their_line() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_layout(
        &dir,
        "Length,Output format,Skip field\n4,Time,\nfour,Text,\n",
    );
    let err = load_layout(&path).unwrap_err();
    assert!(matches!(
        err,
        LayoutLoadError::Schema(SchemaError::InvalidLength { row: 3, .. })
    ));

    let path = write_layout(&dir, "Length,Output format,Skip field\n4,Float,\n");
    assert!(matches!(
        load_layout(&path).unwrap_err(),
        LayoutLoadError::Schema(SchemaError::UnsupportedFormat { row: 2, .. })
    ));

    let path = write_layout(&dir, "Length,Output format,Skip field\n4,Text,Yes\n");
    assert!(matches!(
        load_layout(&path).unwrap_err(),
        LayoutLoadError::Schema(SchemaError::InvalidSkipFlag { row: 2, .. })
    ));
}

#[test]
fn layout_without_fields_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_layout(&dir, "Length,Output format,Skip field\n,,\n");
    assert!(matches!(
        load_layout(&path).unwrap_err(),
        LayoutLoadError::Schema(SchemaError::EmptyLayout)
    ));
}

#[test]
fn missing_layout_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_layout(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(
        err,
        LayoutLoadError::Resource(ResourceError::ConfigNotFound { .. })
    ));
}
