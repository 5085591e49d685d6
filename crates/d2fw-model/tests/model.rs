//! Tests for d2fw-model types.

use d2fw_model::{
    ConversionResult, DateBounds, FieldSchema, Layout, OutputFormat, SchemaError,
};

fn layout_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("Time", "4", "False"),
        ("Text", "20", "False"),
        ("Text", "0", "True"),
        ("Date (DD/MM/YYYY to YYYYMMDD)", "8", ""),
    ]
}

#[test]
fn layout_from_raw_rows() {
    let fields: Vec<FieldSchema> = layout_rows()
        .into_iter()
        .enumerate()
        .map(|(idx, (format, length, skip))| FieldSchema::parse(format, length, skip, idx + 2))
        .collect::<Result<_, _>>()
        .expect("valid layout");
    let layout = Layout::new(fields).expect("non-empty layout");

    assert_eq!(layout.len(), 4);
    assert_eq!(layout.record_width(), 32);
    let formats: Vec<OutputFormat> = layout.iter().map(|field| field.format).collect();
    assert_eq!(
        formats,
        vec![
            OutputFormat::Time,
            OutputFormat::Text,
            OutputFormat::Text,
            OutputFormat::DateDdMmYyyy,
        ]
    );
    assert!(layout.get(2).is_some_and(|field| field.skip));
}

#[test]
fn first_bad_row_is_reported() {
    let rows = vec![("Text", "4", ""), ("Text", "x", ""), ("Nope", "4", "")];
    let err = rows
        .into_iter()
        .enumerate()
        .map(|(idx, (format, length, skip))| FieldSchema::parse(format, length, skip, idx + 2))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::InvalidLength {
            row: 3,
            value: "x".to_string()
        }
    );
}

#[test]
fn default_result_has_sentinel_dates() {
    let result = ConversionResult::default();
    assert!(result.lines.is_empty());
    assert_eq!(result.oldest_date(), "99999999");
    assert_eq!(result.most_recent_date(), "00000000");
    assert_eq!(result.dates, DateBounds::new());
}
