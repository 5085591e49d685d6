//! Tests for delimited row reading.

use std::fs;
use std::path::PathBuf;

use d2fw_ingest::{RowSourceOptions, read_rows};
use d2fw_model::ResourceError;
use tempfile::TempDir;

fn temp_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_raw_cells_without_trimming() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "input.csv", "01:42, padded ,x\n2247,\"quoted, text\"\n");
    let rows = read_rows(&path, &RowSourceOptions::default()).expect("read rows");
    assert_eq!(
        rows,
        vec![
            vec!["01:42", " padded ", "x"],
            vec!["2247", "quoted, text"],
        ]
    );
}

#[test]
fn honours_delimiter_and_quote() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "input.txt", "a;'b;c';d\n");
    let options = RowSourceOptions::new().with_delimiter(b';').with_quote(b'\'');
    let rows = read_rows(&path, &options).expect("read rows");
    assert_eq!(rows, vec![vec!["a", "b;c", "d"]]);
}

#[test]
fn drops_header_and_footer_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "input.csv",
        "Time,Text\nsecond header\n0142,one\n2247,two\nTOTAL,2\n",
    );
    let options = RowSourceOptions::new()
        .with_skip_header(2)
        .with_skip_footer(1);
    let rows = read_rows(&path, &options).expect("read rows");
    assert_eq!(rows, vec![vec!["0142", "one"], vec!["2247", "two"]]);
}

#[test]
fn skipping_more_than_available_yields_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "input.csv", "a\nb\nc\n");
    let options = RowSourceOptions::new()
        .with_skip_header(2)
        .with_skip_footer(2);
    assert!(read_rows(&path, &options).expect("read rows").is_empty());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_rows(&dir.path().join("absent.csv"), &RowSourceOptions::default())
        .unwrap_err();
    assert!(matches!(err, ResourceError::InputNotFound { .. }));
}

#[test]
fn invalid_utf8_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.csv");
    fs::write(&path, b"caf\xe9,1\n").expect("write file");
    let err = read_rows(&path, &RowSourceOptions::default()).unwrap_err();
    assert!(matches!(err, ResourceError::Read { .. }));
}
