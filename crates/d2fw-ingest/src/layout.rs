//! Field layout loading from a CSV layout file.
//!
//! The header row must name the columns `Length`, `Output format` and
//! `Skip field`, in any order. Other columns (descriptions, positions) are
//! ignored. Every following non-blank row declares one output field, in
//! output order.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use d2fw_model::{FieldSchema, Layout, ResourceError, SchemaError};
use tracing::{debug, info};

use crate::error::Result;

/// Header of the field length column.
pub const LENGTH_COLUMN: &str = "Length";
/// Header of the output format column.
pub const FORMAT_COLUMN: &str = "Output format";
/// Header of the skip flag column.
pub const SKIP_COLUMN: &str = "Skip field";

/// Positions of the required columns in the layout header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LayoutColumns {
    length: usize,
    format: usize,
    skip: usize,
}

impl LayoutColumns {
    fn locate(headers: &StringRecord) -> std::result::Result<Self, SchemaError> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let find = |wanted: &str| names.iter().position(|name| name == wanted);
        match (find(LENGTH_COLUMN), find(FORMAT_COLUMN), find(SKIP_COLUMN)) {
            (Some(length), Some(format), Some(skip)) => Ok(Self {
                length,
                format,
                skip,
            }),
            (length, format, skip) => {
                let missing = [
                    (length, LENGTH_COLUMN),
                    (format, FORMAT_COLUMN),
                    (skip, SKIP_COLUMN),
                ]
                .into_iter()
                .filter(|(position, _)| position.is_none())
                .map(|(_, name)| name);
                Err(SchemaError::missing_columns(missing))
            }
        }
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Load the layout declared in a CSV file.
pub fn load_layout(path: &Path) -> Result<Layout> {
    if !path.is_file() {
        return Err(ResourceError::ConfigNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| ResourceError::read(path, err))?;
    let headers = reader
        .headers()
        .map_err(|err| ResourceError::read(path, err))?
        .clone();
    let columns = LayoutColumns::locate(&headers)?;
    debug!(?columns, "located layout columns");

    let mut fields = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ResourceError::read(path, err))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        // Header is line 1.
        let row = record
            .position()
            .map_or(fields.len() + 2, |position| position.line() as usize);
        let cell = |idx: usize| record.get(idx).unwrap_or("");
        fields.push(FieldSchema::parse(
            cell(columns.format),
            cell(columns.length),
            cell(columns.skip),
            row,
        )?);
    }

    let layout = Layout::new(fields)?;
    info!(
        path = %path.display(),
        fields = layout.len(),
        record_width = layout.record_width(),
        "loaded layout"
    );
    Ok(layout)
}
