//! Field layout: one [`FieldSchema`] per output column, in output order.

use crate::error::SchemaError;
use crate::format::OutputFormat;

/// Output contract of one fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Conversion and padding rule.
    pub format: OutputFormat,
    /// Exact width of the field in the output line.
    pub length: usize,
    /// Discard the input value and emit an empty, padded field.
    pub skip: bool,
}

impl FieldSchema {
    pub fn new(format: OutputFormat, length: usize, skip: bool) -> Self {
        Self {
            format,
            length,
            skip,
        }
    }

    /// Build a field from the raw cells of a layout row.
    ///
    /// `row` is the 1-based row number in the layout resource and is only
    /// used for error reporting. Length is checked first, then format, then
    /// the skip flag.
    pub fn parse(format: &str, length: &str, skip: &str, row: usize) -> Result<Self, SchemaError> {
        let length = parse_length(length).ok_or_else(|| SchemaError::InvalidLength {
            row,
            value: length.to_string(),
        })?;
        let format = format
            .parse::<OutputFormat>()
            .map_err(|_| SchemaError::UnsupportedFormat {
                row,
                value: format.to_string(),
            })?;
        let skip = parse_skip_flag(skip).ok_or_else(|| SchemaError::InvalidSkipFlag {
            row,
            value: skip.to_string(),
        })?;
        Ok(Self::new(format, length, skip))
    }
}

fn parse_length(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

fn parse_skip_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "" | "false" => Some(false),
        "true" => Some(true),
        _ => None,
    }
}

/// Ordered, non-empty list of fields; position is the 0-based column index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldSchema>,
}

impl Layout {
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::EmptyLayout);
        }
        Ok(Self { fields })
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false: an empty layout cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, column: usize) -> Option<&FieldSchema> {
        self.fields.get(column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSchema> {
        self.fields.iter()
    }

    /// Width of an output line when no field overflows.
    pub fn record_width(&self) -> usize {
        self.fields.iter().map(|field| field.length).sum()
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a FieldSchema;
    type IntoIter = std::slice::Iter<'a, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
