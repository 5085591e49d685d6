//! Error types for layout loading, record conversion, and file access.
//!
//! Every error is fatal for the run: nothing is skipped or defaulted.
//! Row and column numbers in messages are 1-based.

use std::path::PathBuf;
use thiserror::Error;

/// The layout definition is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// Required header columns are absent from the layout file.
    #[error("layout is missing required column(s): {}", missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// Length cell is not a non-negative integer.
    #[error("invalid length '{value}' in layout row {row}: expected a non-negative integer")]
    InvalidLength { row: usize, value: String },

    /// Output format cell names no supported format.
    #[error("unsupported output format '{value}' in layout row {row}")]
    UnsupportedFormat { row: usize, value: String },

    /// Skip cell is not `true`, `false`, or empty.
    #[error("invalid skip field value '{value}' in layout row {row}: expected True, False or empty")]
    InvalidSkipFlag { row: usize, value: String },

    /// Layout declares no fields.
    #[error("layout does not declare any field")]
    EmptyLayout,
}

impl SchemaError {
    /// Create a MissingColumns error.
    pub fn missing_columns<I, S>(missing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}

/// A data row violates the format or width contract of its layout.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// Value does not start with `HH:MM` or `HHMM`.
    #[error("invalid time '{value}' in field {column} of row {row}: expected HH:MM or HHMM")]
    InvalidTime {
        column: usize,
        row: usize,
        value: String,
    },

    /// Value does not match the date pattern or is not a calendar date.
    #[error("invalid date '{value}' in field {column} of row {row}")]
    InvalidDate {
        column: usize,
        row: usize,
        value: String,
    },

    /// Value cannot be read as a finite real number.
    #[error("invalid decimal '{value}' in field {column} of row {row}")]
    InvalidDecimal {
        column: usize,
        row: usize,
        value: String,
    },

    /// Converted value is longer than the declared field length.
    ///
    /// `value` is the raw cell; `length` counts the converted text.
    #[error(
        "field {column} of row {row} is too long: '{value}' converts to {length} characters, maximum is {max}"
    )]
    FieldTooLong {
        column: usize,
        row: usize,
        value: String,
        length: usize,
        max: usize,
    },

    /// Row has more cells than the layout has fields.
    #[error("row {row} has {cells} fields but the layout only declares {columns}")]
    RowTooWide {
        row: usize,
        cells: usize,
        columns: usize,
    },
}

impl ConversionError {
    /// 1-based data row the error was raised for.
    pub fn row(&self) -> usize {
        match self {
            Self::InvalidTime { row, .. }
            | Self::InvalidDate { row, .. }
            | Self::InvalidDecimal { row, .. }
            | Self::FieldTooLong { row, .. }
            | Self::RowTooWide { row, .. } => *row,
        }
    }
}

/// A file needed by the run is missing, unreadable, or must not be written.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Delimited input file does not exist.
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Layout configuration file does not exist.
    #[error("layout file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Output file exists and overwriting was not requested.
    #[error("output file already exists: {path} (use --overwrite-file to replace it)")]
    OutputExists { path: PathBuf },

    /// File could not be read or parsed.
    #[error("failed to read {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// Output could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Create a Read error.
    pub fn read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Read {
            path: path.into(),
            message: message.to_string(),
        }
    }

    /// Create a Write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::missing_columns(["Length", "Skip field"]);
        assert_eq!(
            err.to_string(),
            "layout is missing required column(s): Length, Skip field"
        );

        let err = SchemaError::InvalidLength {
            row: 3,
            value: "-1".to_string(),
        };
        assert!(err.to_string().contains("layout row 3"));
    }

    #[test]
    fn test_conversion_error_row() {
        let err = ConversionError::FieldTooLong {
            column: 2,
            row: 7,
            value: "abcdef".to_string(),
            length: 6,
            max: 4,
        };
        assert_eq!(err.row(), 7);
        assert_eq!(
            err.to_string(),
            "field 2 of row 7 is too long: 'abcdef' converts to 6 characters, maximum is 4"
        );
    }

    #[test]
    fn test_resource_error_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ResourceError::write("out.txt", io_err);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to write out.txt"));
    }
}
