//! Run errors and their process exit codes.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | success                                   |
//! | 1    | logging could not be initialised          |
//! | 2    | invalid command line (reported by clap)   |
//! | 10   | input file missing                        |
//! | 11   | output exists, `--overwrite-file` not set |
//! | 12   | layout file missing                       |
//! | 13   | layout is missing required columns       |
//! | 14   | layout has an invalid length              |
//! | 15   | layout has an unsupported output format   |
//! | 16   | layout has an invalid skip flag           |
//! | 17   | invalid time                              |
//! | 18   | invalid date                              |
//! | 19   | invalid decimal                           |
//! | 20   | field longer than its declared length     |
//! | 21   | non-numeric `--skip-header`/`--skip-footer` |
//! | 22   | row has more fields than the layout       |
//! | 23   | layout declares no field                  |
//! | 24   | input or layout file unreadable           |
//! | 25   | output file could not be written          |
//! | 26   | invalid `--delimiter`/`--quotechar`       |

use d2fw_ingest::LayoutLoadError;
use d2fw_model::{ConversionError, ResourceError, SchemaError};
use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LOGGING: i32 = 1;
pub const EXIT_INPUT_MISSING: i32 = 10;
pub const EXIT_OUTPUT_EXISTS: i32 = 11;
pub const EXIT_CONFIG_MISSING: i32 = 12;
pub const EXIT_MISSING_COLUMNS: i32 = 13;
pub const EXIT_INVALID_LENGTH: i32 = 14;
pub const EXIT_UNSUPPORTED_FORMAT: i32 = 15;
pub const EXIT_INVALID_SKIP_FLAG: i32 = 16;
pub const EXIT_INVALID_TIME: i32 = 17;
pub const EXIT_INVALID_DATE: i32 = 18;
pub const EXIT_INVALID_DECIMAL: i32 = 19;
pub const EXIT_FIELD_TOO_LONG: i32 = 20;
pub const EXIT_INVALID_SKIP_COUNT: i32 = 21;
pub const EXIT_ROW_TOO_WIDE: i32 = 22;
pub const EXIT_EMPTY_LAYOUT: i32 = 23;
pub const EXIT_READ_FAILED: i32 = 24;
pub const EXIT_WRITE_FAILED: i32 = 25;
pub const EXIT_INVALID_CHARACTER: i32 = 26;

/// Any error that ends a conversion run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// Header or footer count is not a non-negative integer.
    #[error("invalid value '{value}' for --{flag}: expected a non-negative integer")]
    InvalidSkipCount { flag: &'static str, value: String },

    /// Delimiter or quote is not exactly one ASCII character.
    #[error("invalid value '{value}' for --{flag}: expected a single ASCII character")]
    InvalidCharacter { flag: &'static str, value: String },
}

impl From<LayoutLoadError> for CliError {
    fn from(err: LayoutLoadError) -> Self {
        match err {
            LayoutLoadError::Resource(err) => Self::Resource(err),
            LayoutLoadError::Schema(err) => Self::Schema(err),
        }
    }
}

impl CliError {
    /// Stable process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Resource(err) => match err {
                ResourceError::InputNotFound { .. } => EXIT_INPUT_MISSING,
                ResourceError::OutputExists { .. } => EXIT_OUTPUT_EXISTS,
                ResourceError::ConfigNotFound { .. } => EXIT_CONFIG_MISSING,
                ResourceError::Read { .. } => EXIT_READ_FAILED,
                ResourceError::Write { .. } => EXIT_WRITE_FAILED,
            },
            Self::Schema(err) => match err {
                SchemaError::MissingColumns { .. } => EXIT_MISSING_COLUMNS,
                SchemaError::InvalidLength { .. } => EXIT_INVALID_LENGTH,
                SchemaError::UnsupportedFormat { .. } => EXIT_UNSUPPORTED_FORMAT,
                SchemaError::InvalidSkipFlag { .. } => EXIT_INVALID_SKIP_FLAG,
                SchemaError::EmptyLayout => EXIT_EMPTY_LAYOUT,
            },
            Self::Conversion(err) => match err {
                ConversionError::InvalidTime { .. } => EXIT_INVALID_TIME,
                ConversionError::InvalidDate { .. } => EXIT_INVALID_DATE,
                ConversionError::InvalidDecimal { .. } => EXIT_INVALID_DECIMAL,
                ConversionError::FieldTooLong { .. } => EXIT_FIELD_TOO_LONG,
                ConversionError::RowTooWide { .. } => EXIT_ROW_TOO_WIDE,
            },
            Self::InvalidSkipCount { .. } => EXIT_INVALID_SKIP_COUNT,
            Self::InvalidCharacter { .. } => EXIT_INVALID_CHARACTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::PathBuf;

    use super::*;

    fn every_kind() -> Vec<CliError> {
        let path = PathBuf::from("file");
        vec![
            ResourceError::InputNotFound { path: path.clone() }.into(),
            ResourceError::OutputExists { path: path.clone() }.into(),
            ResourceError::ConfigNotFound { path: path.clone() }.into(),
            ResourceError::read(path.clone(), "bad").into(),
            ResourceError::write(path, std::io::Error::other("full")).into(),
            SchemaError::missing_columns(["Length"]).into(),
            SchemaError::InvalidLength {
                row: 2,
                value: "x".into(),
            }
            .into(),
            SchemaError::UnsupportedFormat {
                row: 2,
                value: "x".into(),
            }
            .into(),
            SchemaError::InvalidSkipFlag {
                row: 2,
                value: "x".into(),
            }
            .into(),
            SchemaError::EmptyLayout.into(),
            ConversionError::InvalidTime {
                column: 1,
                row: 1,
                value: "x".into(),
            }
            .into(),
            ConversionError::InvalidDate {
                column: 1,
                row: 1,
                value: "x".into(),
            }
            .into(),
            ConversionError::InvalidDecimal {
                column: 1,
                row: 1,
                value: "x".into(),
            }
            .into(),
            ConversionError::FieldTooLong {
                column: 1,
                row: 1,
                value: "x".into(),
                length: 1,
                max: 0,
            }
            .into(),
            ConversionError::RowTooWide {
                row: 1,
                cells: 2,
                columns: 1,
            }
            .into(),
            CliError::InvalidSkipCount {
                flag: "skip-header",
                value: "x".into(),
            },
            CliError::InvalidCharacter {
                flag: "delimiter",
                value: "xx".into(),
            },
        ]
    }

    #[test]
    fn exit_codes_are_unique() {
        let errors = every_kind();
        let codes: BTreeSet<i32> = errors.iter().map(CliError::exit_code).collect();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&EXIT_SUCCESS));
        assert!(!codes.contains(&EXIT_LOGGING));
        assert!(!codes.contains(&2));
    }

    #[test]
    fn layout_errors_keep_their_kind() {
        let err: CliError = LayoutLoadError::Schema(SchemaError::EmptyLayout).into();
        assert_eq!(err.exit_code(), EXIT_EMPTY_LAYOUT);
        let err: CliError = LayoutLoadError::Resource(ResourceError::ConfigNotFound {
            path: PathBuf::from("layout.csv"),
        })
        .into();
        assert_eq!(err.exit_code(), EXIT_CONFIG_MISSING);
    }
}
