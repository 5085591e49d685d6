//! Output format kinds declared in a field layout.
//!
//! Each kind selects a conversion rule for the raw cell value and the
//! padding used to reach the declared field length:
//!
//! | Kind          | Conversion                         | Padding            |
//! |---------------|------------------------------------|--------------------|
//! | Integer       | none                               | left, with `0`     |
//! | Decimal       | value x 100, rounded to an integer | left, with `0`     |
//! | Time          | `HH:MM` or `HHMM` to `HHMM`        | right, with spaces |
//! | Text          | none                               | right, with spaces |
//! | Date DD/MM    | `D/M/YYYY` to `YYYYMMDD`           | right, with spaces |
//! | Date MM/DD    | `M/D/YYYY` to `YYYYMMDD`           | right, with spaces |

use std::fmt;
use std::str::FromStr;

/// Output format of one fixed-width field.
///
/// New kinds may be declared before every consumer handles them, so
/// matches outside this crate must keep a fallback arm (identity
/// conversion, space padding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum OutputFormat {
    /// Whole number, zero-padded on the left.
    Integer,
    /// Real number rendered in hundredths, zero-padded on the left.
    Decimal,
    /// Hour and minute, `HHMM`.
    Time,
    /// Free text, space-padded on the right.
    Text,
    /// Day-first date rendered as `YYYYMMDD`.
    DateDdMmYyyy,
    /// Month-first date rendered as `YYYYMMDD`.
    DateMmDdYyyy,
}

impl OutputFormat {
    /// Returns the label used for this format in layout files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Integer => "Integer",
            OutputFormat::Decimal => "Decimal",
            OutputFormat::Time => "Time",
            OutputFormat::Text => "Text",
            OutputFormat::DateDdMmYyyy => "Date (DD/MM/YYYY to YYYYMMDD)",
            OutputFormat::DateMmDdYyyy => "Date (MM/DD/YYYY to YYYYMMDD)",
        }
    }

    /// Returns true for formats padded on the left with zeros.
    pub fn is_numeric(&self) -> bool {
        matches!(self, OutputFormat::Integer | OutputFormat::Decimal)
    }

    /// Returns true for formats rendered as `YYYYMMDD`.
    pub fn is_date(&self) -> bool {
        matches!(
            self,
            OutputFormat::DateDdMmYyyy | OutputFormat::DateMmDdYyyy
        )
    }

    /// All supported formats, in layout documentation order.
    pub const fn all() -> &'static [OutputFormat] {
        &[
            OutputFormat::Integer,
            OutputFormat::Decimal,
            OutputFormat::Time,
            OutputFormat::Text,
            OutputFormat::DateDdMmYyyy,
            OutputFormat::DateMmDdYyyy,
        ]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a format label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown output format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    /// Parse a layout label (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.as_str().to_uppercase() == normalized)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}
