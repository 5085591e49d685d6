//! Per-cell conversion from a raw delimited value to its fixed-width form.
//!
//! The result still has to be padded (see [`crate::padding`]). Column and
//! row numbers passed in are 1-based and only used in error messages.

use std::sync::LazyLock;

use chrono::NaiveDate;
use d2fw_model::{ConversionError, OutputFormat};
use regex::Regex;

/// `HH:MM` or `HHMM`, matched at the start of the value.
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{2}):?([0-9]{2})").expect("Invalid time regex"));

/// `D/M/YYYY` or `M/D/YYYY`, one or two digit day and month, matched at the start.
static SLASH_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").expect("Invalid date regex")
});

/// Convert one raw value according to its output format.
///
/// Integer and Text values pass through unchanged, as does any format this
/// crate does not know about yet.
pub fn convert_cell(
    value: &str,
    format: OutputFormat,
    column: usize,
    row: usize,
) -> Result<String, ConversionError> {
    match format {
        OutputFormat::Integer | OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Decimal => convert_decimal(value).ok_or_else(|| {
            ConversionError::InvalidDecimal {
                column,
                row,
                value: value.to_string(),
            }
        }),
        OutputFormat::Time => convert_time(value).ok_or_else(|| ConversionError::InvalidTime {
            column,
            row,
            value: value.to_string(),
        }),
        OutputFormat::DateDdMmYyyy | OutputFormat::DateMmDdYyyy => {
            convert_date(value, DateOrder::from_format(format)).ok_or_else(|| {
                ConversionError::InvalidDate {
                    column,
                    row,
                    value: value.to_string(),
                }
            })
        }
        _ => Ok(value.to_string()),
    }
}

/// Render a real number in hundredths, rounding half to even.
///
/// `"1.36"` becomes `"136"`, `"2"` becomes `"200"`, `"0.125"` becomes `"12"`.
/// Surrounding whitespace is accepted. Infinite, NaN and out-of-range values
/// are rejected.
pub fn convert_decimal(value: &str) -> Option<String> {
    let parsed = value.trim().parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    let hundredths = (parsed * 100.0).round_ties_even();
    if hundredths < i64::MIN as f64 || hundredths >= i64::MAX as f64 {
        return None;
    }
    Some((hundredths as i64).to_string())
}

/// Strip the colon from a leading `HH:MM`, or keep a leading `HHMM`.
pub fn convert_time(value: &str) -> Option<String> {
    let captures = TIME_REGEX.captures(value)?;
    Some(format!("{}{}", &captures[1], &captures[2]))
}

/// Position of day and month in a slash-separated input date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayFirst,
    MonthFirst,
}

impl DateOrder {
    fn from_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::DateMmDdYyyy => DateOrder::MonthFirst,
            _ => DateOrder::DayFirst,
        }
    }
}

/// Reassemble a slash-separated date as `YYYYMMDD`.
///
/// Returns None when the value does not start with the expected pattern or
/// does not name a real calendar day.
pub fn convert_date(value: &str, order: DateOrder) -> Option<String> {
    let captures = SLASH_DATE_REGEX.captures(value)?;
    let (day, month) = match order {
        DateOrder::DayFirst => (&captures[1], &captures[2]),
        DateOrder::MonthFirst => (&captures[2], &captures[1]),
    };
    let year = &captures[3];
    let assembled = format!("{year}{month:0>2}{day:0>2}");
    is_calendar_date(&assembled).then_some(assembled)
}

/// True when an 8-digit `YYYYMMDD` string names an existing day.
///
/// Years start at 1; chrono's proleptic year 0 is rejected.
fn is_calendar_date(value: &str) -> bool {
    let (Ok(year), Ok(month), Ok(day)) = (
        value[0..4].parse::<i32>(),
        value[4..6].parse::<u32>(),
        value[6..8].parse::<u32>(),
    ) else {
        return false;
    };
    year >= 1 && NaiveDate::from_ymd_opt(year, month, day).is_some()
}
