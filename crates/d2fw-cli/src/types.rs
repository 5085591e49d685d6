use std::path::PathBuf;

use d2fw_model::DateBounds;

/// Outcome of a successful conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub fields: usize,
    pub record_width: usize,
    /// 1-based field and its date bounds, when a date report was requested.
    pub date_report: Option<DateReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateReport {
    pub field: usize,
    pub dates: DateBounds,
}
