//! Row and table conversion into fixed-width lines.
//!
//! For every cell present in a row the converter:
//! 1. blanks it when its field is marked `skip`, otherwise converts it
//!    ([`convert_cell`]);
//! 2. rejects it when the converted value is longer than the field;
//! 3. pads it ([`pad`]) and appends it to the line;
//! 4. folds it into the date bounds when it sits in the date report column.
//!
//! Fields beyond the end of a short row are emitted empty and padded. A row
//! with more cells than the layout has fields is rejected. The first error
//! aborts the whole table.

use d2fw_model::{ConversionError, ConversionResult, DateBounds, FieldSchema, Layout};
use tracing::{debug, trace, warn};

use crate::cell::convert_cell;
use crate::padding::{display_len, pad};

/// Converts rows one at a time against a borrowed layout.
///
/// Lines and date bounds accumulate until [`TableConverter::finish`].
#[derive(Debug)]
pub struct TableConverter<'a> {
    layout: &'a Layout,
    date_report_column: Option<usize>,
    lines: Vec<String>,
    dates: DateBounds,
}

impl<'a> TableConverter<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self {
            layout,
            date_report_column: None,
            lines: Vec::new(),
            dates: DateBounds::new(),
        }
    }

    /// Track min/max of the padded values in this 0-based column.
    ///
    /// Any column is accepted. One that is missing from the layout, skipped,
    /// or not a date format is logged at warn level.
    #[must_use]
    pub fn with_date_report_column(mut self, column: Option<usize>) -> Self {
        if let Some(column) = column {
            match self.layout.get(column) {
                None => warn!(
                    column = column + 1,
                    fields = self.layout.len(),
                    "date report column is beyond the layout, no dates will be reported"
                ),
                Some(field) if field.skip => warn!(
                    column = column + 1,
                    "date report column is a skipped field, only blanks will be reported"
                ),
                Some(field) if !field.format.is_date() => warn!(
                    column = column + 1,
                    format = %field.format,
                    "date report column is not a date field"
                ),
                Some(_) => {}
            }
        }
        self.date_report_column = column;
        self
    }

    /// Convert the row at 0-based `row_index` and keep its line.
    pub fn push_row<S: AsRef<str>>(
        &mut self,
        row_index: usize,
        cells: &[S],
    ) -> Result<(), ConversionError> {
        let line = self.convert_row(row_index, cells)?;
        self.lines.push(line);
        Ok(())
    }

    /// Convert the row at 0-based `row_index` into one output line and
    /// fold it into the date bounds.
    fn convert_row<S: AsRef<str>>(
        &mut self,
        row_index: usize,
        cells: &[S],
    ) -> Result<String, ConversionError> {
        let row = row_index + 1;
        if cells.len() > self.layout.len() {
            return Err(ConversionError::RowTooWide {
                row,
                cells: cells.len(),
                columns: self.layout.len(),
            });
        }

        let mut line = String::with_capacity(self.layout.record_width());
        for (col_index, (cell, field)) in cells.iter().zip(self.layout).enumerate() {
            let padded = convert_field(cell.as_ref(), field, col_index + 1, row)?;
            if self.date_report_column == Some(col_index) {
                self.dates.observe(&padded);
            }
            line.push_str(&padded);
        }
        for field in self.layout.iter().skip(cells.len()) {
            line.push_str(&pad("", field.format, field.length));
        }

        trace!(row, width = display_len(&line), "converted row");
        Ok(line)
    }

    pub fn finish(self) -> ConversionResult {
        ConversionResult {
            lines: self.lines,
            dates: self.dates,
        }
    }
}

/// Blank or convert one cell, enforce its maximum length, and pad it.
fn convert_field(
    value: &str,
    field: &FieldSchema,
    column: usize,
    row: usize,
) -> Result<String, ConversionError> {
    let converted = if field.skip {
        String::new()
    } else {
        convert_cell(value, field.format, column, row)?
    };
    let length = display_len(&converted);
    if length > field.length {
        return Err(ConversionError::FieldTooLong {
            column,
            row,
            value: value.to_string(),
            length,
            max: field.length,
        });
    }
    Ok(pad(&converted, field.format, field.length))
}

/// Convert a fully materialised table.
///
/// `date_report_column` is 0-based. Rows are numbered from 1 in errors,
/// counting only data rows.
pub fn convert_table<R, S>(
    rows: &[R],
    layout: &Layout,
    date_report_column: Option<usize>,
) -> Result<ConversionResult, ConversionError>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    debug!(
        rows = rows.len(),
        fields = layout.len(),
        record_width = layout.record_width(),
        "converting table"
    );
    let mut converter = TableConverter::new(layout).with_date_report_column(date_report_column);
    for (row_index, row) in rows.iter().enumerate() {
        converter.push_row(row_index, row.as_ref())?;
    }
    Ok(converter.finish())
}
