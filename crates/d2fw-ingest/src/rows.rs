//! Delimited input reading.

use std::path::Path;

use csv::ReaderBuilder;
use d2fw_model::ResourceError;
use tracing::{debug, info};

/// How the delimited input is split into rows and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSourceOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Quote byte.
    pub quote: u8,
    /// Records to discard at the start of the file.
    pub skip_header: usize,
    /// Records to discard at the end of the file.
    pub skip_footer: usize,
}

impl Default for RowSourceOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            skip_header: 0,
            skip_footer: 0,
        }
    }
}

impl RowSourceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: u8) -> Self {
        self.quote = quote;
        self
    }

    #[must_use]
    pub fn with_skip_header(mut self, count: usize) -> Self {
        self.skip_header = count;
        self
    }

    #[must_use]
    pub fn with_skip_footer(mut self, count: usize) -> Self {
        self.skip_footer = count;
        self
    }
}

/// Read every data row of a delimited file.
///
/// Cells are returned exactly as written (no trimming). Rows may have
/// different lengths. Header and footer records are dropped; asking to
/// skip more records than the file holds yields no rows.
pub fn read_rows(path: &Path, options: &RowSourceOptions) -> Result<Vec<Vec<String>>, ResourceError> {
    if !path.is_file() {
        return Err(ResourceError::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .from_path(path)
        .map_err(|err| ResourceError::read(path, err))?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| ResourceError::read(path, err))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    let total = rows.len();

    let end = total.saturating_sub(options.skip_footer);
    let start = options.skip_header.min(end);
    debug!(
        skip_header = options.skip_header,
        skip_footer = options.skip_footer,
        total,
        "trimming header and footer records"
    );
    rows.truncate(end);
    rows.drain(..start);

    info!(path = %path.display(), rows = rows.len(), "read input rows");
    Ok(rows)
}
