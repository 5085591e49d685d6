//! Conversion run: validate arguments, load, convert, write.
//!
//! The output file is only written once the whole input converted, so a
//! fatal error never leaves a partial file behind.

use std::path::PathBuf;
use std::time::Instant;

use d2fw_ingest::{RowSourceOptions, load_layout, read_rows};
use d2fw_model::ResourceError;
use d2fw_output::{OutputOptions, check_destination, write_lines};
use d2fw_transform::convert_table;
use tracing::{info, info_span};

use crate::cli::ConvertArgs;
use crate::error::CliError;
use crate::types::{ConvertSummary, DateReport};

/// Fully validated conversion settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: PathBuf,
    pub rows: RowSourceOptions,
    pub output_options: OutputOptions,
    /// 1-based field to report dates on.
    pub date_field: Option<usize>,
}

impl ConvertRequest {
    /// Check arguments in the documented order and build a request.
    ///
    /// Input, output and layout paths are checked before the numeric and
    /// character options.
    pub fn from_args(args: &ConvertArgs) -> Result<Self, CliError> {
        if !args.input.is_file() {
            return Err(ResourceError::InputNotFound {
                path: args.input.clone(),
            }
            .into());
        }
        let output_options = OutputOptions::new().with_overwrite(args.overwrite_file);
        check_destination(&args.output, &output_options)?;
        if !args.config.is_file() {
            return Err(ResourceError::ConfigNotFound {
                path: args.config.clone(),
            }
            .into());
        }
        let rows = RowSourceOptions::new()
            .with_skip_header(parse_skip_count("skip-header", &args.skip_header)?)
            .with_skip_footer(parse_skip_count("skip-footer", &args.skip_footer)?)
            .with_delimiter(parse_single_byte("delimiter", &args.delimiter)?)
            .with_quote(parse_single_byte("quotechar", &args.quotechar)?);
        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            config: args.config.clone(),
            rows,
            output_options,
            date_field: args.date_field_to_report_on.map(std::num::NonZeroUsize::get),
        })
    }
}

/// Parse a header/footer line count.
pub fn parse_skip_count(flag: &'static str, value: &str) -> Result<usize, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CliError::InvalidSkipCount {
            flag,
            value: value.to_string(),
        });
    }
    trimmed.parse().map_err(|_| CliError::InvalidSkipCount {
        flag,
        value: value.to_string(),
    })
}

/// Parse a delimiter or quote given as exactly one ASCII character.
///
/// `\t` is accepted for a tab.
pub fn parse_single_byte(flag: &'static str, value: &str) -> Result<u8, CliError> {
    if value == "\\t" {
        return Ok(b'\t');
    }
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(CliError::InvalidCharacter {
            flag,
            value: value.to_string(),
        }),
    }
}

/// Run the `convert` subcommand.
pub fn run_convert(args: &ConvertArgs) -> Result<ConvertSummary, CliError> {
    let request = ConvertRequest::from_args(args)?;
    convert_file(&request)
}

/// Convert `request.input` into `request.output`.
pub fn convert_file(request: &ConvertRequest) -> Result<ConvertSummary, CliError> {
    let span = info_span!("convert", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let layout = load_layout(&request.config)?;
    let rows = read_rows(&request.input, &request.rows)?;
    let date_column = request.date_field.map(|field| field - 1);
    let result = convert_table(&rows, &layout, date_column)?;
    write_lines(&request.output, &result.lines, &request.output_options)?;

    let date_report = request.date_field.map(|field| {
        info!(
            field,
            oldest = %result.oldest_date(),
            most_recent = %result.most_recent_date(),
            "date report"
        );
        DateReport {
            field,
            dates: result.dates.clone(),
        }
    });
    info!(
        rows = result.lines.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "conversion complete"
    );

    Ok(ConvertSummary {
        input: request.input.clone(),
        output: request.output.clone(),
        rows: result.lines.len(),
        fields: layout.len(),
        record_width: layout.record_width(),
        date_report,
    })
}
