//! CLI argument definitions for delimited2fixedwidth.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "delimited2fixedwidth",
    version,
    about = "Convert files from delimited (e.g. CSV) to fixed width format",
    long_about = "Convert files from delimited (e.g. CSV) to fixed width format.\n\n\
                  Every field is converted and padded according to a layout file\n\
                  declaring, per output field, its Length, Output format and Skip field."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a delimited file into a fixed-width file.
    Convert(ConvertArgs),

    /// List the output formats a layout file may use.
    Formats,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Delimited input file.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Fixed-width output file.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Layout file (CSV with Length, Output format and Skip field columns).
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: PathBuf,

    /// Replace the output file if it already exists.
    #[arg(short = 'x', long = "overwrite-file")]
    pub overwrite_file: bool,

    /// Field delimiter of the input file.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ",")]
    pub delimiter: String,

    /// Quote character of the input file.
    #[arg(long = "quotechar", value_name = "CHAR", default_value = "\"")]
    pub quotechar: String,

    /// Number of header lines to skip at the start of the input.
    #[arg(long = "skip-header", value_name = "N", default_value = "0")]
    pub skip_header: String,

    /// Number of footer lines to skip at the end of the input.
    #[arg(long = "skip-footer", value_name = "N", default_value = "0")]
    pub skip_footer: String,

    /// Report the oldest and most recent date found in this field (1-based).
    #[arg(long = "date-field-to-report-on", value_name = "FIELD")]
    pub date_field_to_report_on: Option<NonZeroUsize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
