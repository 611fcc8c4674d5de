//! CLI argument definitions for `df`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use df_model::NullPolicy;

#[derive(Parser)]
#[command(
    name = "df",
    version,
    about = "df - a tiny CSV-first dataframe-ish CLI",
    long_about = "Inspect and clean CSV files.\n\n\
                  `cols` lists column names, `head` previews rows as a table and\n\
                  `nullify` rewrites a file with NULL-like values replaced by empty fields.\n\
                  Files are streamed; the first row is always the header."
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

    /// Include raw cell values in trace logs.
    ///
    /// Cell contents may contain personal data; they are redacted unless
    /// this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print column names with their zero-based index.
    Cols(ColsArgs),

    /// Print the first rows of a CSV file as a table.
    Head(HeadArgs),

    /// Write a copy of a CSV file with NULL-like values replaced by empty fields.
    Nullify(NullifyArgs),
}

#[derive(Parser)]
pub struct ColsArgs {
    /// CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct HeadArgs {
    /// CSV file to preview.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of data rows to show.
    #[arg(short = 'n', long = "rows", value_name = "N", default_value_t = 5)]
    pub rows: usize,

    /// Maximum characters per cell before clipping (0 uses the default).
    #[arg(
        short = 'w',
        long = "width",
        value_name = "WIDTH",
        default_value_t = crate::render::DEFAULT_MAX_CELL_WIDTH
    )]
    pub max_width: usize,
}

#[derive(Parser)]
pub struct NullifyArgs {
    /// CSV file to read.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output CSV path (created or truncated).
    #[arg(short = 'o', long = "output", value_name = "OUT", required = true)]
    pub output: PathBuf,

    /// Treat empty and whitespace-only cells as NULL (default).
    #[arg(long = "blanks", overrides_with = "no_blanks")]
    pub blanks: bool,

    /// Leave empty and whitespace-only cells alone.
    #[arg(long = "no-blanks", overrides_with = "blanks")]
    pub no_blanks: bool,

    /// Treat NA and N/A (any case) as NULL.
    #[arg(long = "na")]
    pub na: bool,

    /// Treat the literal NULL (any case) as NULL.
    #[arg(long = "null-literal")]
    pub null_literal: bool,

    /// How to report run statistics.
    #[arg(long = "summary", value_enum, default_value = "text")]
    pub summary: SummaryFormatArg,
}

impl NullifyArgs {
    /// Policy selected by the flags; blanks stay on unless `--no-blanks` wins.
    pub fn policy(&self) -> NullPolicy {
        NullPolicy::default()
            .with_blanks(!self.no_blanks)
            .with_na(self.na)
            .with_null_literal(self.null_literal)
    }
}

/// Summary output choices for `nullify`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormatArg {
    /// Human-readable lines on stderr.
    Text,
    /// One JSON object on stdout.
    Json,
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
