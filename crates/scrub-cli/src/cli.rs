//! CLI argument definitions for scrub.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use scrub_model::OutputFormat;

#[derive(Parser)]
#[command(
    name = "scrub",
    version,
    about = "Profile and clean tabular data files",
    long_about = "Profile and clean tabular data files.\n\n\
                  Reads CSV, TSV, JSON and spreadsheet files, reports column quality,\n\
                  suggests fixes for duplicates, missing values and stray whitespace,\n\
                  and exports the cleaned data."
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

    /// Allow cell values in log output (redacted by default).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Engine settings file (default: ./scrub.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show per-column quality metrics.
    Profile(ProfileArgs),

    /// List suggested cleaning operations.
    Suggest(FileArgs),

    /// List columns that look like dates.
    Dates(FileArgs),

    /// List the distinct values of one column.
    Values(ValuesArgs),

    /// Show the first rows of the data.
    Preview(PreviewArgs),

    /// Apply suggestions and export the result.
    Clean(CleanArgs),

    /// Clean interactively, reading commands from stdin.
    Session(FileArgs),
}

#[derive(Args)]
pub struct FileArgs {
    /// Input file (.csv, .tsv, .json, .xlsx, .xls, .ods).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Optional date-range filter; all three flags go together.
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Column holding the dates to filter on.
    #[arg(long = "date-column", value_name = "COLUMN", requires_all = ["from", "to"])]
    pub date_column: Option<String>,

    /// First date to keep (inclusive).
    #[arg(long = "from", value_name = "DATE", requires_all = ["date_column", "to"])]
    pub from: Option<String>,

    /// Last date to keep (inclusive).
    #[arg(long = "to", value_name = "DATE", requires_all = ["date_column", "from"])]
    pub to: Option<String>,
}

impl FilterArgs {
    /// The `(column, start, end)` triple when a filter was requested.
    pub fn request(&self) -> Option<(&str, &str, &str)> {
        match (&self.date_column, &self.from, &self.to) {
            (Some(column), Some(from), Some(to)) => Some((column.as_str(), from.as_str(), to.as_str())),
            _ => None,
        }
    }
}

#[derive(Args)]
pub struct ProfileArgs {
    #[command(flatten)]
    pub input: FileArgs,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct ValuesArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Column to list.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Number of rows to show (default from config, 10).
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

#[derive(Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: FileArgs,

    /// Suggestion id to apply (repeatable, applied in order).
    #[arg(long = "apply", value_name = "ID")]
    pub apply: Vec<String>,

    /// Apply every pending suggestion as one step.
    #[arg(long = "all")]
    pub all: bool,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Export format (default from config, csv).
    #[arg(long = "format", value_enum)]
    pub format: Option<FormatArg>,

    /// Output path (default: <FILE stem>_cleaned.<ext> next to the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Apply and report without writing the export file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI export format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Json,
    Xlsx,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Self::Csv,
            FormatArg::Tsv => Self::Tsv,
            FormatArg::Json => Self::Json,
            FormatArg::Xlsx => Self::Xlsx,
        }
    }
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
