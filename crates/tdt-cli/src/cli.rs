//! CLI argument definitions for the data translator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tdt",
    version,
    about = "Tab-delimited data translator - rename columns, filter and re-key rows",
    long_about = "Translate a tab-delimited data file using two small config files.\n\n\
                  The column config (original name <TAB> output name) selects and renames\n\
                  columns; the key config (record key <TAB> replacement) selects rows by\n\
                  their first field and substitutes the key on output."
)]
pub struct Cli {
    /// Path to the tab-delimited data file; the first line is the header.
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    /// Path to the column config file (original name <TAB> output name).
    #[arg(value_name = "COLUMN_CONFIG")]
    pub column_config: PathBuf,

    /// Path to the key config file (record key <TAB> replacement key).
    #[arg(value_name = "KEY_CONFIG")]
    pub key_config: PathBuf,

    /// Path the translated file is written to (created or truncated).
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Also write the run summary as JSON to this path.
    #[arg(long = "summary-json", value_name = "PATH")]
    pub summary_json: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
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
