//! CLI argument definitions for tabview.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use tabview_cli::source::SourceArgs;

#[derive(Parser)]
#[command(
    name = "tabview",
    version,
    about = "Sortable, filterable tables from nested JSON records",
    long_about = "Fetch nested records from a JSON provider (or a local file), flatten them \
                  into a table, then sort by column and filter by substring.\n\n\
                  Defaults to 20 random user locations from randomuser.me."
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

    /// Allow record values and search terms to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a batch, apply sort clicks and a filter, and print the table once.
    Show(ShowArgs),

    /// Print the column headers of a batch, one per line.
    Headers(SourceArgs),

    /// Browse a batch interactively (sort and filter commands on stdin).
    Browse(BrowseArgs),
}

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Click a column header; repeat to click again or click other headers in order.
    #[arg(long = "sort", value_name = "HEADER")]
    pub sort: Vec<String>,

    /// Show only rows where some field contains this text (case-insensitive).
    #[arg(long = "filter", value_name = "TEXT", default_value = "")]
    pub filter: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Maximum table width in columns.
    #[arg(long = "width", value_name = "COLUMNS")]
    pub width: Option<u16>,
}

#[derive(Args)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Maximum table width in columns.
    #[arg(long = "width", value_name = "COLUMNS")]
    pub width: Option<u16>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Csv,
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
