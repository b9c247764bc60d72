//! CLI argument definitions for the CSV remapper.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csv-remap",
    version,
    about = "Rename, select, retype, and merge CSV columns",
    long_about = "Rename, select, retype, and merge columns of a CSV dataset.\n\n\
                  Columns are converted per a JSON configuration (target name,\n\
                  include flag, type) and columns sharing a target name are merged\n\
                  by first-non-null precedence. Input numbers use the European\n\
                  convention: ',' as decimal point, '.' as thousands separator."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
    /// List the columns of a CSV file with basic type hints.
    Columns(ColumnsArgs),

    /// Write a default configuration covering every column of a CSV file.
    InitConfig(InitConfigArgs),

    /// Apply a configuration to a CSV file and write the transformed table.
    Convert(ConvertArgs),
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser)]
pub struct InitConfigArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Where to write the configuration (default: <INPUT>.config.json).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column configuration to apply.
    #[arg(long = "config", value_name = "PATH")]
    pub config: PathBuf,

    /// Where to write the transformed CSV (default: <INPUT stem>_remapped.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
