//! CLI argument definitions for the rule-tag toolchain.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ruletag",
    version,
    about = "Parse country-keyed field rule tags and validate records against them",
    long_about = "Parse the compact rule-tag notation ([GB:7-10,required | PT:5])\n\
                  attached to record fields, and evaluate records against the\n\
                  declared per-country length constraints."
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
    /// Parse a rule tag and print the per-country constraints.
    Check(CheckArgs),

    /// Validate a record supplied as JSON against its rule tags.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// The rule tag to parse, e.g. "[GB:7-10,required | PT:5]".
    #[arg(value_name = "TAG")]
    pub tag: String,

    /// Print the parsed constraints as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Target country code, e.g. GB.
    #[arg(long = "country", value_name = "CODE")]
    pub country: String,

    /// JSON file mapping field names to rule tags.
    #[arg(long = "tags", value_name = "FILE")]
    pub tags: PathBuf,

    /// JSON file mapping field names to field values.
    #[arg(long = "values", value_name = "FILE")]
    pub values: PathBuf,

    /// Print the violation report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
