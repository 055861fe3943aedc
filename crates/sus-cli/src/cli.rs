//! CLI argument definitions for the billing tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sus-billing",
    version,
    about = "Ambulatory billing toolkit - rule import and identifier checks",
    long_about = "Import national procedure-rule releases and validate the\n\
                  identifiers that gate regulatory billing exports."
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
    /// Import a downloaded rule-archive release into a repository.
    Import(ImportArgs),

    /// Validate one identifier's check digits.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Path to the downloaded rule archive (zip).
    #[arg(value_name = "ARCHIVE")]
    pub archive: PathBuf,

    /// Competence the release belongs to, AAAAMM.
    #[arg(long = "competence", value_name = "AAAAMM")]
    pub competence: String,

    /// Print the sync report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Identifier kind to validate.
    #[arg(value_enum, value_name = "KIND")]
    pub kind: IdentifierKind,

    /// The identifier value.
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum IdentifierKind {
    /// National health card number (15 digits).
    Cns,
    /// Facility registry identifier (7 digits).
    Facility,
    /// Procedure table code (7 or 10 digits).
    Procedure,
    /// Taxpayer number (11 digits).
    Cpf,
    /// Diagnosis code shape.
    Diagnosis,
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
