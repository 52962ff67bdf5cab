//! CLI argument definitions for the `tally` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Tally - validate, normalize and sum numeric input",
    long_about = "Validate, normalize and sum numeric input.\n\n\
                  Values are given as plain arguments (each one is text) or as a\n\
                  JSON document with --json."
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

    /// JSON options file (clean messages, form keys).
    #[arg(long = "options", value_name = "PATH", global = true)]
    pub options: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sum values, coercing each one. Non-numeric values make the sum NaN.
    Sum(InputArgs),

    /// Validate and convert values, failing on the first invalid one.
    Clean(CleanArgs),

    /// Read operands from form fields and print the result text.
    Calc(CalcArgs),

    /// Check that a text value is not empty.
    Validate(ValidateArgs),
}

/// Input values, either as plain arguments or one JSON document.
#[derive(Args, Clone, Debug, Default)]
pub struct InputArgs {
    /// Values to process; each is treated as text.
    #[arg(value_name = "VALUES", conflicts_with = "json", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// A JSON document used as the single input argument.
    #[arg(long = "json", value_name = "JSON")]
    pub json: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print a table of inputs and numbers instead of one number per line.
    #[arg(long = "table")]
    pub table: bool,

    /// Message reported for empty values (overrides the options file).
    #[arg(long = "empty-message", value_name = "MSG")]
    pub empty_message: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct CalcArgs {
    /// First operand, stored under the first configured form key.
    #[arg(long = "num1", value_name = "A", allow_hyphen_values = true)]
    pub num1: Option<String>,

    /// Second operand, stored under the second configured form key.
    #[arg(long = "num2", value_name = "B", allow_hyphen_values = true)]
    pub num2: Option<String>,

    /// Extra form field as KEY=VALUE; repeat for each field.
    #[arg(long = "field", value_name = "KEY=VALUE")]
    pub fields: Vec<String>,

    /// Message reported for empty values (overrides the options file).
    #[arg(long = "empty-message", value_name = "MSG")]
    pub empty_message: Option<String>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct ValidateArgs {
    /// Text to check.
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Message reported when the text is empty.
    #[arg(long = "message", value_name = "MSG")]
    pub message: Option<String>,
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
