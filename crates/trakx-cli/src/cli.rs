//! CLI argument definitions for `trakx`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use trakx_match::DEFAULT_MAX_STANDARD_DEVIATIONS;

#[derive(Parser)]
#[command(
    name = "trakx",
    version,
    about = "Case-weighted string matching and deviation-based value selection",
    long_about = "Case-weighted string matching and deviation-based value selection.\n\n\
                  Distances charge 1 per insertion, deletion or substitution, and 0.5 \
                  when two characters differ only by case.\n\
                  Selection picks the first value, in the order given, lying within a \
                  number of standard deviations of the mean or median."
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
    /// Print the case-weighted edit distance between two strings.
    Distance(DistanceArgs),

    /// Print the candidate closest to a string (exit code 1 when none qualifies).
    BestMatch(BestMatchArgs),

    /// Select a value by deviation from the mean or median.
    Select(SelectArgs),
}

#[derive(Parser)]
pub struct DistanceArgs {
    #[arg(value_name = "SOURCE")]
    pub source: String,

    #[arg(value_name = "TARGET")]
    pub target: String,
}

#[derive(Parser)]
pub struct BestMatchArgs {
    /// String to match.
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Candidates, the first one wins ties.
    #[arg(value_name = "CANDIDATE", required = true)]
    pub candidates: Vec<String>,

    /// Largest accepted distance (unbounded by default).
    #[arg(long = "max-distance", value_name = "D")]
    pub max_distance: Option<f64>,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Values in preference order, most preferred first.
    ///
    /// Values that are not numbers, or are NaN, are ignored.
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Accepted deviation, in standard deviations.
    #[arg(
        long = "max-std-devs",
        value_name = "K",
        default_value_t = DEFAULT_MAX_STANDARD_DEVIATIONS
    )]
    pub max_std_devs: f64,

    /// Measure deviation from the median instead of the mean.
    #[arg(long = "median")]
    pub median: bool,

    /// Fail when no value is within the threshold instead of falling back
    /// to the least deviated one.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
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
