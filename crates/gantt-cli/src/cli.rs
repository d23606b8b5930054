//! CLI argument definitions for the chart generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gantt",
    version,
    about = "Generate a self-contained HTML Gantt chart from CSV project data",
    long_about = "Convert tabular project schedules into a shareable HTML timeline.\n\n\
                  Supports two input formats: the legacy two-phase layout\n\
                  (preparing/execution columns) and the multi-stage layout\n\
                  (a JSON stage list per row)."
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
    /// Convert a CSV file into an HTML timeline.
    Generate(GenerateArgs),

    /// Detect the schema of a CSV file and validate it without writing output.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Path to the CSV file containing project data.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Path for the output HTML file (default: output/gantt_chart.html).
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: Option<PathBuf>,

    /// Also write the raw chart payload as JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json_path: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Path to the CSV file to inspect.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,
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
