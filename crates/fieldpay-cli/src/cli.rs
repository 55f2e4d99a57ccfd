//! CLI argument definitions for the payment splitter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "fieldpay",
    version,
    about = "Survey payment splitter - turn a completes export into payment files",
    long_about = "Split survey respondent payouts by acquisition source.\n\n\
                  Reads a completes export (XLSX or CSV), tallies incentives per\n\
                  source, and writes top-up, referrer, vendor respondent-ID and\n\
                  reconciliation files ready to hand to finance."
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
    /// Process a completes spreadsheet and generate payment files.
    Process(ProcessArgs),

    /// List the logical fields and the header labels they match on.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the completes spreadsheet (.xlsx or .csv).
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// JSON config with project code, vendor CPIs and header labels.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project code prefixed to generated file names (overrides config).
    ///
    /// When neither this flag nor the config sets a code, the leading
    /// digits of the input file name are used.
    #[arg(long = "project-code", value_name = "CODE")]
    pub project_code: Option<String>,

    /// Vendor CPI override as KEY=RATE, e.g. --cpi pp_fulcrum=2.0 (repeatable).
    #[arg(long = "cpi", value_name = "KEY=RATE", value_parser = parse_cpi)]
    pub cpi: Vec<(String, f64)>,

    /// Output directory for generated files (default: <FILE dir>/export).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Plan and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// JSON config whose header labels should be shown.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
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

fn parse_cpi(value: &str) -> Result<(String, f64), String> {
    let Some((key, rate)) = value.split_once('=') else {
        return Err(format!("expected KEY=RATE, got `{value}`"));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err("CPI key must not be empty".to_string());
    }
    let rate: f64 = rate
        .trim()
        .parse()
        .map_err(|_| format!("invalid CPI rate `{}`", rate.trim()))?;
    Ok((key.to_string(), rate))
}
