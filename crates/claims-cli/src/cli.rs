//! CLI argument definitions for the claims pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "claims",
    version,
    about = "Claims Standardiser - Map and standardise insurance claims exports",
    long_about = "Map arbitrary claims-export columns onto the canonical claim schema,\n\
                  standardise dates, categories and ICD ailment groups, derive claim\n\
                  metrics, and run segment queries over the standardised table."
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

    /// Allow row-level claim values in trace logs.
    ///
    /// Off by default: claims rows carry personal data, so row values are
    /// redacted from logs unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the canonical claim schema.
    Fields,

    /// Suggest a column mapping for a claims export.
    Suggest(SuggestArgs),

    /// Standardise a claims export under a confirmed mapping.
    Standardise(StandardiseArgs),

    /// Run a segment query over a standardised file.
    Report(ReportArgs),
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Path to the claims CSV export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the suggested mapping as JSON for review and editing.
    #[arg(long = "mapping-out", value_name = "PATH")]
    pub mapping_out: Option<PathBuf>,

    /// Only auto-accept suggestions at or above this confidence;
    /// weaker ones are listed for manual mapping.
    #[arg(long = "min-confidence", value_name = "F", default_value_t = 0.0)]
    pub min_confidence: f32,
}

#[derive(Parser)]
pub struct StandardiseArgs {
    /// Path to the claims CSV export.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Path to the confirmed mapping JSON.
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: PathBuf,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Standardise and report without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to a standardised claims CSV.
    #[arg(value_name = "STANDARDISED_FILE")]
    pub file: PathBuf,

    /// Segment query to run.
    #[arg(long = "query", value_enum)]
    pub query: QueryArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum QueryArg {
    /// Claims above 70% of the sum insured.
    HighValue,
    /// Claims at or above 100% of the sum insured.
    SumInsuredExhausted,
    /// Injury and external-cause claims (ICD S/T).
    Injury,
    /// Infectious disease claims (ICD A).
    Infectious,
    /// Pregnancy and childbirth claims (ICD O).
    Maternity,
    /// Claims for parents and parents-in-law.
    Parental,
    /// Claim share per relation.
    ByRelation,
    /// Claim share per claim type.
    ByClaimType,
    /// Claim share per claim status.
    ByStatus,
    /// Claim counts by location and claim type.
    ByClaimTypeByLocation,
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
