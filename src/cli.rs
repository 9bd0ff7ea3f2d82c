//! CLI argument parsing for graphcheck
//!
//! One positional input path plus report and logging flags.

pub mod parse;

use std::path::PathBuf;

use clap::Parser;

use graphcheck_core::config::ReportMode;
use graphcheck_core::format::OutputFormat;
use parse::{parse_output_format, parse_report_mode};

/// graphcheck - bipartite and cycle analysis per connected component
#[derive(Parser, Debug)]
#[command(name = "graphcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Graph description file (first line N, then `id: neighbors` per node)
    pub input: Option<PathBuf>,

    /// Report variant: `cycle` (bipartite and cycle verdicts) or `bipartite`
    #[arg(long, short, value_parser = parse_report_mode)]
    pub mode: Option<ReportMode>,

    /// Output format (human, json, records)
    #[arg(long, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Configuration file (defaults to $GRAPHCHECK_CONFIG_DIR/config.toml)
    #[arg(long, env = "GRAPHCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the loaded adjacency before the report
    #[arg(long)]
    pub show_graph: bool,

    /// Classify every edge even after a component's verdicts are settled
    #[arg(long)]
    pub no_short_circuit: bool,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    /// Log timing and per-component details
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}
