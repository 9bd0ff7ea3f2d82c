//! Run one analysis: config, load, build, analyze, report
use std::time::Instant;

use graphcheck_core::config::Config;
use graphcheck_core::error::Result;
use graphcheck_core::graph::{self, AnalyzeOptions, Analyzer};
use graphcheck_core::input;
use graphcheck_core::trace_time;

use crate::cli::Cli;
use crate::commands::report::{self, ReportOptions};

pub const USAGE: &str = "Usage: graphcheck <INPUT>";

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let Some(input_path) = cli.input.as_deref() else {
        println!("{}", USAGE);
        return Ok(());
    };

    let config = Config::load(cli.config.as_deref())?;
    trace_time!(start, "load_config");

    let (analyze_options, report_options) = resolve_options(cli, &config);

    let list = input::load_path(input_path)?;
    trace_time!(start, "load_input");

    let graph = graph::build(&list)?;
    trace_time!(start, "build_graph", nodes = graph.node_count());

    let analysis = Analyzer::new(&graph).with_options(analyze_options).run();
    trace_time!(start, "analyze", components = analysis.component_count());

    report::print(&graph, analysis.components(), &report_options)?;
    trace_time!(start, "report");

    Ok(())
}

/// Merge CLI flags over config file settings
fn resolve_options(cli: &Cli, config: &Config) -> (AnalyzeOptions, ReportOptions) {
    let mut analyze_options = config.analyze_options();
    if cli.no_short_circuit {
        analyze_options.short_circuit = false;
    }

    let report_options = ReportOptions {
        format: cli.format,
        mode: cli.mode.unwrap_or(config.report.mode),
        show_graph: cli.show_graph || config.report.show_graph,
        quiet: cli.quiet,
    };

    (analyze_options, report_options)
}
