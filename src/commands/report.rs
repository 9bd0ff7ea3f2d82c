//! Rendering of component results
//!
//! - human: `connected component K:` blocks with `id(layer)` tokens
//! - json: one document with every component
//! - records: `H` header, then `C` (component) and `V` (visit) lines

use serde::Serialize;

use graphcheck_core::config::ReportMode;
use graphcheck_core::error::Result;
use graphcheck_core::format::OutputFormat;
use graphcheck_core::graph::{ComponentResult, Graph, Visit};

/// How to present an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub mode: ReportMode,
    /// Echo the adjacency first (human format only)
    pub show_graph: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    nodes: usize,
    mode: ReportMode,
    components: Vec<JsonComponent<'a>>,
}

#[derive(Serialize)]
struct JsonComponent<'a> {
    index: usize,
    visits: &'a [Visit],
    bipartite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    has_cycle: Option<bool>,
}

pub fn print(graph: &Graph, components: &[ComponentResult], opts: &ReportOptions) -> Result<()> {
    print!("{}", render(graph, components, opts)?);
    Ok(())
}

pub fn render(
    graph: &Graph,
    components: &[ComponentResult],
    opts: &ReportOptions,
) -> Result<String> {
    match opts.format {
        OutputFormat::Human => Ok(render_human(graph, components, opts)),
        OutputFormat::Json => render_json(graph, components, opts.mode),
        OutputFormat::Records => Ok(render_records(graph, components, opts.mode)),
    }
}

fn render_human(graph: &Graph, components: &[ComponentResult], opts: &ReportOptions) -> String {
    let mut out = String::new();

    if opts.show_graph && !opts.quiet {
        out.push_str(&format!("{}\n", graph.node_count()));
        for node in graph.nodes() {
            out.push_str(&format!("{}\n", node));
        }
    }

    for component in components {
        out.push_str(&format!("\nconnected component {}:\n", component.index));
        let tokens: Vec<String> = component.visits.iter().map(Visit::to_string).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
        out.push_str(if component.bipartite {
            "bipartite\n"
        } else {
            "not bipartite\n"
        });
        if opts.mode.includes_cycle() {
            out.push_str(if component.has_cycle {
                "cycle exists\n"
            } else {
                "acyclic\n"
            });
        }
    }

    out
}

fn render_json(graph: &Graph, components: &[ComponentResult], mode: ReportMode) -> Result<String> {
    let report = JsonReport {
        nodes: graph.node_count(),
        mode,
        components: components
            .iter()
            .map(|component| JsonComponent {
                index: component.index,
                visits: &component.visits,
                bipartite: component.bipartite,
                has_cycle: mode.includes_cycle().then_some(component.has_cycle),
            })
            .collect(),
    };

    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}

fn render_records(graph: &Graph, components: &[ComponentResult], mode: ReportMode) -> String {
    let mut out = format!(
        "H graphcheck=1 records=1 mode={} nodes={} components={}\n",
        mode,
        graph.node_count(),
        components.len()
    );

    for component in components {
        out.push_str(&format!(
            "C {} size={} bipartite={}",
            component.index,
            component.node_count(),
            component.bipartite
        ));
        if mode.includes_cycle() {
            out.push_str(&format!(" cycle={}", component.has_cycle));
        }
        out.push('\n');

        for visit in &component.visits {
            out.push_str(&format!(
                "V {} {} {}\n",
                component.index, visit.node, visit.layer
            ));
        }
    }

    out
}
