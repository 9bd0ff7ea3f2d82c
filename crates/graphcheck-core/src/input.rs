//! Loader for the textual adjacency format
//!
//! ```text
//! 4
//! 1: 2 4
//! 2: 1 3
//! 3: 2 4
//! 4: 1 3
//! ```
//!
//! The first line is the node count `N`, followed by exactly `N` lines of
//! the form `id: neighbor...` for ids `1..=N` in order. A node line may have
//! nothing after the colon. Trailing blank lines are ignored.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::bail_malformed;
use crate::error::{GraphError, Result};

/// Neighbors declared on one node line, with the file line they came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeLine {
    /// 1-based line number in the source text
    pub line: usize,
    pub neighbors: Vec<u32>,
}

/// Parsed but not yet validated graph description.
/// `nodes[i]` holds the declarations for node `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    pub node_count: u32,
    pub nodes: Vec<NodeLine>,
}

impl AdjacencyList {
    /// Number of neighbor entries across all lines
    pub fn declared_edges(&self) -> usize {
        self.nodes.iter().map(|node| node.neighbors.len()).sum()
    }
}

/// Read and parse a graph description file.
/// Invalid UTF-8 is malformed input at the line where it starts.
pub fn load_path(path: &Path) -> Result<AdjacencyList> {
    let bytes =
        fs::read(path).map_err(|e| GraphError::io_operation("read", path.display(), e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        GraphError::malformed(line, "invalid UTF-8")
    })?;
    let list = parse_str(&content)?;
    debug!(
        path = %path.display(),
        nodes = list.node_count,
        declared_edges = list.declared_edges(),
        "load_input"
    );
    Ok(list)
}

/// Parse a graph description from text
pub fn parse_str(content: &str) -> Result<AdjacencyList> {
    let mut lines = content.lines().enumerate().map(|(i, text)| (i + 1, text));

    let Some((_, header)) = lines.next() else {
        bail_malformed!(1, "missing node count");
    };
    let node_count = parse_node_count(header)?;

    // The count is untrusted until its lines are read, so grow as they arrive
    let mut nodes = Vec::new();
    let mut last_line = 1;
    for expected in 1..=node_count {
        let Some((line, text)) = lines.next() else {
            bail_malformed!(
                last_line + 1,
                "expected a line for node {} of {}, found end of input",
                expected,
                node_count
            );
        };
        nodes.push(parse_node_line(line, expected, text)?);
        last_line = line;
    }

    for (line, text) in lines {
        if !text.trim().is_empty() {
            bail_malformed!(
                line,
                "unexpected content after {} node lines: `{}`",
                node_count,
                text.trim()
            );
        }
    }

    Ok(AdjacencyList { node_count, nodes })
}

fn parse_node_count(header: &str) -> Result<u32> {
    let token = header.trim();
    token.parse::<u32>().map_err(|_| {
        GraphError::malformed(
            1,
            format!("node count `{}` is not a non-negative integer", token),
        )
    })
}

fn parse_node_line(line: usize, expected: u32, text: &str) -> Result<NodeLine> {
    let Some((id_part, rest)) = text.split_once(':') else {
        bail_malformed!(
            line,
            "expected `{}: <neighbors>`, found `{}`",
            expected,
            text.trim()
        );
    };

    let id_token = id_part.trim();
    let id = id_token.parse::<u32>().map_err(|_| {
        GraphError::malformed(line, format!("node id `{}` is not an integer", id_token))
    })?;
    if id != expected {
        bail_malformed!(line, "expected node {}, found node {}", expected, id);
    }

    let neighbors = rest
        .split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| {
                GraphError::malformed(
                    line,
                    format!("neighbor `{}` of node {} is not an integer", token, id),
                )
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(NodeLine { line, neighbors })
}
