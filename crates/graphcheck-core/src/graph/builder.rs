use tracing::debug;

use crate::bail_malformed;
use crate::error::Result;
use crate::graph::types::{Graph, Node, NodeId};
use crate::input::AdjacencyList;

/// Accumulates undirected edges over a fixed set of `N` nodes.
///
/// Every declared edge is added to both endpoints. Declaring the same edge
/// from both sides is not an error; it leaves duplicate neighbor entries.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
}

impl GraphBuilder {
    pub fn new(node_count: u32) -> Self {
        let nodes = (1..=node_count).map(|raw| Node::new(NodeId::new(raw))).collect();
        GraphBuilder { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Add the undirected edge `from`-`to`
    pub fn add_edge(&mut self, from: u32, to: u32) -> Result<()> {
        self.add_declared_edge(0, from, to)
    }

    fn add_declared_edge(&mut self, line: usize, from: u32, to: u32) -> Result<()> {
        let count = self.nodes.len();
        let in_range = |raw: u32| raw >= 1 && (raw as usize) <= count;

        if !in_range(from) {
            bail_malformed!(line, "node id {} out of range [1, {}]", from, count);
        }
        if !in_range(to) {
            bail_malformed!(
                line,
                "neighbor id {} of node {} out of range [1, {}]",
                to,
                from,
                count
            );
        }

        let (from, to) = (NodeId::new(from), NodeId::new(to));
        self.nodes[from.index()].push_neighbor(to);
        self.nodes[to.index()].push_neighbor(from);
        Ok(())
    }

    pub fn finish(self) -> Graph {
        Graph::from_nodes(self.nodes)
    }
}

/// Build a graph from a parsed description. Fails without exposing a
/// partial graph if any neighbor id is out of range.
pub fn build(list: &AdjacencyList) -> Result<Graph> {
    let mut builder = GraphBuilder::new(list.node_count);
    for (from, node_line) in (1u32..).zip(&list.nodes) {
        for &to in &node_line.neighbors {
            builder.add_declared_edge(node_line.line, from, to)?;
        }
    }

    let graph = builder.finish();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "build_graph"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::input::parse_str;

    fn ids(raw: &[u32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    #[test]
    fn test_empty_graph() {
        let graph = build(&AdjacencyList::default()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_isolated_nodes() {
        let graph = build(&parse_str("3\n1:\n2:\n3:\n").unwrap()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert!(graph.nodes().all(|node| node.degree() == 0));
    }

    #[test]
    fn test_single_sided_declaration_is_symmetric() {
        let graph = build(&parse_str("3\n1: 2 3\n2:\n3:\n").unwrap()).unwrap();
        assert_eq!(graph.neighbors(NodeId::new(1)), ids(&[2, 3]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(2)), ids(&[1]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(3)), ids(&[1]).as_slice());
    }

    #[test]
    fn test_double_sided_declaration_duplicates_entries() {
        let graph = build(&parse_str("2\n1: 2\n2: 1\n").unwrap()).unwrap();
        assert_eq!(graph.neighbors(NodeId::new(1)), ids(&[2, 2]).as_slice());
        assert_eq!(graph.neighbors(NodeId::new(2)), ids(&[1, 1]).as_slice());
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_adjacency_keeps_declaration_order() {
        let graph = build(&parse_str("4\n1: 4 2\n2:\n3: 1\n4:\n").unwrap()).unwrap();
        assert_eq!(graph.neighbors(NodeId::new(1)), ids(&[4, 2, 3]).as_slice());
    }

    #[test]
    fn test_out_of_range_neighbor_names_line() {
        let err = build(&parse_str("3\n1: 2\n2: 99\n3:\n").unwrap()).unwrap_err();
        match err {
            GraphError::MalformedInput { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("99"));
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_neighbor_is_out_of_range() {
        let err = build(&parse_str("1\n1: 0\n").unwrap()).unwrap_err();
        assert!(matches!(err, GraphError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_builder_add_edge_validates_both_ends() {
        let mut builder = GraphBuilder::new(2);
        builder.add_edge(1, 2).unwrap();
        assert!(builder.add_edge(3, 1).is_err());
        assert!(builder.add_edge(1, 3).is_err());
        let graph = builder.finish();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_is_recorded_on_both_sides() {
        let mut builder = GraphBuilder::new(1);
        builder.add_edge(1, 1).unwrap();
        let graph = builder.finish();
        assert_eq!(graph.neighbors(NodeId::new(1)), ids(&[1, 1]).as_slice());
        assert_eq!(graph.edge_count(), 1);
    }
}
