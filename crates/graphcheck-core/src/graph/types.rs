use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Identity of a node, a 1-based integer in `[1, N]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Position of this node in the graph's arena
    pub(crate) fn index(&self) -> usize {
        (self.0 as usize).wrapping_sub(1)
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node and the ids of its neighbors, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    adjacency: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Node {
            id,
            adjacency: Vec::new(),
        }
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: NodeId) {
        self.adjacency.push(neighbor);
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn adjacency(&self) -> &[NodeId] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }
}

/// Formats as an input-style line: `3: 1 4 5`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.id)?;
        for neighbor in &self.adjacency {
            write!(f, " {}", neighbor)?;
        }
        Ok(())
    }
}

/// Undirected graph stored as an arena of nodes indexed by id.
///
/// Adjacency is symmetric and fixed once the graph leaves the builder.
/// Traversal state is kept by the analyzer, not here, so a `Graph` can be
/// analyzed any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        Graph { nodes }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.get() >= 1 && id.index() < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if self.contains(id) {
            self.nodes.get(id.index())
        } else {
            None
        }
    }

    /// Neighbors of `id` in declaration order; empty for unknown ids
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::adjacency).unwrap_or(&[])
    }

    /// Node ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Distinct undirected edges as `(low, high)` pairs, sorted.
    /// An edge declared from both endpoints is reported once.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges = BTreeSet::new();
        for node in &self.nodes {
            for &neighbor in node.adjacency() {
                let pair = if node.id() <= neighbor {
                    (node.id(), neighbor)
                } else {
                    (neighbor, node.id())
                };
                edges.insert(pair);
            }
        }
        edges.into_iter().collect()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }
}

/// One dequeue event of a traversal: a node and its BFS layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Visit {
    pub node: NodeId,
    pub layer: u32,
}

impl fmt::Display for Visit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node, self.layer)
    }
}

/// Verdict for one connected component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentResult {
    /// 1-based, in order of discovery
    pub index: usize,
    /// Nodes in dequeue order with their layers
    pub visits: Vec<Visit>,
    pub bipartite: bool,
    pub has_cycle: bool,
}

impl ComponentResult {
    pub fn node_count(&self) -> usize {
        self.visits.len()
    }

    /// The node the traversal started from
    pub fn root(&self) -> Option<NodeId> {
        self.visits.first().map(|visit| visit.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(adjacency: &[&[u32]]) -> Graph {
        let nodes = adjacency
            .iter()
            .enumerate()
            .map(|(i, neighbors)| {
                let mut node = Node::new(NodeId::new(i as u32 + 1));
                for &n in *neighbors {
                    node.push_neighbor(NodeId::new(n));
                }
                node
            })
            .collect();
        Graph::from_nodes(nodes)
    }

    #[test]
    fn test_node_display_matches_input_format() {
        let graph = graph_with(&[&[2, 3], &[1], &[1]]);
        let first = graph.node(NodeId::new(1)).unwrap();
        assert_eq!(first.to_string(), "1: 2 3");
    }

    #[test]
    fn test_isolated_node_display_has_bare_colon() {
        let graph = graph_with(&[&[]]);
        assert_eq!(graph.node(NodeId::new(1)).unwrap().to_string(), "1:");
    }

    #[test]
    fn test_contains_rejects_zero_and_overflow() {
        let graph = graph_with(&[&[], &[]]);
        assert!(!graph.contains(NodeId::new(0)));
        assert!(graph.contains(NodeId::new(1)));
        assert!(graph.contains(NodeId::new(2)));
        assert!(!graph.contains(NodeId::new(3)));
        assert!(graph.neighbors(NodeId::new(0)).is_empty());
    }

    #[test]
    fn test_edges_deduplicate_both_directions() {
        // Path 1-2-3 declared from both sides
        let graph = graph_with(&[&[2], &[1, 3], &[2]]);
        assert_eq!(
            graph.edges(),
            vec![
                (NodeId::new(1), NodeId::new(2)),
                (NodeId::new(2), NodeId::new(3)),
            ]
        );
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_visit_display() {
        let visit = Visit {
            node: NodeId::new(7),
            layer: 2,
        };
        assert_eq!(visit.to_string(), "7(2)");
    }

    #[test]
    fn test_component_root_is_first_visit() {
        let component = ComponentResult {
            index: 1,
            visits: vec![
                Visit {
                    node: NodeId::new(4),
                    layer: 0,
                },
                Visit {
                    node: NodeId::new(5),
                    layer: 1,
                },
            ],
            bipartite: true,
            has_cycle: false,
        };
        assert_eq!(component.root(), Some(NodeId::new(4)));
        assert_eq!(component.node_count(), 2);
    }
}
