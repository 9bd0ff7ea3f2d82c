//! Connected component analysis
//!
//! One breadth-first traversal per component assigns layers and parents and,
//! from the edges met along the way, decides whether the component is
//! bipartite and whether it contains a cycle. Total cost is O(V + E).
//!
//! Edge classification while expanding `u` with neighbor `v`:
//! - `v` undiscovered: tree edge, `v` lands on `layer(u) + 1`.
//! - `v` on the same layer as `u`: odd cycle, so not bipartite and cyclic.
//! - `v` on another layer and neither endpoint is the other's parent:
//!   a non-tree edge, so cyclic.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::graph::types::{ComponentResult, Graph, NodeId, Visit};

/// Traversal state of one node. Moves from `Unvisited` to `Discovered`
/// exactly once per run and never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    #[default]
    Unvisited,
    Discovered {
        layer: u32,
        parent: Option<NodeId>,
    },
}

/// Options for the component analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Stop classifying already-discovered neighbors once a component is
    /// known to be both cyclic and not bipartite. Layers and visitation
    /// order are unaffected.
    pub short_circuit: bool,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        AnalyzeOptions {
            short_circuit: true,
        }
    }
}

/// Running verdict for the component being traversed
#[derive(Debug, Clone, Copy)]
struct Verdict {
    bipartite: bool,
    has_cycle: bool,
}

impl Verdict {
    fn new() -> Self {
        Verdict {
            bipartite: true,
            has_cycle: false,
        }
    }

    /// Neither flag can change any more
    fn is_settled(&self) -> bool {
        self.has_cycle && !self.bipartite
    }
}

/// Results of a full analysis run, with the final per-node state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    components: Vec<ComponentResult>,
    states: Vec<NodeState>,
}

impl Analysis {
    pub fn components(&self) -> &[ComponentResult] {
        &self.components
    }

    pub fn into_components(self) -> Vec<ComponentResult> {
        self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn state(&self, id: NodeId) -> NodeState {
        self.states.get(id.index()).copied().unwrap_or_default()
    }

    /// BFS layer assigned to `id`
    pub fn layer(&self, id: NodeId) -> Option<u32> {
        match self.state(id) {
            NodeState::Discovered { layer, .. } => Some(layer),
            NodeState::Unvisited => None,
        }
    }

    /// Node that discovered `id`; `None` for component roots
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        match self.state(id) {
            NodeState::Discovered { parent, .. } => parent,
            NodeState::Unvisited => None,
        }
    }
}

/// Breadth-first component analyzer over a borrowed graph
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'g> {
    graph: &'g Graph,
    options: AnalyzeOptions,
}

impl<'g> Analyzer<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Analyzer {
            graph,
            options: AnalyzeOptions::default(),
        }
    }

    pub fn with_options(mut self, options: AnalyzeOptions) -> Self {
        self.options = options;
        self
    }

    /// Traverse every component, rooting each at the lowest-numbered node
    /// not yet discovered. Each run starts from a fresh all-unvisited state.
    pub fn run(&self) -> Analysis {
        let mut states = vec![NodeState::Unvisited; self.graph.node_count()];
        let mut components = Vec::new();

        for root in self.graph.ids() {
            if states[root.index()] != NodeState::Unvisited {
                continue;
            }
            let component = self.traverse(&mut states, root, components.len() + 1);
            debug!(
                component = component.index,
                root = root.get(),
                nodes = component.node_count(),
                bipartite = component.bipartite,
                has_cycle = component.has_cycle,
                "component"
            );
            components.push(component);
        }

        Analysis { components, states }
    }

    fn traverse(&self, states: &mut [NodeState], root: NodeId, index: usize) -> ComponentResult {
        let mut queue = VecDeque::new();
        let mut visits = Vec::new();
        let mut verdict = Verdict::new();

        states[root.index()] = NodeState::Discovered {
            layer: 0,
            parent: None,
        };
        queue.push_back(root);

        while let Some(u) = queue.pop_front() {
            let NodeState::Discovered { layer, parent } = states[u.index()] else {
                continue;
            };
            visits.push(Visit { node: u, layer });

            for &v in self.graph.neighbors(u) {
                match states[v.index()] {
                    NodeState::Unvisited => {
                        states[v.index()] = NodeState::Discovered {
                            layer: layer + 1,
                            parent: Some(u),
                        };
                        queue.push_back(v);
                    }
                    NodeState::Discovered { .. }
                        if self.options.short_circuit && verdict.is_settled() => {}
                    NodeState::Discovered {
                        layer: v_layer,
                        parent: v_parent,
                    } => {
                        if v_layer == layer {
                            trace!(u = u.get(), v = v.get(), layer, "same_layer_edge");
                            verdict.bipartite = false;
                            verdict.has_cycle = true;
                        } else if v_parent != Some(u) && parent != Some(v) {
                            trace!(u = u.get(), v = v.get(), "cross_edge");
                            verdict.has_cycle = true;
                        }
                    }
                }
            }
        }

        ComponentResult {
            index,
            visits,
            bipartite: verdict.bipartite,
            has_cycle: verdict.has_cycle,
        }
    }
}

/// Analyze every connected component of `graph` with default options
pub fn analyze(graph: &Graph) -> Vec<ComponentResult> {
    Analyzer::new(graph).run().into_components()
}
