//! Graph model, construction, and component analysis
//!
//! - `types`: node arena, ids, and per-component results
//! - `builder`: symmetric adjacency from a parsed description
//! - `analyze`: breadth-first bipartite and cycle detection

pub mod analyze;
pub mod builder;
pub mod types;

pub use analyze::{analyze, Analysis, AnalyzeOptions, Analyzer, NodeState};
pub use builder::{build, GraphBuilder};
pub use types::{ComponentResult, Graph, Node, NodeId, Visit};
