//! Graphcheck Core Library
//!
//! Loads undirected graphs from the adjacency text format and reports, per
//! connected component, whether it is bipartite and whether it has a cycle.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;
pub mod logging;
