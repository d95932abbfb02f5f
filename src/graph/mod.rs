//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod digraph;

pub use builder::{random_graph, GraphBuilder};
pub use digraph::DiGraph;
