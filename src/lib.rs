//! PathBench — directed-graph shortest paths, cross-checked and benchmarked.
//!
//! Builds directed graphs from named edge lists or a randomized generator,
//! finds shortest paths with two independent algorithms (queue-of-paths BFS
//! and memoized recursive DFS), validates the two against each other, and
//! reports per-algorithm timing statistics across randomized trials.

pub mod cli;
pub mod graph;
pub mod harness;
pub mod path;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{random_graph, DiGraph, GraphBuilder};
pub use harness::{benchmark_pathfinding, BenchmarkReport, Stats};
pub use path::{bfs_shortest_path, check_consistency, dfs_shortest_path};
pub use types::{Edge, Finder, GraphError, GraphResult, HopViolation, Node, NodeId, Path};
