//! Error types for the PathBench library.

use serde::Serialize;
use thiserror::Error;

use super::{NodeId, Path};

/// Which path finder produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Finder {
    /// Queue-of-paths breadth-first search.
    Bfs,
    /// Memoized recursive depth-first search.
    Dfs,
}

impl Finder {
    /// Return a human-readable name for this finder.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
        }
    }
}

impl std::fmt::Display for Finder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A hop in a returned path that is not backed by an edge in the graph.
///
/// Produced while diagnosing a consistency failure between the two finders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HopViolation {
    /// Which finder returned the offending path.
    pub finder: Finder,
    /// Hop source node.
    pub from: NodeId,
    /// Hop destination node.
    pub to: NodeId,
}

/// All errors that can occur in the PathBench library.
///
/// "No path exists" is never an error; the finders report it as `Ok(None)`.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node id was registered twice.
    #[error("Duplicate node id {0}")]
    DuplicateNode(NodeId),

    /// An edge endpoint or query node is not registered in the graph.
    #[error("Node id {0} not present in graph")]
    MissingNode(NodeId),

    /// Name lookup found no node.
    #[error("No node named {0:?}")]
    NameNotFound(String),

    /// BFS and DFS disagree on shortest-path length for the same query.
    ///
    /// Fatal to a benchmark run. Always indicates a latent bug in one of the
    /// two algorithms or in the memo-key design; must never be swallowed.
    #[error(
        "Shortest-path length mismatch: bfs found {} nodes, dfs found {} nodes ({} invalid hops)",
        .bfs.len(),
        .dfs.len(),
        .violations.len()
    )]
    InconsistentPaths {
        /// The path BFS returned.
        bfs: Path,
        /// The path DFS returned.
        dfs: Path,
        /// Hops in either path not present in the graph's adjacency.
        violations: Vec<HopViolation>,
    },
}

/// Convenience result type for PathBench operations.
pub type GraphResult<T> = Result<T, GraphError>;
