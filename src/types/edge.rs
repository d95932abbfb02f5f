//! The directed edge struct.

use serde::Serialize;

use super::NodeId;

/// A directed connection between two nodes.
///
/// Not retained as a standalone entity after insertion: adding an edge
/// extends the source node's adjacency sequence and nothing else. Parallel
/// edges, anti-parallel edges and self-loops are all structurally legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node id (origin).
    pub source: NodeId,
    /// Destination node id.
    pub dest: NodeId,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: NodeId, dest: NodeId) -> Self {
        Self { source, dest }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.dest)
    }
}
