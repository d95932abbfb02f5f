//! Node identity — a uniquely named vertex.

use serde::Serialize;

/// Identifier for a node within a graph.
///
/// Ids are assigned sequentially at construction time. Identity is the id,
/// not the name: two nodes carrying the same name but different ids are
/// distinct entities.
pub type NodeId = u64;

/// A named vertex in a directed graph.
///
/// Created once during construction, owned by the graph for its entire
/// lifetime, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node {
    /// Unique id within the owning graph.
    pub id: NodeId,
    /// Human-readable name.
    pub name: String,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The node's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
