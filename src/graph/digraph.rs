//! Core graph structure — nodes + insertion-ordered adjacency.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeId};

/// An owning directed graph.
///
/// Holds every registered node plus a per-node adjacency sequence of
/// out-neighbors. Insertion order is preserved and parallel edges are kept;
/// construction fully precedes querying, so nothing here mutates during
/// traversal.
pub struct DiGraph {
    /// All nodes, in registration order.
    nodes: Vec<Node>,
    /// Adjacency: source id -> destination ids, in insertion order.
    /// Key presence defines registration.
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    /// Total number of edges added.
    edge_count: usize,
}

impl DiGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Number of registered nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether a node id is registered.
    pub fn has_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Get a node by id.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        // Fast path: sequential ids line up with registration order
        let idx = id as usize;
        if idx < self.nodes.len() && self.nodes[idx].id == id {
            return Some(&self.nodes[idx]);
        }
        self.nodes.iter().find(|n| n.id == id)
    }

    /// All nodes, in registration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Ids of all nodes, in registration order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    /// Register a new node.
    pub fn add_node(&mut self, node: Node) -> GraphResult<()> {
        if self.has_node(node.id) {
            return Err(GraphError::DuplicateNode(node.id));
        }
        self.adjacency.insert(node.id, Vec::new());
        self.nodes.push(node);
        Ok(())
    }

    /// Add a directed edge between two registered nodes.
    ///
    /// Appends the destination to the source's adjacency sequence. Duplicate
    /// edges and self-loops are accepted as given.
    pub fn add_edge(&mut self, edge: Edge) -> GraphResult<()> {
        if !self.has_node(edge.dest) {
            return Err(GraphError::MissingNode(edge.dest));
        }
        let children = self
            .adjacency
            .get_mut(&edge.source)
            .ok_or(GraphError::MissingNode(edge.source))?;
        children.push(edge.dest);
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbors of a node, failing if the node is absent.
    pub fn children_of(&self, id: NodeId) -> GraphResult<&[NodeId]> {
        self.adjacency
            .get(&id)
            .map(Vec::as_slice)
            .ok_or(GraphError::MissingNode(id))
    }

    /// Out-neighbors of a node; empty for unknown ids.
    pub fn out_neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Find a node by name. Linear scan over registered nodes.
    pub fn find_node_by_name(&self, name: &str) -> GraphResult<&Node> {
        self.nodes
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| GraphError::NameNotFound(name.to_string()))
    }
}

impl Default for DiGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DiGraph {
    /// One `src->dst` line per edge, in node registration order. Debug aid,
    /// not a wire format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for node in &self.nodes {
            for &dest in self.out_neighbors(node.id) {
                let dest_name = self.node(dest).map(|n| n.name.as_str()).unwrap_or("?");
                if !first {
                    writeln!(f)?;
                }
                write!(f, "{}->{}", node.name, dest_name)?;
                first = false;
            }
        }
        Ok(())
    }
}
