//! Construction of DiGraph instances — named edge lists and random generation.

use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::types::{Edge, GraphResult, Node, NodeId};

use super::DiGraph;

/// Builder for constructing a DiGraph from named edges.
///
/// Names are interned on first appearance; the order of first appearance
/// fixes node identity and id order. The name map lives only inside the
/// builder: the finished graph looks nodes up by id, or by linear name scan,
/// never through an index.
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    by_name: HashMap<String, NodeId>,
    next_id: NodeId,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            by_name: HashMap::new(),
            next_id: 0,
        }
    }

    /// Intern a name, creating a node on first appearance.
    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.by_name.insert(name.to_string(), id);
        self.nodes.push(Node::new(id, name));
        id
    }

    /// Record a directed edge between two named nodes.
    pub fn edge(&mut self, src: &str, dst: &str) -> &mut Self {
        let source = self.intern(src);
        let dest = self.intern(dst);
        self.edges.push(Edge::new(source, dest));
        self
    }

    /// Build the final DiGraph: register all nodes, then all edges.
    pub fn build(self) -> GraphResult<DiGraph> {
        let mut graph = DiGraph::new();
        for node in self.nodes {
            graph.add_node(node)?;
        }
        for edge in self.edges {
            graph.add_edge(edge)?;
        }
        debug!(
            "built graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Build a graph directly from (source-name, destination-name) pairs.
    pub fn from_edges<'a, I>(pairs: I) -> GraphResult<DiGraph>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut builder = Self::new();
        for (src, dst) in pairs {
            builder.edge(src, dst);
        }
        builder.build()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random directed graph.
///
/// Creates `num_nodes` nodes named by their index, then for every ordered
/// pair (i, j) with i != j adds the edge i->j iff an independent uniform
/// draw falls below `edge_density`. Expected edge count is
/// `edge_density * num_nodes * (num_nodes - 1)`; self-loops are never
/// generated.
pub fn random_graph(
    num_nodes: usize,
    edge_density: f64,
    rng: &mut impl Rng,
) -> GraphResult<DiGraph> {
    let mut graph = DiGraph::new();
    for i in 0..num_nodes {
        graph.add_node(Node::new(i as NodeId, i.to_string()))?;
    }
    for i in 0..num_nodes {
        for j in 0..num_nodes {
            if i != j && rng.gen::<f64>() < edge_density {
                graph.add_edge(Edge::new(i as NodeId, j as NodeId))?;
            }
        }
    }
    debug!(
        "random graph: {} nodes, {} edges at density {}",
        graph.node_count(),
        graph.edge_count(),
        edge_density
    );
    Ok(graph)
}
