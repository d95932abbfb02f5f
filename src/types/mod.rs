//! All data types for the PathBench library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{Finder, GraphError, GraphResult, HopViolation};
pub use node::{Node, NodeId};

/// An ordered node sequence forming a valid walk through directed edges.
///
/// The first element is the query's start, the last its destination. A
/// singleton path is the degenerate start == destination case; "unreachable"
/// is represented by the absence of a path (`Option::None`), never by an
/// empty sequence.
pub type Path = Vec<NodeId>;
