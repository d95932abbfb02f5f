//! Breadth-first shortest path over whole path prefixes.

use std::collections::VecDeque;

use crate::graph::DiGraph;
use crate::types::{GraphError, GraphResult, NodeId, Path};

/// Find a shortest path (by edge count) from `start` to `dest`.
///
/// Explores whole path prefixes in FIFO order: each queued item is the entire
/// path-so-far, and the first dequeued path ending at `dest` is minimal
/// because queued lengths never decrease. A child already on the current
/// prefix is skipped, which prevents cycles within one path; distinct queued
/// prefixes may still probe the same node. That trades memory for simplicity
/// and is the intended behavior.
///
/// Returns `Ok(None)` when `dest` is unreachable from `start`.
pub fn bfs_shortest_path(
    graph: &DiGraph,
    start: NodeId,
    dest: NodeId,
) -> GraphResult<Option<Path>> {
    if !graph.has_node(start) {
        return Err(GraphError::MissingNode(start));
    }
    if !graph.has_node(dest) {
        return Err(GraphError::MissingNode(dest));
    }

    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(current) = queue.pop_front() {
        // Queued paths are never empty: they start as [start] and only grow.
        let last = current[current.len() - 1];
        if last == dest {
            return Ok(Some(current));
        }
        for &child in graph.out_neighbors(last) {
            if current.contains(&child) {
                continue;
            }
            let mut next = current.clone();
            next.push(child);
            queue.push_back(next);
        }
    }

    Ok(None)
}
