//! Depth-first shortest path with (node, destination) memoization.

use std::collections::{HashMap, HashSet};

use crate::graph::DiGraph;
use crate::types::{GraphError, GraphResult, NodeId, Path};

/// Find a shortest path (by node count) from `start` to `dest` via recursive
/// depth-first search.
///
/// Each top-level call owns a fresh recursion-stack set and a memo keyed by
/// `(current, dest)`; the memo caches the no-path outcome too, and neither
/// structure is ever shared across independent queries. Ties between equally
/// short candidates go to the first child in adjacency order.
///
/// The memo key deliberately omits recursion-stack context, reproducing the
/// source design faithfully: a cached sub-path can in principle be reused in
/// a context whose prefix already visits one of its interior nodes. Extending
/// the key with stack context would close that gap at the cost of most memo
/// hits; see the pathfinding tests that pin the current behavior.
///
/// Returns `Ok(None)` when `dest` is unreachable from `start`.
pub fn dfs_shortest_path(
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

    let mut on_stack = HashSet::new();
    let mut memo = HashMap::new();
    Ok(shortest_from(graph, start, dest, &mut on_stack, &mut memo))
}

/// Recursive worker. `on_stack` holds the nodes of the current recursion
/// chain and must be restored on every return path; `memo` keeps completed
/// (node, dest) results for the lifetime of one top-level query.
fn shortest_from(
    graph: &DiGraph,
    current: NodeId,
    dest: NodeId,
    on_stack: &mut HashSet<NodeId>,
    memo: &mut HashMap<(NodeId, NodeId), Option<Path>>,
) -> Option<Path> {
    if current == dest {
        return Some(vec![current]);
    }
    if let Some(cached) = memo.get(&(current, dest)) {
        return cached.clone();
    }

    on_stack.insert(current);
    let mut shortest: Option<Path> = None;

    for &child in graph.out_neighbors(current) {
        if on_stack.contains(&child) {
            continue;
        }
        let Some(sub) = shortest_from(graph, child, dest, on_stack, memo) else {
            continue;
        };
        if shortest.as_ref().map_or(true, |s| sub.len() + 1 < s.len()) {
            let mut candidate = Vec::with_capacity(sub.len() + 1);
            candidate.push(current);
            candidate.extend(sub);
            shortest = Some(candidate);
        }
    }

    memo.insert((current, dest), shortest.clone());
    on_stack.remove(&current);
    shortest
}
