//! Cross-checking the two path finders against each other.

use crate::graph::DiGraph;
use crate::types::{Finder, GraphError, GraphResult, HopViolation, Path};

/// Collect the hops of `path` that are not backed by an edge in `graph`.
pub fn invalid_hops(graph: &DiGraph, path: &Path, finder: Finder) -> Vec<HopViolation> {
    let mut violations = Vec::new();
    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if !graph.out_neighbors(from).contains(&to) {
            violations.push(HopViolation { finder, from, to });
        }
    }
    violations
}

/// Assert that the two finders agree for one query.
///
/// Both claim shortest-path optimality, so when both return a path the
/// lengths must match. On a mismatch every hop of both paths is re-validated
/// against the graph's adjacency and the failure surfaces as
/// `InconsistentPaths`, carrying both paths plus the offending hops.
///
/// A query where only one finder found a path is not compared.
pub fn check_consistency(
    graph: &DiGraph,
    bfs: Option<&Path>,
    dfs: Option<&Path>,
) -> GraphResult<()> {
    let (Some(bfs), Some(dfs)) = (bfs, dfs) else {
        return Ok(());
    };
    if bfs.len() == dfs.len() {
        return Ok(());
    }

    let mut violations = invalid_hops(graph, bfs, Finder::Bfs);
    violations.extend(invalid_hops(graph, dfs, Finder::Dfs));

    Err(GraphError::InconsistentPaths {
        bfs: bfs.clone(),
        dfs: dfs.clone(),
        violations,
    })
}
