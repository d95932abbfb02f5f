//! Randomized benchmarking of the two path finders.

use std::time::Instant;

use log::{debug, trace};
use rand::Rng;
use serde::Serialize;

use crate::graph::DiGraph;
use crate::path::{bfs_shortest_path, check_consistency, dfs_shortest_path};
use crate::types::{GraphResult, NodeId};

use super::Stats;

/// Per-algorithm timing statistics for one benchmark run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BenchmarkReport {
    /// BFS timing statistics, seconds.
    pub bfs: Stats,
    /// DFS timing statistics, seconds.
    pub dfs: Stats,
}

/// Run `num_trials` random (start, dest) queries against `graph`, timing both
/// finders independently and consistency-checking every trial.
///
/// Start and destination are sampled uniformly with replacement from `nodes`
/// and may coincide. Each timing wraps a single synchronous call with a
/// monotonic clock; no wall-clock limit is enforced per trial. A consistency
/// failure aborts the whole run.
pub fn benchmark_pathfinding(
    graph: &DiGraph,
    nodes: &[NodeId],
    num_trials: usize,
    rng: &mut impl Rng,
) -> GraphResult<BenchmarkReport> {
    let mut bfs_times = Vec::with_capacity(num_trials);
    let mut dfs_times = Vec::with_capacity(num_trials);

    if !nodes.is_empty() {
        for trial in 0..num_trials {
            let start = nodes[rng.gen_range(0..nodes.len())];
            let dest = nodes[rng.gen_range(0..nodes.len())];
            trace!("trial {}: {} -> {}", trial, start, dest);

            let t = Instant::now();
            let bfs_path = bfs_shortest_path(graph, start, dest)?;
            bfs_times.push(t.elapsed().as_secs_f64());

            let t = Instant::now();
            let dfs_path = dfs_shortest_path(graph, start, dest)?;
            dfs_times.push(t.elapsed().as_secs_f64());

            check_consistency(graph, bfs_path.as_ref(), dfs_path.as_ref())?;
        }
    }

    debug!(
        "benchmark finished: {} trials on {} nodes",
        bfs_times.len(),
        nodes.len()
    );

    Ok(BenchmarkReport {
        bfs: Stats::from_samples(&bfs_times),
        dfs: Stats::from_samples(&dfs_times),
    })
}
