//! Benchmark both finders across increasing graph sizes at fixed density.

use rand::rngs::StdRng;
use rand::SeedableRng;

use pathbench::*;

fn main() -> GraphResult<()> {
    let mut rng = StdRng::seed_from_u64(42);

    for size in [10, 50, 100, 150, 200, 250, 300, 350, 400, 450, 500] {
        println!("\nTesting with graph size: {}", size);
        let graph = random_graph(size, 0.2, &mut rng)?;
        let ids = graph.node_ids();
        let results = benchmark_pathfinding(&graph, &ids, 100, &mut rng)?;

        println!("BFS Results:");
        println!("  Mean time:   {:.3}ms", results.bfs.mean * 1000.0);
        println!("  Median time: {:.3}ms", results.bfs.median * 1000.0);
        println!("  Std Dev:     {:.3}ms", results.bfs.std_dev * 1000.0);

        println!("\nDFS Results:");
        println!("  Mean time:   {:.3}ms", results.dfs.mean * 1000.0);
        println!("  Median time: {:.3}ms", results.dfs.median * 1000.0);
        println!("  Std Dev:     {:.3}ms", results.dfs.std_dev * 1000.0);
    }

    Ok(())
}
