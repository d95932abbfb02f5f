//! CLI command implementations.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::graph::{random_graph, DiGraph, GraphBuilder};
use crate::harness::{benchmark_pathfinding, Stats};
use crate::path::{bfs_shortest_path, dfs_shortest_path};
use crate::types::{GraphResult, Path};

/// The nine-edge city graph used by `show` and `route`.
fn city_graph() -> GraphResult<DiGraph> {
    GraphBuilder::from_edges([
        ("Boston", "Providence"),
        ("Boston", "New York"),
        ("Providence", "Boston"),
        ("Providence", "New York"),
        ("New York", "Chicago"),
        ("Chicago", "Denver"),
        ("Denver", "Phoenix"),
        ("Denver", "New York"),
        ("Los Angeles", "Boston"),
    ])
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

/// Render a path as `A -> B -> C` using node names.
fn format_path(graph: &DiGraph, path: &Path) -> String {
    path.iter()
        .map(|&id| graph.node(id).map(|n| n.name.as_str()).unwrap_or("?"))
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn path_names(graph: &DiGraph, path: &Path) -> Vec<String> {
    path.iter()
        .map(|&id| {
            graph
                .node(id)
                .map(|n| n.name.clone())
                .unwrap_or_default()
        })
        .collect()
}

fn print_stats(label: &str, stats: &Stats) {
    println!("{} Results:", label);
    println!("  Mean time:   {:.3}ms", stats.mean * 1000.0);
    println!("  Median time: {:.3}ms", stats.median * 1000.0);
    println!("  Std Dev:     {:.3}ms", stats.std_dev * 1000.0);
}

/// Print the demo city graph, one edge per line.
pub fn cmd_show(json: bool) -> GraphResult<()> {
    let graph = city_graph()?;
    if json {
        let mut edges = Vec::new();
        for n in graph.nodes() {
            for &d in graph.out_neighbors(n.id) {
                edges.push(serde_json::json!({
                    "source": n.name,
                    "dest": graph.node(d).map(|m| m.name.clone()).unwrap_or_default(),
                }));
            }
        }
        println!(
            "{}",
            serde_json::json!({
                "nodes": graph.node_count(),
                "edges": edges,
            })
        );
    } else {
        println!("{}", graph);
    }
    Ok(())
}

/// Run both finders between two named nodes of the city graph.
pub fn cmd_route(start_name: &str, dest_name: &str, json: bool) -> GraphResult<()> {
    let graph = city_graph()?;
    let start = graph.find_node_by_name(start_name)?.id;
    let dest = graph.find_node_by_name(dest_name)?.id;

    let t = Instant::now();
    let bfs = bfs_shortest_path(&graph, start, dest)?;
    let bfs_secs = t.elapsed().as_secs_f64();

    let t = Instant::now();
    let dfs = dfs_shortest_path(&graph, start, dest)?;
    let dfs_secs = t.elapsed().as_secs_f64();

    if json {
        let render = |p: &Option<Path>| match p {
            Some(path) => serde_json::json!(path_names(&graph, path)),
            None => serde_json::Value::Null,
        };
        println!(
            "{}",
            serde_json::json!({
                "start": start_name,
                "dest": dest_name,
                "bfs": { "path": render(&bfs), "seconds": bfs_secs },
                "dfs": { "path": render(&dfs), "seconds": dfs_secs },
            })
        );
    } else {
        match &bfs {
            Some(path) => println!("bfs: {}", format_path(&graph, path)),
            None => println!("bfs: No path between {} and {}", start_name, dest_name),
        }
        match &dfs {
            Some(path) => println!("dfs: {}", format_path(&graph, path)),
            None => println!("dfs: No path between {} and {}", start_name, dest_name),
        }
        println!("bfs time: {:.3}ms", bfs_secs * 1000.0);
        println!("dfs time: {:.3}ms", dfs_secs * 1000.0);
    }
    Ok(())
}

/// Benchmark both finders on one randomized graph.
pub fn cmd_bench(
    nodes: usize,
    density: f64,
    trials: usize,
    seed: Option<u64>,
    json: bool,
) -> GraphResult<()> {
    let mut rng = rng_from(seed);
    let graph = random_graph(nodes, density, &mut rng)?;
    let ids = graph.node_ids();
    let report = benchmark_pathfinding(&graph, &ids, trials, &mut rng)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "nodes": nodes,
                "density": density,
                "trials": trials,
                "edges": graph.edge_count(),
                "report": report,
            })
        );
    } else {
        println!(
            "Graph: {} nodes, {} edges (density {})",
            nodes,
            graph.edge_count(),
            density
        );
        print_stats("BFS", &report.bfs);
        print_stats("DFS", &report.dfs);
    }
    Ok(())
}

/// Benchmark across a sweep of graph sizes at fixed density.
pub fn cmd_sweep(
    sizes: &[usize],
    density: f64,
    trials: usize,
    seed: Option<u64>,
    json: bool,
) -> GraphResult<()> {
    let mut rng = rng_from(seed);
    let mut rows = Vec::new();
    for &size in sizes {
        let graph = random_graph(size, density, &mut rng)?;
        let ids = graph.node_ids();
        let report = benchmark_pathfinding(&graph, &ids, trials, &mut rng)?;
        if json {
            rows.push(serde_json::json!({
                "size": size,
                "edges": graph.edge_count(),
                "report": report,
            }));
        } else {
            println!("\nTesting with graph size: {}", size);
            print_stats("BFS", &report.bfs);
            print_stats("DFS", &report.dfs);
        }
    }
    if json {
        println!(
            "{}",
            serde_json::json!({
                "density": density,
                "trials": trials,
                "sweep": rows,
            })
        );
    }
    Ok(())
}
