//! Build the demo city graph and route Boston -> Phoenix with both finders.

use std::time::Instant;

use pathbench::*;

fn main() -> GraphResult<()> {
    let graph = GraphBuilder::from_edges([
        ("Boston", "Providence"),
        ("Boston", "New York"),
        ("Providence", "Boston"),
        ("Providence", "New York"),
        ("New York", "Chicago"),
        ("Chicago", "Denver"),
        ("Denver", "Phoenix"),
        ("Denver", "New York"),
        ("Los Angeles", "Boston"),
    ])?;

    println!("{}\n", graph);

    let start = graph.find_node_by_name("Boston")?.id;
    let dest = graph.find_node_by_name("Phoenix")?.id;

    let t = Instant::now();
    let bfs = bfs_shortest_path(&graph, start, dest)?;
    let bfs_time = t.elapsed();

    let t = Instant::now();
    let dfs = dfs_shortest_path(&graph, start, dest)?;
    let dfs_time = t.elapsed();

    for (label, path) in [("bfs", &bfs), ("dfs", &dfs)] {
        match path {
            Some(path) => {
                let route: Vec<&str> = path
                    .iter()
                    .filter_map(|&id| graph.node(id).map(|n| n.name()))
                    .collect();
                println!("{}: {}", label, route.join(" -> "));
            }
            None => println!("{}: No path between Boston and Phoenix", label),
        }
    }

    println!("Bfs time used: {:?}", bfs_time);
    println!("Dfs time used: {:?}", dfs_time);

    Ok(())
}
