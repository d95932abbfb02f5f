//! BFS/DFS behavior: the city scenario, finder agreement, unreachability.

use pathbench::graph::{DiGraph, GraphBuilder};
use pathbench::path::{bfs_shortest_path, check_consistency, dfs_shortest_path, invalid_hops};
use pathbench::types::{Edge, Finder, GraphError, Node, NodeId, Path};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn city() -> DiGraph {
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
    .unwrap()
}

fn names(graph: &DiGraph, path: &Path) -> Vec<String> {
    path.iter()
        .map(|&id| graph.node(id).unwrap().name().to_string())
        .collect()
}

fn id_of(graph: &DiGraph, name: &str) -> NodeId {
    graph.find_node_by_name(name).unwrap().id
}

// ==================== City Graph Scenario ====================

#[test]
fn test_bfs_boston_to_phoenix() {
    let graph = city();
    let path = bfs_shortest_path(&graph, id_of(&graph, "Boston"), id_of(&graph, "Phoenix"))
        .unwrap()
        .expect("Boston -> Phoenix should be reachable");
    assert_eq!(
        names(&graph, &path),
        ["Boston", "New York", "Chicago", "Denver", "Phoenix"]
    );
}

#[test]
fn test_dfs_boston_to_phoenix() {
    let graph = city();
    let path = dfs_shortest_path(&graph, id_of(&graph, "Boston"), id_of(&graph, "Phoenix"))
        .unwrap()
        .expect("Boston -> Phoenix should be reachable");
    assert_eq!(
        names(&graph, &path),
        ["Boston", "New York", "Chicago", "Denver", "Phoenix"]
    );
}

#[test]
fn test_phoenix_to_boston_has_no_path() {
    let graph = city();
    let start = id_of(&graph, "Phoenix");
    let dest = id_of(&graph, "Boston");

    assert!(bfs_shortest_path(&graph, start, dest).unwrap().is_none());
    assert!(dfs_shortest_path(&graph, start, dest).unwrap().is_none());
}

#[test]
fn test_start_equals_dest_is_singleton() {
    let graph = city();
    let boston = id_of(&graph, "Boston");

    let bfs = bfs_shortest_path(&graph, boston, boston).unwrap().unwrap();
    let dfs = dfs_shortest_path(&graph, boston, boston).unwrap().unwrap();
    assert_eq!(bfs, vec![boston]);
    assert_eq!(dfs, vec![boston]);
}

#[test]
fn test_los_angeles_unreachable_from_boston() {
    let graph = city();
    let start = id_of(&graph, "Boston");
    let dest = id_of(&graph, "Los Angeles");

    assert!(bfs_shortest_path(&graph, start, dest).unwrap().is_none());
    assert!(dfs_shortest_path(&graph, start, dest).unwrap().is_none());
}

#[test]
fn test_repeated_queries_are_idempotent() {
    let graph = city();
    let start = id_of(&graph, "Providence");
    let dest = id_of(&graph, "Phoenix");

    let first_bfs = bfs_shortest_path(&graph, start, dest).unwrap().unwrap();
    let second_bfs = bfs_shortest_path(&graph, start, dest).unwrap().unwrap();
    assert_eq!(first_bfs, second_bfs);

    let first_dfs = dfs_shortest_path(&graph, start, dest).unwrap().unwrap();
    let second_dfs = dfs_shortest_path(&graph, start, dest).unwrap().unwrap();
    assert_eq!(first_dfs.len(), second_dfs.len());
    assert_eq!(first_dfs, second_dfs);
}

#[test]
fn test_missing_query_node_errors() {
    let graph = city();
    let boston = id_of(&graph, "Boston");

    let result = bfs_shortest_path(&graph, 99, boston);
    match result.unwrap_err() {
        GraphError::MissingNode(99) => {}
        e => panic!("Expected MissingNode(99), got {:?}", e),
    }

    let result = dfs_shortest_path(&graph, boston, 99);
    match result.unwrap_err() {
        GraphError::MissingNode(99) => {}
        e => panic!("Expected MissingNode(99), got {:?}", e),
    }
}

// ==================== Finder Agreement ====================

#[test]
fn test_city_graph_all_pairs_agree() {
    let graph = city();
    let ids = graph.node_ids();

    for &start in &ids {
        for &dest in &ids {
            let bfs = bfs_shortest_path(&graph, start, dest).unwrap();
            let dfs = dfs_shortest_path(&graph, start, dest).unwrap();

            match (&bfs, &dfs) {
                (Some(b), Some(d)) => {
                    assert_eq!(b.len(), d.len(), "length mismatch for {} -> {}", start, dest);
                    assert!(invalid_hops(&graph, b, Finder::Bfs).is_empty());
                    assert!(invalid_hops(&graph, d, Finder::Dfs).is_empty());
                }
                (None, None) => {}
                _ => panic!("reachability mismatch for {} -> {}", start, dest),
            }
            check_consistency(&graph, bfs.as_ref(), dfs.as_ref()).unwrap();
        }
    }
}

/// Random DAG: edges only run from lower to higher ids.
fn random_dag(num_nodes: usize, density: f64, rng: &mut StdRng) -> DiGraph {
    let mut graph = DiGraph::new();
    for i in 0..num_nodes {
        graph.add_node(Node::new(i as NodeId, i.to_string())).unwrap();
    }
    for i in 0..num_nodes {
        for j in (i + 1)..num_nodes {
            if rng.gen::<f64>() < density {
                graph.add_edge(Edge::new(i as NodeId, j as NodeId)).unwrap();
            }
        }
    }
    graph
}

#[test]
fn test_random_dags_all_pairs_agree() {
    for seed in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_dag(20, 0.15, &mut rng);
        let ids = graph.node_ids();

        for &start in &ids {
            for &dest in &ids {
                let bfs = bfs_shortest_path(&graph, start, dest).unwrap();
                let dfs = dfs_shortest_path(&graph, start, dest).unwrap();

                match (&bfs, &dfs) {
                    (Some(b), Some(d)) => {
                        assert_eq!(
                            b.len(),
                            d.len(),
                            "seed {}: length mismatch for {} -> {}",
                            seed,
                            start,
                            dest
                        );
                        assert!(invalid_hops(&graph, b, Finder::Bfs).is_empty());
                        assert!(invalid_hops(&graph, d, Finder::Dfs).is_empty());
                    }
                    (None, None) => {}
                    _ => panic!("seed {}: reachability mismatch for {} -> {}", seed, start, dest),
                }
            }
        }
    }
}

// ==================== Memoization Scope ====================

// Fixture where the (node, dest) memo entry for "x" is first written while a
// shorter exit via "m" is blocked by the recursion stack. The top-level
// result still agrees with BFS, and a fresh query from "x" sees its true
// shortest path, because each call owns its own memo.
fn memo_stress_graph() -> DiGraph {
    GraphBuilder::from_edges([
        ("s", "a"),
        ("s", "b"),
        ("a", "m"),
        ("m", "t"),
        ("m", "x"),
        ("x", "m"),
        ("x", "z"),
        ("z", "w"),
        ("w", "t"),
        ("b", "x"),
    ])
    .unwrap()
}

#[test]
fn test_memo_is_scoped_per_query() {
    let graph = memo_stress_graph();
    let s = id_of(&graph, "s");
    let t = id_of(&graph, "t");
    let x = id_of(&graph, "x");

    let bfs = bfs_shortest_path(&graph, s, t).unwrap().unwrap();
    let dfs = dfs_shortest_path(&graph, s, t).unwrap().unwrap();
    assert_eq!(bfs.len(), 4);
    assert_eq!(dfs.len(), 4);
    assert_eq!(names(&graph, &dfs), ["s", "a", "m", "t"]);

    // A fresh top-level query from x is not constrained by any previous
    // query's recursion context.
    let from_x = dfs_shortest_path(&graph, x, t).unwrap().unwrap();
    assert_eq!(names(&graph, &from_x), ["x", "m", "t"]);
    assert_eq!(
        bfs_shortest_path(&graph, x, t).unwrap().unwrap().len(),
        from_x.len()
    );
}

#[test]
fn test_dfs_tie_break_prefers_first_child_in_adjacency_order() {
    // Two equally short routes; adjacency lists "left" before "right".
    let graph = GraphBuilder::from_edges([
        ("s", "left"),
        ("s", "right"),
        ("left", "t"),
        ("right", "t"),
    ])
    .unwrap();
    let s = id_of(&graph, "s");
    let t = id_of(&graph, "t");

    let dfs = dfs_shortest_path(&graph, s, t).unwrap().unwrap();
    assert_eq!(names(&graph, &dfs), ["s", "left", "t"]);
}
