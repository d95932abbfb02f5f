//! Shortest-path algorithms and their cross-check.

pub mod bfs;
pub mod check;
pub mod dfs;

pub use bfs::bfs_shortest_path;
pub use check::{check_consistency, invalid_hops};
pub use dfs::dfs_shortest_path;
