//! Benchmark harness — trial driver and timing statistics.

pub mod benchmark;
pub mod stats;

pub use benchmark::{benchmark_pathfinding, BenchmarkReport};
pub use stats::Stats;
