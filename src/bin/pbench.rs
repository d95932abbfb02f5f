//! CLI entry point for the `pbench` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use pathbench::cli::commands;
use pathbench::GraphError;

#[derive(Parser)]
#[command(
    name = "pbench",
    about = "PathBench CLI — cross-checked shortest-path benchmarking"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the demo city graph, one src->dst edge per line
    Show,
    /// Find a route between two named cities with both algorithms
    Route {
        /// Start node name
        start: String,
        /// Destination node name
        dest: String,
    },
    /// Benchmark both algorithms on one randomized graph
    Bench {
        /// Number of nodes
        #[arg(long, default_value = "100")]
        nodes: usize,
        /// Edge density in [0, 1]
        #[arg(long, default_value = "0.2")]
        density: f64,
        /// Number of (start, dest) trials
        #[arg(long, default_value = "100")]
        trials: usize,
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Benchmark across a sweep of graph sizes at fixed density
    Sweep {
        /// Comma-separated graph sizes
        #[arg(long, default_value = "10,50,100,150,200,250,300,350,400,450,500")]
        sizes: String,
        /// Edge density in [0, 1]
        #[arg(long, default_value = "0.2")]
        density: f64,
        /// Number of trials per size
        #[arg(long, default_value = "100")]
        trials: usize,
        /// RNG seed (random when omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Show => commands::cmd_show(json),
        Commands::Route { start, dest } => commands::cmd_route(&start, &dest, json),
        Commands::Bench {
            nodes,
            density,
            trials,
            seed,
        } => commands::cmd_bench(nodes, density, trials, seed, json),
        Commands::Sweep {
            sizes,
            density,
            trials,
            seed,
        } => {
            let sizes: Vec<usize> = sizes
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            commands::cmd_sweep(&sizes, density, trials, seed, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::NameNotFound(_) => 2,
            GraphError::DuplicateNode(_) | GraphError::MissingNode(_) => 3,
            GraphError::InconsistentPaths { .. } => 4,
        };
        process::exit(code);
    }
}
