//! CLI entry point for the `gtrav` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_transport::cli::commands;
use graph_transport::types::TraversalStrategy;
use graph_transport::TraverseError;

#[derive(Parser)]
#[command(
    name = "gtrav",
    about = "gtrav: stack/queue driven graph traversal and memoized DP routines"
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
    /// Display node and edge counts of a graph file
    Info {
        /// Path to the JSON graph file
        file: PathBuf,
    },
    /// List every node reachable from a start node
    Reach {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Start node
        start: String,
        /// Traversal strategy: stack or queue
        #[arg(long, default_value = "stack")]
        strategy: String,
    },
    /// Check whether a path exists between two nodes
    HasPath {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Source node
        src: String,
        /// Destination node
        dst: String,
        /// Traversal strategy: stack or queue
        #[arg(long, default_value = "stack")]
        strategy: String,
    },
    /// Count connected components
    Components {
        /// Path to the JSON graph file
        file: PathBuf,
        /// Traversal strategy: stack or queue
        #[arg(long, default_value = "stack")]
        strategy: String,
    },
    /// Compute the n-th Fibonacci number
    Fib {
        /// Index into the sequence
        n: u32,
    },
    /// Count right/down paths through a grid
    Grid {
        /// Number of rows
        rows: u32,
        /// Number of columns
        cols: u32,
    },
    /// Check whether a target is a sum of the given numbers
    CanSum {
        /// Target sum
        target: u64,
        /// Numbers, each reusable
        numbers: Vec<u64>,
    },
    /// Find one combination of the given numbers summing to a target
    HowSum {
        /// Target sum
        target: u64,
        /// Numbers, each reusable
        numbers: Vec<u64>,
    },
}

fn parse_strategy(name: &str) -> TraversalStrategy {
    match TraversalStrategy::from_name(name) {
        Some(s) => s,
        None => {
            eprintln!("Invalid strategy: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Reach {
            file,
            start,
            strategy,
        } => commands::cmd_reach(&file, &start, parse_strategy(&strategy), json),
        Commands::HasPath {
            file,
            src,
            dst,
            strategy,
        } => commands::cmd_has_path(&file, &src, &dst, parse_strategy(&strategy), json),
        Commands::Components { file, strategy } => {
            commands::cmd_components(&file, parse_strategy(&strategy), json)
        }
        Commands::Fib { n } => commands::cmd_fib(n, json),
        Commands::Grid { rows, cols } => commands::cmd_grid(rows, cols, json),
        Commands::CanSum { target, numbers } => commands::cmd_can_sum(target, &numbers, json),
        Commands::HowSum { target, numbers } => commands::cmd_how_sum(target, &numbers, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            TraverseError::Io(_) => 1,
            TraverseError::InvalidGraphFile(_) => 2,
            TraverseError::UnsupportedStrategy(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
