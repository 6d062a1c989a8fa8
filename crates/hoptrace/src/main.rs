//! Hoptrace CLI - latency queries over a service hop graph.
//!
//! Loads an edge-list file and answers weight, count, and shortest-path
//! queries against it.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Hoptrace: latency metrics over a service hop graph.
#[derive(Parser)]
#[command(name = "hoptrace")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Edge-list file (records like "A-B-5", comma or whitespace separated)
    #[arg(short, long, global = true)]
    graph: Option<PathBuf>,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sum the latency along an explicit route
    Weight {
        /// Comma-separated node names (e.g. "A,B,C")
        route: String,
    },

    /// Count traces satisfying a hop or latency bound
    Count {
        /// Start node
        start: String,

        /// End node (defaults to the start node: closed-walk queries)
        end: Option<String>,

        /// Count closed walks with at most this many hops
        #[arg(long, conflicts_with_all = ["exact_hops", "max_latency"])]
        max_hops: Option<u32>,

        /// Count traces with exactly this many hops
        #[arg(long, conflicts_with = "max_latency")]
        exact_hops: Option<u32>,

        /// Count closed walks with total latency strictly below this
        #[arg(long)]
        max_latency: Option<u32>,
    },

    /// Find the lowest-latency trace between two services
    Shortest {
        /// Start node
        start: String,

        /// End node (defaults to the start node: shortest cycle)
        end: Option<String>,
    },

    /// Show node and edge counts of the loaded graph
    Stats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let Some(graph_file) = cli.graph else {
        eprintln!(
            "{}: no graph file given (use --graph <FILE>)",
            "error".red().bold()
        );
        return ExitCode::FAILURE;
    };

    let result = match cli.command {
        Commands::Weight { route } => cli::weight::run(&graph_file, &route, cli.json),
        Commands::Count {
            start,
            end,
            max_hops,
            exact_hops,
            max_latency,
        } => cli::count::run(
            &graph_file,
            &start,
            end.as_deref(),
            max_hops,
            exact_hops,
            max_latency,
            cli.json,
        ),
        Commands::Shortest { start, end } => {
            cli::shortest::run(&graph_file, &start, end.as_deref(), cli.json)
        }
        Commands::Stats => cli::stats::run(&graph_file, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            ExitCode::FAILURE
        }
    }
}
