//! `hoptrace stats` command implementation.

use std::path::Path;

use colored::Colorize;
use hoptrace::loader;
use hoptrace::output::{self, StatsReport};

/// Run the stats command.
pub fn run(graph_file: &Path, json: bool) -> Result<(), hoptrace::Error> {
    let graph = loader::load_graph(graph_file)?;

    let report = StatsReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    };
    if json {
        return output::print_json(&report);
    }

    println!(
        "{} nodes, {} edges",
        report.nodes.to_string().green().bold(),
        report.edges.to_string().green().bold()
    );
    Ok(())
}
