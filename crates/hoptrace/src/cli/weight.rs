//! `hoptrace weight` command implementation.

use std::path::Path;

use colored::Colorize;
use hoptrace::output::{self, NO_SUCH_TRACE, WeightReport};
use hoptrace::{Trace, loader, trace_weight};

/// Run the weight command.
///
/// `route` is a comma-separated list of node names. A missing hop along
/// the route is an expected outcome, rendered as `NO SUCH TRACE` with a
/// success exit.
pub fn run(graph_file: &Path, route: &str, json: bool) -> Result<(), hoptrace::Error> {
    let graph = loader::load_graph(graph_file)?;

    let nodes: Vec<&str> = route.split(',').map(str::trim).collect();
    let latency = match trace_weight(&graph, &nodes) {
        Ok(latency) => Some(latency),
        Err(e) if e.is_no_trace() => None,
        Err(e) => return Err(e),
    };

    let report = WeightReport {
        route: Trace::new(nodes.iter().map(ToString::to_string).collect()),
        latency,
    };
    if json {
        return output::print_json(&report);
    }

    match report.latency {
        Some(latency) => println!(
            "{}: {}",
            report.route,
            latency.to_string().green().bold()
        ),
        None => println!("{}: {}", report.route, NO_SUCH_TRACE.yellow().bold()),
    }
    Ok(())
}
