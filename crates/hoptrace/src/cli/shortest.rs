//! `hoptrace shortest` command implementation.

use std::path::Path;

use colored::Colorize;
use hoptrace::output::{self, NO_SUCH_TRACE, ShortestReport};
use hoptrace::{loader, shortest_path};

/// Run the shortest command.
///
/// With no end node this asks for the shortest cycle back to the start.
/// An unreachable end (or a node on no cycle) is an expected outcome,
/// rendered as `NO SUCH TRACE` with a success exit.
pub fn run(
    graph_file: &Path,
    start: &str,
    end: Option<&str>,
    json: bool,
) -> Result<(), hoptrace::Error> {
    let end = end.unwrap_or(start);
    let graph = loader::load_graph(graph_file)?;

    let shortest = match shortest_path(&graph, start, end) {
        Ok(sp) => Some(sp),
        Err(e) if e.is_no_trace() => None,
        Err(e) => return Err(e),
    };

    let report = ShortestReport {
        start: start.to_string(),
        end: end.to_string(),
        shortest,
    };
    if json {
        return output::print_json(&report);
    }

    match &report.shortest {
        Some(sp) => println!(
            "{} ({})",
            sp.trace,
            sp.latency.to_string().green().bold()
        ),
        None => println!(
            "{}-{}: {}",
            report.start,
            report.end,
            NO_SUCH_TRACE.yellow().bold()
        ),
    }
    Ok(())
}
