//! `hoptrace count` command implementation.

use std::path::Path;

use colored::Colorize;
use hoptrace::output::{self, CountReport};
use hoptrace::{Error, Selection, count_paths, loader};

/// Run the count command.
///
/// Exactly one of the three bound flags selects the enumeration mode;
/// the end node defaults to the start node for closed-walk queries.
pub fn run(
    graph_file: &Path,
    start: &str,
    end: Option<&str>,
    max_hops: Option<u32>,
    exact_hops: Option<u32>,
    max_latency: Option<u32>,
    json: bool,
) -> Result<(), Error> {
    let (selection, bound) = match (max_hops, exact_hops, max_latency) {
        (Some(bound), None, None) => (Selection::MaxHops, bound),
        (None, Some(bound), None) => (Selection::ExactHops, bound),
        (None, None, Some(bound)) => (Selection::MaxLatency, bound),
        _ => {
            return Err(Error::InvalidQuery(
                "pass exactly one of --max-hops, --exact-hops, --max-latency".to_string(),
            ));
        }
    };
    let end = end.unwrap_or(start);

    let graph = loader::load_graph(graph_file)?;
    let count = count_paths(&graph, start, end, selection, bound)?;

    let report = CountReport {
        start: start.to_string(),
        end: end.to_string(),
        selection,
        bound,
        count,
    };
    if json {
        return output::print_json(&report);
    }

    let noun = if count == 1 { "trace" } else { "traces" };
    println!(
        "{} {noun} {}-{}",
        count.to_string().green().bold(),
        report.start,
        report.end
    );
    Ok(())
}
