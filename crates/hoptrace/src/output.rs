//! Report writing: renders query outcomes as text or JSON.
//!
//! Failed path queries (`NoSuchTrace`/`NotFound`) are ordinary answers
//! here: text mode prints the literal [`NO_SUCH_TRACE`] string, JSON mode
//! emits `null` result fields. Everything else stays an error for the
//! caller to surface.

use serde::Serialize;

use crate::enumerate::Selection;
use crate::error::Result;
use crate::graph::Latency;
use crate::shortest::ShortestPath;
use crate::trace::Trace;

/// How a failed path query is rendered in text output.
pub const NO_SUCH_TRACE: &str = "NO SUCH TRACE";

/// Outcome of a `weight` query, ready for rendering.
#[derive(Debug, Serialize)]
pub struct WeightReport {
    /// The requested route.
    pub route: Trace,
    /// Summed latency, or `None` when the route doesn't exist.
    pub latency: Option<Latency>,
}

/// Outcome of a `count` query, ready for rendering.
#[derive(Debug, Serialize)]
pub struct CountReport {
    /// Start node of the query.
    pub start: String,
    /// End node of the query.
    pub end: String,
    /// The selection mode applied.
    pub selection: Selection,
    /// The hop or latency bound.
    pub bound: Latency,
    /// Number of qualifying traces.
    pub count: usize,
}

/// Outcome of a `shortest` query, ready for rendering.
#[derive(Debug, Serialize)]
pub struct ShortestReport {
    /// Start node of the query.
    pub start: String,
    /// End node of the query.
    pub end: String,
    /// The winning trace and latency, or `None` when no route exists.
    pub shortest: Option<ShortestPath>,
}

/// Node and edge counts of a loaded graph.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Number of distinct nodes.
    pub nodes: usize,
    /// Number of directed edges.
    pub edges: usize,
}

/// Print any report as pretty JSON on stdout.
pub fn print_json<T: Serialize>(report: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
