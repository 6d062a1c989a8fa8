//! Traces and explicit path weight summation.

use std::fmt;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{HopGraph, Latency};

/// A trace: an ordered sequence of node names where each consecutive pair
/// is connected by an edge.
///
/// The ordered sequence itself is the trace's identity, so traces work for
/// node names of any length. Ordering is lexicographic over the sequence,
/// which makes enumeration results deterministic when collected into a
/// `BTreeMap`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<String>);

impl Trace {
    /// Build a trace from node names.
    #[must_use]
    pub fn new(nodes: Vec<String>) -> Self {
        Self(nodes)
    }

    /// Build a trace from resolved node indices, using their display names.
    #[must_use]
    pub fn from_indices(graph: &HopGraph, indices: &[NodeIndex]) -> Self {
        Self(indices.iter().map(|&i| graph.name(i).to_string()).collect())
    }

    /// The node names, in traversal order.
    #[must_use]
    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// Number of hops (edges) in the trace.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("-"))
    }
}

/// Sum the latency along an explicit route.
///
/// Walks consecutive pairs of `route`, accumulating edge weights. Fails
/// fast with [`Error::NoSuchTrace`] on the first pair without an edge
/// (including pairs naming unknown nodes) — no partial sum is ever
/// returned. A route of fewer than two nodes has no weight and is
/// rejected as [`Error::InvalidQuery`]. The sum saturates at
/// [`u32::MAX`].
///
/// Pure function of the graph and the route; repeated calls over an
/// unchanged graph return the same answer.
pub fn trace_weight<S: AsRef<str>>(graph: &HopGraph, route: &[S]) -> Result<Latency> {
    if route.len() < 2 {
        return Err(Error::InvalidQuery(
            "a trace needs at least two nodes".to_string(),
        ));
    }

    let mut total: Latency = 0;
    for pair in route.windows(2) {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        match graph.weight(from, to) {
            Some(w) => total = total.saturating_add(w),
            None => {
                tracing::debug!(from, to, "missing hop in explicit route");
                return Err(Error::no_such_trace(from, to));
            }
        }
    }
    Ok(total)
}
