//! Bounded path enumeration: the three trace-selection strategies.
//!
//! All three are depth-first walks over the read-only graph. Traversal
//! state (the growing node stack, the running weight, the result map) is
//! local to each call, so enumerations are pure with respect to the graph
//! and safe to run concurrently.

use std::collections::BTreeMap;

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::{HopGraph, Latency};
use crate::trace::Trace;

/// Safety ceiling on hop count for weight-bounded enumeration.
///
/// [`Selection::MaxLatency`] is bounded by cumulative weight, not hop
/// count, so a zero-weight cycle would otherwise never terminate. Edge
/// weights are expected to be positive; this ceiling makes the walk
/// finish even when they aren't.
pub const MAX_LATENCY_HOP_CEILING: usize = 64;

/// The enumeration criterion for [`enumerate_paths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Closed walks back to the start with at most `bound` hops.
    /// Same-node queries only.
    MaxHops,
    /// Traces from start to end with exactly `bound` hops. The walk may
    /// pass through the end node en route to a longer qualifying trace.
    ExactHops,
    /// Closed walks back to the start with cumulative weight strictly
    /// below `bound`. Same-node queries only.
    MaxLatency,
}

/// Enumerate all traces from `start` to `end` matching `selection` under
/// `bound`, mapped to their cumulative weight.
///
/// `MaxHops` and `MaxLatency` describe closed walks, so they reject
/// distinct endpoints with [`Error::InvalidQuery`]. Same-node queries
/// (any selection) first check that the node has an incoming edge from a
/// different node; without one it cannot sit on a cycle and the result is
/// empty with no search performed. Unknown node names are rejected as
/// [`Error::InvalidQuery`].
pub fn enumerate_paths(
    graph: &HopGraph,
    start: &str,
    end: &str,
    selection: Selection,
    bound: Latency,
) -> Result<BTreeMap<Trace, Latency>> {
    let s = resolve(graph, start)?;
    let e = resolve(graph, end)?;

    if s != e && matches!(selection, Selection::MaxHops | Selection::MaxLatency) {
        return Err(Error::InvalidQuery(format!(
            "{} enumeration describes closed walks; start and end must name the same node, got {start} and {end}",
            match selection {
                Selection::MaxHops => "max-hops",
                _ => "max-latency",
            },
        )));
    }

    let mut found = BTreeMap::new();
    if s == e && !graph.has_incoming_from_other(s) {
        // Not on any cycle; nothing to search.
        tracing::debug!(node = start, "no incoming edge from another node");
        return Ok(found);
    }

    let mut walk = Walk {
        graph,
        path: vec![s],
        found: &mut found,
    };
    let hop_bound = usize::try_from(bound).unwrap_or(usize::MAX);
    match selection {
        Selection::MaxHops => walk.max_hops(s, s, 0, 0, hop_bound),
        Selection::ExactHops => walk.exact_hops(e, s, 0, 0, hop_bound),
        Selection::MaxLatency => walk.max_latency(e, s, 0, 0, bound),
    }

    if found.is_empty() {
        tracing::debug!(start, end, ?selection, bound, "no qualifying traces");
    }
    Ok(found)
}

/// Count the traces matching a selection: the size of the enumeration.
pub fn count_paths(
    graph: &HopGraph,
    start: &str,
    end: &str,
    selection: Selection,
    bound: Latency,
) -> Result<usize> {
    enumerate_paths(graph, start, end, selection, bound).map(|paths| paths.len())
}

fn resolve(graph: &HopGraph, name: &str) -> Result<NodeIndex> {
    graph
        .node(name)
        .ok_or_else(|| Error::InvalidQuery(format!("unknown node '{name}'")))
}

/// One in-flight depth-first enumeration. The node stack and result map
/// live here for the duration of a single `enumerate_paths` call.
struct Walk<'a> {
    graph: &'a HopGraph,
    path: Vec<NodeIndex>,
    found: &'a mut BTreeMap<Trace, Latency>,
}

impl Walk<'_> {
    fn record(&mut self, weight: Latency) {
        self.found
            .insert(Trace::from_indices(self.graph, &self.path), weight);
    }

    /// Closed walks of at most `bound` hops. Every return to `start` is
    /// recorded (the hop count check holds by construction); a return
    /// with hops to spare continues past the start, so recorded walks may
    /// contain the start internally. Non-start nodes are only extended
    /// while another hop still fits before the closing one.
    fn max_hops(
        &mut self,
        start: NodeIndex,
        current: NodeIndex,
        hops: usize,
        weight: Latency,
        bound: usize,
    ) {
        for (next, w) in self.graph.outgoing(current) {
            let next_hops = hops + 1;
            let next_weight = weight.saturating_add(w);
            if next == start {
                if next_hops <= bound {
                    self.path.push(next);
                    self.record(next_weight);
                    if next_hops < bound {
                        self.max_hops(start, next, next_hops, next_weight, bound);
                    }
                    self.path.pop();
                }
            } else if next_hops < bound {
                self.path.push(next);
                self.max_hops(start, next, next_hops, next_weight, bound);
                self.path.pop();
            }
        }
    }

    /// Traces of exactly `bound` hops ending at `end`. A visit to the end
    /// node with hops remaining is passed through, not recorded.
    fn exact_hops(
        &mut self,
        end: NodeIndex,
        current: NodeIndex,
        hops: usize,
        weight: Latency,
        bound: usize,
    ) {
        for (next, w) in self.graph.outgoing(current) {
            let next_hops = hops + 1;
            let next_weight = weight.saturating_add(w);
            if next == end && next_hops == bound {
                self.path.push(next);
                self.record(next_weight);
                self.path.pop();
            } else if next_hops < bound {
                self.path.push(next);
                self.exact_hops(end, next, next_hops, next_weight, bound);
                self.path.pop();
            }
        }
    }

    /// Closed walks of cumulative weight strictly below `bound`. Every
    /// return to `end` under the threshold is recorded, and the walk
    /// keeps extending while the threshold holds, so one walk may close
    /// the cycle several times. Hop count is capped at
    /// [`MAX_LATENCY_HOP_CEILING`].
    fn max_latency(
        &mut self,
        end: NodeIndex,
        current: NodeIndex,
        hops: usize,
        weight: Latency,
        bound: Latency,
    ) {
        if hops >= MAX_LATENCY_HOP_CEILING {
            tracing::warn!(
                ceiling = MAX_LATENCY_HOP_CEILING,
                "hop ceiling reached during max-latency enumeration; \
                 zero-weight cycle in the graph?"
            );
            return;
        }
        for (next, w) in self.graph.outgoing(current) {
            let next_weight = weight.saturating_add(w);
            if next_weight < bound {
                self.path.push(next);
                if next == end {
                    self.record(next_weight);
                }
                self.max_latency(end, next, hops + 1, next_weight, bound);
                self.path.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> HopGraph {
        let mut g = HopGraph::new();
        for (s, d, w) in [
            ("A", "B", 5),
            ("B", "C", 4),
            ("C", "D", 8),
            ("C", "E", 2),
            ("D", "C", 8),
            ("D", "E", 6),
            ("A", "D", 5),
            ("E", "B", 3),
            ("A", "E", 7),
        ] {
            g.add_edge(s, d, w);
        }
        g
    }

    #[test]
    fn max_hops_counts_closed_walks() {
        let g = fixture();
        assert_eq!(count_paths(&g, "C", "C", Selection::MaxHops, 3).unwrap(), 2);
        assert_eq!(count_paths(&g, "C", "C", Selection::MaxHops, 5).unwrap(), 6);
    }

    #[test]
    fn max_hops_walks_may_revisit_the_start() {
        let g = fixture();
        let paths = enumerate_paths(&g, "C", "C", Selection::MaxHops, 5).unwrap();

        let cdcdc = Trace::new(vec!["C", "D", "C", "D", "C"].into_iter().map(Into::into).collect());
        assert_eq!(paths.get(&cdcdc), Some(&32));
    }

    #[test]
    fn node_without_incoming_edge_has_no_cycles() {
        let g = fixture();
        assert_eq!(count_paths(&g, "A", "A", Selection::MaxHops, 3).unwrap(), 0);
        assert_eq!(
            count_paths(&g, "A", "A", Selection::MaxLatency, 30).unwrap(),
            0
        );
    }

    #[test]
    fn exact_hops_between_distinct_nodes() {
        let g = fixture();
        assert_eq!(
            count_paths(&g, "A", "C", Selection::ExactHops, 4).unwrap(),
            3
        );
        assert_eq!(
            count_paths(&g, "C", "A", Selection::ExactHops, 4).unwrap(),
            0
        );
    }

    #[test]
    fn exact_hops_on_the_same_node() {
        let g = fixture();
        let paths = enumerate_paths(&g, "C", "C", Selection::ExactHops, 4).unwrap();
        assert_eq!(paths.len(), 2);
        for trace in paths.keys() {
            assert_eq!(trace.hops(), 4);
        }
    }

    #[test]
    fn exact_hops_passes_through_the_target() {
        let g = fixture();
        let paths = enumerate_paths(&g, "A", "C", Selection::ExactHops, 4).unwrap();
        // A-B-C-D-C and A-D-C-D-C both visit C before ending there.
        let through_target = paths
            .keys()
            .filter(|t| t.nodes()[..t.nodes().len() - 1].contains(&"C".to_string()))
            .count();
        assert_eq!(through_target, 2);
    }

    #[test]
    fn max_latency_bound_is_strict() {
        let g = fixture();
        assert_eq!(
            count_paths(&g, "C", "C", Selection::MaxLatency, 30).unwrap(),
            7
        );
        // CEBCEBCEBC weighs 27; a bound of 27 excludes it.
        assert_eq!(
            count_paths(&g, "C", "C", Selection::MaxLatency, 27).unwrap(),
            6
        );
    }

    #[test]
    fn max_latency_terminates_on_zero_weight_cycles() {
        let mut g = HopGraph::new();
        g.add_edge("A", "B", 0);
        g.add_edge("B", "A", 0);

        // Without the hop ceiling this would recurse forever.
        let paths = enumerate_paths(&g, "A", "A", Selection::MaxLatency, 10).unwrap();
        assert!(!paths.is_empty());
    }

    #[test]
    fn closed_walk_selections_reject_distinct_endpoints() {
        let g = fixture();
        assert!(matches!(
            enumerate_paths(&g, "A", "C", Selection::MaxHops, 3),
            Err(Error::InvalidQuery(_))
        ));
        assert!(matches!(
            enumerate_paths(&g, "A", "C", Selection::MaxLatency, 30),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn unknown_node_is_rejected() {
        let g = fixture();
        assert!(matches!(
            enumerate_paths(&g, "Z", "Z", Selection::MaxHops, 3),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn recorded_weights_match_explicit_summation() {
        let g = fixture();
        let paths = enumerate_paths(&g, "C", "C", Selection::MaxLatency, 30).unwrap();
        for (trace, weight) in &paths {
            let summed = crate::trace::trace_weight(&g, trace.nodes()).unwrap();
            assert_eq!(summed, *weight, "weight mismatch for {trace}");
        }
    }
}
