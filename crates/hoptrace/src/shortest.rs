//! Shortest-path queries: Dijkstra between distinct nodes, bounded-weight
//! cycle search for a node back to itself.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use petgraph::graph::NodeIndex;
use serde::Serialize;

use crate::enumerate::{Selection, enumerate_paths};
use crate::error::{Error, Result};
use crate::graph::{HopGraph, Latency};
use crate::trace::Trace;

/// Initial weight bound for the shortest-cycle search.
pub const DEFAULT_CYCLE_BOUND: Latency = 30;

/// Default number of bound doublings before the shortest-cycle search
/// gives up.
pub const DEFAULT_CYCLE_RETRIES: u32 = 16;

/// A shortest-path answer: the trace taken and its total latency.
///
/// Absence of a path is [`Error::NotFound`], never a zero latency — a
/// legitimately zero-weight trace is a valid answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    /// The minimum-latency trace.
    pub trace: Trace,
    /// Its cumulative latency.
    pub latency: Latency,
}

/// Find the minimum-latency trace from `start` to `end`.
///
/// For distinct nodes this is Dijkstra over the hop graph; distance,
/// parent, and visited maps are allocated per call. When several
/// unvisited nodes share the minimum distance the one with the lowest
/// internal index is expanded first — which of the equally short traces
/// wins is implementation-defined.
///
/// `start == end` asks for the shortest cycle and delegates to
/// [`shortest_cycle`].
///
/// # Errors
///
/// [`Error::NotFound`] when `end` is unreachable from `start`, and
/// [`Error::InvalidQuery`] for unknown node names.
pub fn shortest_path(graph: &HopGraph, start: &str, end: &str) -> Result<ShortestPath> {
    let s = resolve(graph, start)?;
    let e = resolve(graph, end)?;
    if s == e {
        return shortest_cycle(graph, start);
    }

    let mut dist: HashMap<NodeIndex, Latency> = HashMap::new();
    let mut parent: HashMap<NodeIndex, NodeIndex> = HashMap::new();
    let mut visited: HashSet<NodeIndex> = HashSet::new();
    // Min-heap keyed on (distance, node index); the index is the tie-break.
    let mut heap = BinaryHeap::new();

    dist.insert(s, 0);
    heap.push(Reverse((0, s)));

    while let Some(Reverse((d, node))) = heap.pop() {
        if !visited.insert(node) {
            continue; // stale heap entry
        }
        if node == e {
            let trace = reconstruct(graph, &parent, s, e);
            tracing::debug!(start, end, latency = d, "shortest trace found");
            return Ok(ShortestPath { trace, latency: d });
        }
        for (next, w) in graph.outgoing(node) {
            if visited.contains(&next) {
                continue;
            }
            let candidate = d.saturating_add(w);
            if dist.get(&next).is_none_or(|&known| candidate < known) {
                dist.insert(next, candidate);
                parent.insert(next, node);
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    Err(Error::not_found(start, end))
}

/// Find the minimum-latency cycle from a node back to itself, with the
/// default starting bound and retry ceiling.
///
/// Dijkstra's distance from a node to itself is trivially zero, so the
/// cycle is found by weight-bounded enumeration instead: enumerate
/// closed walks under [`DEFAULT_CYCLE_BOUND`], doubling the bound while
/// nothing qualifies, and keep the lightest.
pub fn shortest_cycle(graph: &HopGraph, node: &str) -> Result<ShortestPath> {
    shortest_cycle_with(graph, node, DEFAULT_CYCLE_BOUND, DEFAULT_CYCLE_RETRIES)
}

/// [`shortest_cycle`] with an explicit starting bound and retry ceiling.
///
/// A node with no incoming edge from a different node is on no cycle and
/// fails immediately with [`Error::NotFound`], without searching. The
/// retry ceiling guarantees termination for nodes that have incoming
/// edges but still sit on no cycle.
pub fn shortest_cycle_with(
    graph: &HopGraph,
    node: &str,
    bound_start: Latency,
    retries: u32,
) -> Result<ShortestPath> {
    let index = resolve(graph, node)?;
    if !graph.has_incoming_from_other(index) {
        tracing::debug!(node, "no incoming edge from another node");
        return Err(Error::not_found(node, node));
    }

    let mut bound = bound_start.max(1);
    for attempt in 0..=retries {
        let paths = enumerate_paths(graph, node, node, Selection::MaxLatency, bound)?;
        let lightest = paths
            .into_iter()
            .min_by_key(|&(_, latency)| latency);
        if let Some((trace, latency)) = lightest {
            return Ok(ShortestPath { trace, latency });
        }
        tracing::debug!(node, bound, attempt, "no cycle under bound, doubling");
        bound = bound.saturating_mul(2);
    }

    Err(Error::not_found(node, node))
}

fn resolve(graph: &HopGraph, name: &str) -> Result<NodeIndex> {
    graph
        .node(name)
        .ok_or_else(|| Error::InvalidQuery(format!("unknown node '{name}'")))
}

fn reconstruct(
    graph: &HopGraph,
    parent: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    end: NodeIndex,
) -> Trace {
    let mut indices = vec![end];
    let mut current = end;
    while current != start {
        // Every settled node except the start has a parent.
        if let Some(&p) = parent.get(&current) {
            indices.push(p);
            current = p;
        } else {
            break;
        }
    }
    indices.reverse();
    Trace::from_indices(graph, &indices)
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
    fn shortest_trace_between_distinct_nodes() {
        let g = fixture();
        let sp = shortest_path(&g, "A", "C").unwrap();
        assert_eq!(sp.latency, 9);
        assert_eq!(sp.trace.to_string(), "A-B-C");
    }

    #[test]
    fn unreachable_end_is_not_found() {
        let g = fixture();
        // Nothing points back at A.
        let err = shortest_path(&g, "B", "A").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn same_node_query_finds_the_cheapest_cycle() {
        let g = fixture();
        let sp = shortest_path(&g, "B", "B").unwrap();
        assert_eq!(sp.latency, 9);
        assert_eq!(sp.trace.to_string(), "B-C-E-B");
    }

    #[test]
    fn cycle_query_without_incoming_edge_fails_fast() {
        let g = fixture();
        let err = shortest_cycle(&g, "A").unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn bound_doubles_until_a_heavy_cycle_fits() {
        let mut g = HopGraph::new();
        g.add_edge("A", "B", 100);
        g.add_edge("B", "A", 100);

        // 200 > 30, so the default bound needs three doublings.
        let sp = shortest_cycle(&g, "A").unwrap();
        assert_eq!(sp.latency, 200);
        assert_eq!(sp.trace.to_string(), "A-B-A");
    }

    #[test]
    fn retry_ceiling_caps_the_search() {
        let mut g = HopGraph::new();
        g.add_edge("A", "B", 100);
        g.add_edge("B", "A", 100);

        let err = shortest_cycle_with(&g, "A", 1, 2).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn unknown_node_is_rejected() {
        let g = fixture();
        assert!(matches!(
            shortest_path(&g, "A", "Z"),
            Err(Error::InvalidQuery(_))
        ));
    }

    #[test]
    fn extreme_weights_saturate_instead_of_overflowing() {
        let mut g = HopGraph::new();
        g.add_edge("A", "B", u32::MAX);
        g.add_edge("B", "C", 1);

        let sp = shortest_path(&g, "A", "C").unwrap();
        assert_eq!(sp.latency, u32::MAX);
        assert_eq!(sp.trace.to_string(), "A-B-C");
    }
}
