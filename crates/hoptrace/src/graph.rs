//! The hop graph: services as nodes, directed weighted edges as hops.
//!
//! Built once by the loader through repeated [`HopGraph::add_edge`] calls,
//! then queried read-only. The representation is a petgraph
//! [`DiGraph`] with node names as node weights, plus a canonical-name map
//! for case-insensitive lookup. Undirected graphs are stored as mirrored
//! directed edges.
//!
//! No traversal state lives here: visited sets, distance maps, and path
//! accumulators are allocated per query call, so a built graph can be
//! shared freely across concurrent queries.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

/// Edge weight: the latency of a single hop, or the cumulative latency of
/// a trace. Non-negative by construction; negative latencies are not
/// supported. Cumulative sums saturate at [`u32::MAX`] rather than
/// wrapping, so extreme weights cannot panic a query.
pub type Latency = u32;

/// A directed, edge-weighted graph of service hops.
///
/// Node names are unique under case-insensitive comparison; the spelling
/// first seen is kept for display. At most one edge exists per ordered
/// (source, destination) pair — re-adding replaces the weight.
#[derive(Debug)]
pub struct HopGraph {
    graph: DiGraph<String, Latency>,
    /// Canonical (uppercased) name -> node index.
    node_map: HashMap<String, NodeIndex>,
    directed: bool,
}

impl HopGraph {
    /// Create an empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_direction(true)
    }

    /// Create an empty undirected graph. Every edge insertion also upserts
    /// the mirror edge, except for self-loops.
    #[must_use]
    pub fn undirected() -> Self {
        Self::with_direction(false)
    }

    fn with_direction(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            directed,
        }
    }

    /// Whether this graph was constructed as directed.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    fn canonical(name: &str) -> String {
        name.to_uppercase()
    }

    /// Look up a node by name (case-insensitive).
    #[must_use]
    pub fn node(&self, name: &str) -> Option<NodeIndex> {
        self.node_map.get(&Self::canonical(name)).copied()
    }

    /// Whether a node with this name exists (case-insensitive).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.node(name).is_some()
    }

    /// The display name of a node.
    ///
    /// # Panics
    ///
    /// Panics if `index` did not come from this graph.
    #[must_use]
    pub fn name(&self, index: NodeIndex) -> &str {
        &self.graph[index]
    }

    /// Intern a node by name, creating it if absent.
    fn intern(&mut self, name: &str) -> NodeIndex {
        let canonical = Self::canonical(name);
        if let Some(&index) = self.node_map.get(&canonical) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.node_map.insert(canonical, index);
        index
    }

    /// Insert or update the edge `source -> destination`.
    ///
    /// Both nodes are created if absent. An existing edge for the same
    /// ordered pair has its weight replaced (upsert, not accumulate).
    /// Undirected graphs also upsert the mirror edge unless source and
    /// destination are the same node. Always succeeds.
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Latency) {
        let s = self.intern(source);
        let d = self.intern(destination);
        self.graph.update_edge(s, d, weight);
        if !self.directed && s != d {
            self.graph.update_edge(d, s, weight);
        }
    }

    /// Whether an edge with this exact ordered pair exists.
    #[must_use]
    pub fn has_edge(&self, source: &str, destination: &str) -> bool {
        self.weight(source, destination).is_some()
    }

    /// The weight of the edge `source -> destination`, or `None` if no
    /// such edge exists. A zero-weight edge yields `Some(0)`, never `None`.
    #[must_use]
    pub fn weight(&self, source: &str, destination: &str) -> Option<Latency> {
        let s = self.node(source)?;
        let d = self.node(destination)?;
        self.weight_between(s, d)
    }

    /// Edge weight lookup by index, for traversals that already resolved
    /// their endpoints.
    #[must_use]
    pub fn weight_between(&self, source: NodeIndex, destination: NodeIndex) -> Option<Latency> {
        self.graph
            .find_edge(source, destination)
            .and_then(|e| self.graph.edge_weight(e))
            .copied()
    }

    /// Outgoing hops of a node as `(destination, weight)` pairs.
    pub fn outgoing(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Latency)> + '_ {
        self.graph.edges(node).map(|e| (e.target(), *e.weight()))
    }

    /// Whether at least one edge from a *different* node points at this
    /// one. A node without such an edge cannot be part of any cycle, so
    /// same-node queries on it can answer without searching.
    #[must_use]
    pub fn has_incoming_from_other(&self, node: NodeIndex) -> bool {
        self.graph
            .edges_directed(node, Direction::Incoming)
            .any(|e| e.source() != node)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges (mirror edges of an undirected graph
    /// count individually).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Display names of all nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }
}

impl Default for HopGraph {
    fn default() -> Self {
        Self::new()
    }
}
