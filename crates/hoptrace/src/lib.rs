//! # Hoptrace: latency metrics over a service hop graph
//!
//! Hoptrace models service-to-service calls as a small directed,
//! edge-weighted graph and answers latency queries over it: the summed
//! weight of an explicit route, the number of distinct traces under a
//! hop or latency bound, and shortest-path latencies — including the
//! shortest *cycle* back to the originating service.
//!
//! The graph is built once (normally by the [`loader`]) and queried
//! read-only; every query allocates its own traversal state, so a built
//! [`HopGraph`] can be shared across threads.
//!
//! ## Quick Start
//!
//! ```
//! use hoptrace::{Selection, count_paths, shortest_path, trace_weight};
//!
//! let graph = hoptrace::loader::parse_graph("A-B-5, B-C-4, C-E-2, E-B-3")?;
//!
//! assert_eq!(trace_weight(&graph, &["A", "B", "C"])?, 9);
//! assert_eq!(count_paths(&graph, "B", "B", Selection::MaxHops, 3)?, 1);
//! assert_eq!(shortest_path(&graph, "A", "C")?.latency, 9);
//! # Ok::<(), hoptrace::Error>(())
//! ```

pub mod enumerate;
pub mod error;
pub mod graph;
pub mod loader;
pub mod output;
pub mod shortest;
pub mod trace;

pub use enumerate::{Selection, count_paths, enumerate_paths};
pub use error::{Error, Result};
pub use graph::{HopGraph, Latency};
pub use shortest::{ShortestPath, shortest_cycle, shortest_path};
pub use trace::{Trace, trace_weight};
