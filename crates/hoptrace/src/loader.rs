//! Edge-list loading: parses hop records into a [`HopGraph`].
//!
//! The input is a flat list of records separated by commas and/or
//! whitespace. Each record is `SOURCE-DEST-WEIGHT`, e.g. `A-B-5` or
//! `auth-billing-12`: two alphabetic node names of any length and a
//! non-negative integer latency. Validation lives entirely here — the
//! query engine never sees malformed input.

use std::path::Path;

use crate::error::{Error, Result};
use crate::graph::{HopGraph, Latency};

/// Load a directed hop graph from an edge-list file.
///
/// # Errors
///
/// [`Error::Io`] if the file can't be read, [`Error::InvalidRecord`] for
/// the first malformed record.
pub fn load_graph(path: &Path) -> Result<HopGraph> {
    let input = std::fs::read_to_string(path)?;
    let graph = parse_graph(&input)?;
    tracing::info!(
        path = %path.display(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

/// Parse edge-list text into a directed hop graph.
///
/// Blank input yields an empty graph. Later records for the same ordered
/// node pair replace the earlier weight.
pub fn parse_graph(input: &str) -> Result<HopGraph> {
    let mut graph = HopGraph::new();
    let records = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    for record in records {
        let (source, destination, weight) = parse_record(record)?;
        graph.add_edge(source, destination, weight);
    }
    Ok(graph)
}

/// Split one `SOURCE-DEST-WEIGHT` record into its parts.
fn parse_record(record: &str) -> Result<(&str, &str, Latency)> {
    let invalid = |reason: &str| Error::InvalidRecord {
        record: record.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = record.split('-');
    let (Some(source), Some(destination), Some(weight), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(invalid("expected SOURCE-DEST-WEIGHT"));
    };

    for name in [source, destination] {
        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(invalid("node names must be alphabetic"));
        }
    }
    let weight: Latency = weight
        .parse()
        .map_err(|_| invalid("weight must be a non-negative integer"))?;

    Ok((source, destination, weight))
}
