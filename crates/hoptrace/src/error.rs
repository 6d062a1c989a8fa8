//! Error types for hoptrace operations.
//!
//! Errors fall into two groups:
//!
//! - **Query outcomes** (`NoSuchTrace`, `NotFound`): expected results of a
//!   query over a graph that simply doesn't contain the requested trace.
//!   Callers treat these as answers, not failures — the report writer
//!   renders them as the literal `NO SUCH TRACE`.
//! - **Real failures** (`InvalidQuery`, `InvalidRecord`, `Io`, `Json`):
//!   problems with the request or its input that halt the operation.
//!
//! A legitimately zero-weight trace and an absent trace are always
//! distinguishable: queries never encode "no result" as a numeric zero.

use thiserror::Error;

/// Result type for hoptrace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for hoptrace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A requested explicit trace, or an edge along it, does not exist.
    #[error("no such trace: {from}-{to}")]
    NoSuchTrace {
        /// Source end of the missing hop.
        from: String,
        /// Destination end of the missing hop.
        to: String,
    },

    /// No path or cycle satisfies the shortest-path query.
    #[error("no route found: {from}-{to}")]
    NotFound {
        /// Start node of the query.
        from: String,
        /// End node of the query.
        to: String,
    },

    /// The query shape is incompatible with the requested operation
    /// (e.g. a closed-walk selection over two distinct nodes).
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A malformed edge record was encountered while loading a graph.
    #[error("invalid record '{record}': {reason}")]
    InvalidRecord {
        /// The offending record token.
        record: String,
        /// Why the record was rejected.
        reason: String,
    },

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of a report failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for expected no-result outcomes.
    ///
    /// These are the outcomes the report writer renders as `NO SUCH TRACE`
    /// rather than treating as command failures.
    #[must_use]
    pub fn is_no_trace(&self) -> bool {
        matches!(self, Self::NoSuchTrace { .. } | Self::NotFound { .. })
    }

    pub(crate) fn no_such_trace(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NoSuchTrace {
            from: from.into(),
            to: to.into(),
        }
    }

    pub(crate) fn not_found(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::NotFound {
            from: from.into(),
            to: to.into(),
        }
    }
}
