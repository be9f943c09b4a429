//! Error types for the Dial engine.
//!
//! Every variant is a caller-side precondition violation, detected at the
//! call that violates it. The engine never retries and never returns a
//! partial distance table.

use std::fmt;

/// Precondition violations surfaced by graph construction and the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialError {
    /// A graph must contain at least one vertex.
    InvalidSize,

    /// An edge endpoint fell outside `[0, vertices)`.
    OutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Vertex count of the graph.
        vertices: usize,
    },

    /// The search source fell outside `[0, vertices)`.
    InvalidSource {
        /// The requested source.
        source: usize,
        /// Vertex count of the graph.
        vertices: usize,
    },

    /// The declared weight bound is smaller than a weight already stored in
    /// the graph; running with it would index past the bucket array.
    InvalidWeight {
        /// Bound passed to the search.
        declared: u64,
        /// Largest weight added to the graph so far.
        max_weight: u64,
    },
}

impl fmt::Display for DialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialError::InvalidSize => write!(f, "graph must have at least one vertex"),
            DialError::OutOfRange { vertex, vertices } => write!(
                f,
                "vertex {vertex} out of range for graph with {vertices} vertices"
            ),
            DialError::InvalidSource { source, vertices } => write!(
                f,
                "source vertex {source} out of range for graph with {vertices} vertices"
            ),
            DialError::InvalidWeight {
                declared,
                max_weight,
            } => write!(
                f,
                "declared weight bound {declared} below maximum stored edge weight {max_weight}"
            ),
        }
    }
}

impl std::error::Error for DialError {}
