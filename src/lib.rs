//! Single-source shortest paths over non-negative integer weights.
//! Provides two variants:
//!  - Dial: bucket-queue engine (`dial::shortest_path`), near-linear when
//!    the maximum edge weight is small relative to the vertex count
//!  - Dijkstra: classic binary-heap reference (`baseline::dijkstra`), the
//!    parity oracle for tests and benchmarks

pub mod baseline;
pub mod bucket;
pub mod dial;
pub mod error;
pub mod graph;

pub use dial::{
    shortest_path, shortest_path_auto, shortest_path_with_stats, Distance, SearchStats, INFINITY,
};
pub use error::DialError;
pub use graph::{Graph, Vertex, Weight};
