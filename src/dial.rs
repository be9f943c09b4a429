//! Dial's algorithm: Dijkstra specialized to small integer weights via a
//! bucket queue.
//!
//! With maximum edge weight `W` and `V` vertices, every finite shortest
//! distance fits in `[0, W·(V-1)]`, so `W·V + 1` buckets indexed directly by
//! distance replace the comparison-based heap. Extraction scans a cursor
//! that only moves forward, giving `O(V + E + W·V)` amortized over a run.
//!
//! The caller is responsible for keeping `W·V` within memory; the bucket
//! array is allocated eagerly at that size per run.

use serde::Serialize;

use crate::bucket::BucketQueue;
use crate::error::DialError;
use crate::graph::{Graph, Vertex, Weight};

/// Distance from the source; same unit as edge weights.
pub type Distance = u64;

/// Sentinel for "no path found": larger than any achievable path sum.
pub const INFINITY: Distance = Distance::MAX;

/// Counters describing one engine run.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct SearchStats {
    /// Successful relaxations (tentative distance improvements).
    pub relaxations: u64,
    /// Vertices extracted from the queue; each at most once.
    pub settled: usize,
    /// Distinct non-empty buckets the cursor stopped on.
    pub buckets_visited: usize,
    /// Highest bucket index a vertex was extracted from, i.e. the largest
    /// finite distance in the result.
    pub max_bucket_index: usize,
}

/// Distances from `source` to every vertex, `INFINITY` where unreachable.
///
/// `max_weight` must be at least the largest weight stored in the graph;
/// the engine fail-fasts with `InvalidWeight` otherwise rather than index
/// past the bucket array.
pub fn shortest_path(
    graph: &Graph,
    source: Vertex,
    max_weight: Weight,
) -> Result<Vec<Distance>, DialError> {
    shortest_path_with_stats(graph, source, max_weight).map(|(dist, _)| dist)
}

/// As [`shortest_path`], using the graph's tracked maximum edge weight as
/// the bound.
pub fn shortest_path_auto(graph: &Graph, source: Vertex) -> Result<Vec<Distance>, DialError> {
    shortest_path(graph, source, graph.max_weight())
}

/// As [`shortest_path`], also returning the run counters.
pub fn shortest_path_with_stats(
    graph: &Graph,
    source: Vertex,
    max_weight: Weight,
) -> Result<(Vec<Distance>, SearchStats), DialError> {
    let vertices = graph.vertex_count();
    if source >= vertices {
        return Err(DialError::InvalidSource { source, vertices });
    }
    if max_weight < graph.max_weight() {
        return Err(DialError::InvalidWeight {
            declared: max_weight,
            max_weight: graph.max_weight(),
        });
    }

    let bucket_count = max_weight as usize * vertices + 1;
    let mut dist = vec![INFINITY; vertices];
    let mut queue = BucketQueue::new(bucket_count, vertices);
    dist[source] = 0;
    queue.insert(source, 0);

    let mut stats = SearchStats::default();
    let mut prev_bucket = usize::MAX;
    while let Some((u, bucket)) = queue.pop_min() {
        let du = bucket as Distance;
        stats.settled += 1;
        stats.max_bucket_index = bucket;
        if bucket != prev_bucket {
            stats.buckets_visited += 1;
            prev_bucket = bucket;
        }
        for &(v, w) in graph.neighbors(u) {
            let candidate = du + w;
            if candidate < dist[v] {
                // Still queued under its old distance; move it. Extracted
                // vertices never re-enter here: candidate >= du >= dist[v]
                // for anything settled already.
                if dist[v] != INFINITY {
                    queue.remove(v, dist[v] as usize);
                }
                dist[v] = candidate;
                queue.insert(v, candidate as usize);
                stats.relaxations += 1;
            }
        }
    }
    Ok((dist, stats))
}
