//! Binary-heap Dijkstra over the same graph type.
//!
//! Reference implementation the bucket engine is held to parity with in the
//! test harness and benchmarks. Carries no bucket-count precondition.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::dial::{Distance, INFINITY};
use crate::error::DialError;
use crate::graph::{Graph, Vertex};

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: Distance,
    vertex: Vertex,
}

// Reversed so the std max-heap pops the smallest cost first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from `source`, `INFINITY` where unreachable.
pub fn dijkstra(graph: &Graph, source: Vertex) -> Result<Vec<Distance>, DialError> {
    let vertices = graph.vertex_count();
    if source >= vertices {
        return Err(DialError::InvalidSource { source, vertices });
    }

    let mut dist = vec![INFINITY; vertices];
    let mut heap = BinaryHeap::new();
    dist[source] = 0;
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        if cost > dist[vertex] {
            continue; // stale entry
        }
        for &(next, weight) in graph.neighbors(vertex) {
            let candidate = cost + weight;
            if candidate < dist[next] {
                dist[next] = candidate;
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }
    Ok(dist)
}
