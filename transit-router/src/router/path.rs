//! Shortest-path search over a [`DirectedWeightedGraph`].
//!
//! The router only needs one capability: the minimum-weight path between
//! two vertices, or nothing. [`ShortestPath`] captures that so the graph
//! construction and itinerary logic can be exercised with any algorithm.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    /// Sum of edge weights, accumulated along the path from the start.
    pub weight: f64,
    /// Edges in travel order. Empty when start and end coincide.
    pub edges: Vec<EdgeId>,
}

/// Minimum-weight path capability.
pub trait ShortestPath {
    /// Find the cheapest path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either vertex is not in the
    /// graph. A query from a vertex to itself yields an empty path.
    fn shortest_path(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<PathInfo>;
}

/// Dijkstra's algorithm with a binary heap. Weights must be non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

#[derive(Debug, Clone, Copy, PartialEq)]
struct State {
    cost: f64,
    vertex: VertexId,
}

impl Eq for State {}

// Flip the comparison so `BinaryHeap` pops the cheapest state first. Ties go
// to the lower vertex so the search order does not depend on heap internals.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl ShortestPath for Dijkstra {
    fn shortest_path(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<PathInfo> {
        let n = graph.vertex_count();
        if from.0 >= n || to.0 >= n {
            return None;
        }
        if from == to {
            return Some(PathInfo {
                weight: 0.0,
                edges: Vec::new(),
            });
        }

        let mut dist = vec![f64::INFINITY; n];
        let mut prev_edge: Vec<Option<EdgeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();

        dist[from.0] = 0.0;
        heap.push(State {
            cost: 0.0,
            vertex: from,
        });

        while let Some(State { cost, vertex }) = heap.pop() {
            if vertex == to {
                break;
            }
            // Stale entry
            if cost > dist[vertex.0] {
                continue;
            }

            for &edge_id in graph.outgoing(vertex) {
                let Some(edge) = graph.edge(edge_id) else {
                    continue;
                };
                let next = cost + edge.weight;
                if next < dist[edge.to.0] {
                    dist[edge.to.0] = next;
                    prev_edge[edge.to.0] = Some(edge_id);
                    heap.push(State {
                        cost: next,
                        vertex: edge.to,
                    });
                }
            }
        }

        if dist[to.0].is_infinite() {
            return None;
        }

        let mut edges = Vec::new();
        let mut vertex = to;
        while let Some(edge_id) = prev_edge[vertex.0] {
            edges.push(edge_id);
            vertex = graph.edge(edge_id)?.from;
        }
        edges.reverse();

        Some(PathInfo {
            weight: dist[to.0],
            edges,
        })
    }
}
