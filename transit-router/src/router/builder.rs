//! Routing graph construction.
//!
//! Every routed stop gets two vertices: a *waiting* vertex where a rider
//! stands before boarding, and a *boarded* vertex. For a stop with router
//! index `i`, the boarded vertex is `2 * i` and the waiting vertex is
//! `2 * i + 1`. Itinerary reconstruction relies on this parity.
//!
//! - A wait edge runs from each stop's waiting vertex to its boarded vertex
//!   and weighs the configured wait time.
//! - A ride edge runs from the boarded vertex of one stop to the waiting
//!   vertex of a later stop on the same bus, and weighs the travel time
//!   between them. Only the cheapest ride per ordered stop pair is kept.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::debug;

use crate::domain::{Bus, StopId};

use super::RouterError;
use super::graph::{DirectedWeightedGraph, Edge, VertexId};
use super::settings::RoutingSettings;

/// Read access to the network a router is built from.
pub trait RouteSource {
    /// Buses in insertion order. This order decides ties between equally
    /// fast buses.
    fn buses(&self) -> impl Iterator<Item = &Bus>;

    /// Name of a stop referenced by one of the buses.
    fn stop_name(&self, stop: StopId) -> &str;

    /// Road distance between two stops, in metres.
    fn distance(&self, from: StopId, to: StopId) -> f64;
}

/// What a ride edge stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct RideInfo {
    /// Bus providing the ride.
    pub bus: Arc<str>,
    /// Number of stop-to-stop hops covered.
    pub span_count: usize,
    /// Travel time in minutes.
    pub time: f64,
}

/// Boarded vertex of the stop with router index `node`.
pub fn boarded_vertex(node: usize) -> VertexId {
    VertexId(node * 2)
}

/// Waiting vertex of the stop with router index `node`.
pub fn waiting_vertex(node: usize) -> VertexId {
    VertexId(node * 2 + 1)
}

/// Whether `vertex` is a waiting vertex.
pub fn is_waiting(vertex: VertexId) -> bool {
    vertex.0 & 1 == 1
}

/// Router index of the stop owning `vertex`.
pub fn node_of(vertex: VertexId) -> usize {
    vertex.0 >> 1
}

/// The routing graph plus the metadata needed to read paths back.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    graph: DirectedWeightedGraph,
    stop_names: Vec<String>,
    nodes: HashMap<String, usize>,
    rides: BTreeMap<(usize, usize), RideInfo>,
}

impl RouteGraph {
    /// A graph with no stops. Every query against it finds nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build the graph for every bus in `source`.
    pub fn build<S: RouteSource>(
        source: &S,
        settings: &RoutingSettings,
    ) -> Result<Self, RouterError> {
        settings.validate()?;

        let velocity = settings.metres_per_minute();
        let mut node_ids: HashMap<StopId, usize> = HashMap::new();
        let mut stop_names: Vec<String> = Vec::new();
        let mut rides: BTreeMap<(usize, usize), RideInfo> = BTreeMap::new();

        for bus in source.buses() {
            if bus.stops.len() < 2 {
                continue;
            }

            let nodes: Vec<usize> = bus
                .stops
                .iter()
                .map(|&stop| {
                    *node_ids.entry(stop).or_insert_with(|| {
                        stop_names.push(source.stop_name(stop).to_string());
                        stop_names.len() - 1
                    })
                })
                .collect();

            // Minutes from the first stop
            let mut prefix = Vec::with_capacity(bus.stops.len());
            prefix.push(0.0);
            let mut elapsed = 0.0;
            for (from, to) in bus.hops() {
                elapsed += source.distance(from, to) / velocity;
                prefix.push(elapsed);
            }

            let bus_name: Arc<str> = Arc::from(bus.name.as_str());
            for i in 0..nodes.len() - 1 {
                for j in i + 1..nodes.len() {
                    let time = prefix[j] - prefix[i];
                    let candidate = RideInfo {
                        bus: Arc::clone(&bus_name),
                        span_count: j - i,
                        time,
                    };
                    // Strictly smaller only: the first bus found keeps a tie
                    match rides.entry((nodes[i], nodes[j])) {
                        Entry::Vacant(slot) => {
                            slot.insert(candidate);
                        }
                        Entry::Occupied(mut slot) => {
                            if time < slot.get().time {
                                slot.insert(candidate);
                            }
                        }
                    }
                }
            }
        }

        let mut graph = DirectedWeightedGraph::new(stop_names.len() * 2);
        let wait_time = settings.wait_time();
        for node in 0..stop_names.len() {
            graph.add_edge(Edge {
                from: waiting_vertex(node),
                to: boarded_vertex(node),
                weight: wait_time,
            });
        }
        for (&(from, to), ride) in &rides {
            graph.add_edge(Edge {
                from: boarded_vertex(from),
                to: waiting_vertex(to),
                weight: ride.time,
            });
        }

        debug!(
            stops = stop_names.len(),
            rides = rides.len(),
            edges = graph.edge_count(),
            "built routing graph"
        );

        let nodes = stop_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();

        Ok(Self {
            graph,
            stop_names,
            nodes,
            rides,
        })
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    /// Router index of a stop, if any bus with at least two stops serves it.
    pub fn node(&self, stop_name: &str) -> Option<usize> {
        self.nodes.get(stop_name).copied()
    }

    pub fn stop_name(&self, node: usize) -> Option<&str> {
        self.stop_names.get(node).map(String::as_str)
    }

    /// The kept ride from one routed stop to another.
    pub fn ride(&self, from: usize, to: usize) -> Option<&RideInfo> {
        self.rides.get(&(from, to))
    }

    /// All kept rides, ordered by `(from, to)` router index.
    pub fn rides(&self) -> impl Iterator<Item = ((usize, usize), &RideInfo)> {
        self.rides.iter().map(|(&k, v)| (k, v))
    }

    /// Number of routed stops.
    pub fn stop_count(&self) -> usize {
        self.stop_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_encoding() {
        assert_eq!(boarded_vertex(0), VertexId(0));
        assert_eq!(waiting_vertex(0), VertexId(1));
        assert_eq!(boarded_vertex(3), VertexId(6));
        assert_eq!(waiting_vertex(3), VertexId(7));

        assert!(is_waiting(VertexId(7)));
        assert!(!is_waiting(VertexId(6)));
        assert_eq!(node_of(VertexId(6)), 3);
        assert_eq!(node_of(VertexId(7)), 3);
    }

    #[test]
    fn empty_graph_has_no_nodes() {
        let graph = RouteGraph::empty();
        assert!(graph.is_empty());
        assert_eq!(graph.graph().vertex_count(), 0);
        assert!(graph.node("A").is_none());
    }
}
