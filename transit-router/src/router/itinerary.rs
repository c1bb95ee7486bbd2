//! Itineraries read back from graph paths.

use serde::Serialize;

use super::builder::{RouteGraph, is_waiting, node_of};
use super::path::PathInfo;

/// One step of an itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    /// Stand at a stop until a bus arrives.
    Wait { stop_name: String, time: f64 },
    /// Ride one bus for `span_count` stops.
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl RouteItem {
    /// Duration of this step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            RouteItem::Wait { time, .. } | RouteItem::Bus { time, .. } => *time,
        }
    }

    pub fn is_wait(&self) -> bool {
        matches!(self, RouteItem::Wait { .. })
    }

    pub fn is_bus(&self) -> bool {
        matches!(self, RouteItem::Bus { .. })
    }
}

/// The fastest way between two stops.
///
/// Items alternate `Wait`, `Bus`, `Wait`, `Bus`, ... and `total_time` equals
/// the sum of item times taken in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Total travel time in minutes.
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl Route {
    /// Translate `path` into wait and ride steps.
    ///
    /// An edge leaving a waiting vertex is a wait at that stop. Any other
    /// edge is a ride, described by the metadata recorded for its stop pair.
    /// Returns `None` if the path mentions an edge or ride the graph does not
    /// know, which only happens when the path came from a different graph.
    pub fn from_path(graph: &RouteGraph, path: &PathInfo) -> Option<Self> {
        let items = path
            .edges
            .iter()
            .map(|&edge_id| {
                let edge = graph.graph().edge(edge_id)?;
                let from = node_of(edge.from);
                if is_waiting(edge.from) {
                    Some(RouteItem::Wait {
                        stop_name: graph.stop_name(from)?.to_string(),
                        time: edge.weight,
                    })
                } else {
                    let ride = graph.ride(from, node_of(edge.to))?;
                    Some(RouteItem::Bus {
                        bus: ride.bus.to_string(),
                        span_count: ride.span_count,
                        time: edge.weight,
                    })
                }
            })
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            total_time: path.weight,
            items,
        })
    }

    /// Number of buses boarded.
    pub fn bus_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_bus()).count()
    }

    /// True for the trivial route from a stop to itself.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
