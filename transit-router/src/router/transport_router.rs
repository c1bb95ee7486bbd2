//! The transport router: build once, query many times.

use tracing::trace;

use super::RouterError;
use super::builder::{RouteGraph, RouteSource, waiting_vertex};
use super::itinerary::Route;
use super::path::{Dijkstra, ShortestPath};
use super::settings::RoutingSettings;

/// Answers fastest-route queries over an immutable routing graph.
///
/// Build a new router whenever the network or the settings change; a built
/// router never changes and can be shared between threads.
#[derive(Debug, Clone)]
pub struct TransportRouter<P = Dijkstra> {
    settings: RoutingSettings,
    graph: RouteGraph,
    finder: P,
}

impl TransportRouter<Dijkstra> {
    /// A router that has not been built yet. Every query returns `None`.
    pub fn unbuilt(settings: RoutingSettings) -> Self {
        Self {
            settings,
            graph: RouteGraph::empty(),
            finder: Dijkstra,
        }
    }

    /// Build a router for `source` using Dijkstra's algorithm.
    pub fn build<S: RouteSource>(
        source: &S,
        settings: RoutingSettings,
    ) -> Result<Self, RouterError> {
        Self::with_finder(source, settings, Dijkstra)
    }
}

impl Default for TransportRouter<Dijkstra> {
    fn default() -> Self {
        Self::unbuilt(RoutingSettings::default())
    }
}

impl<P: ShortestPath> TransportRouter<P> {
    /// Build a router for `source` using a custom path finder.
    pub fn with_finder<S: RouteSource>(
        source: &S,
        settings: RoutingSettings,
        finder: P,
    ) -> Result<Self, RouterError> {
        let graph = RouteGraph::build(source, &settings)?;
        Ok(Self {
            settings,
            graph,
            finder,
        })
    }

    /// The fastest itinerary from one stop to another.
    ///
    /// Both ends are waiting vertices: a trip starts by waiting at `from` and
    /// ends on arrival at `to`. Returns `None` when either stop is not
    /// served by any bus or `to` is unreachable.
    pub fn route(&self, from: &str, to: &str) -> Option<Route> {
        let (Some(from_node), Some(to_node)) = (self.graph.node(from), self.graph.node(to)) else {
            trace!(from, to, "stop not routed");
            return None;
        };

        let path = self.finder.shortest_path(
            self.graph.graph(),
            waiting_vertex(from_node),
            waiting_vertex(to_node),
        )?;

        trace!(from, to, edges = path.edges.len(), weight = path.weight, "route found");
        Route::from_path(&self.graph, &path)
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }
}
