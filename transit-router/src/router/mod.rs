//! Fastest-route planning.
//!
//! The network is turned into a directed graph where waiting at a stop and
//! riding a bus are separate edges, so a shortest path in time is also the
//! itinerary with the best trade-off between transfers and detours.
//!
//! - [`builder`] lays out the graph and remembers which bus each ride uses.
//! - [`path`] finds minimum-weight paths.
//! - [`itinerary`] reads a path back as wait and ride steps.

pub mod builder;
mod error;
pub mod graph;
pub mod itinerary;
pub mod path;
mod settings;
mod transport_router;


pub use builder::{RideInfo, RouteGraph, RouteSource};
pub use error::RouterError;
pub use itinerary::{Route, RouteItem};
pub use path::{Dijkstra, PathInfo, ShortestPath};
pub use settings::RoutingSettings;
pub use transport_router::TransportRouter;
