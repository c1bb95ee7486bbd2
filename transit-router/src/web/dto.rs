//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Query string of `GET /route`.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Stop the trip starts at
    pub from: String,

    /// Stop the trip ends at
    pub to: String,
}

/// Result of replacing the network.
#[derive(Debug, PartialEq, Serialize)]
pub struct NetworkSummary {
    pub stops: usize,
    pub buses: usize,
    pub routed_stops: usize,
}

impl NetworkSummary {
    pub fn of(network: &Network) -> Self {
        Self {
            stops: network.catalogue().stop_count(),
            buses: network.catalogue().bus_count(),
            routed_stops: network.router().graph().stop_count(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
