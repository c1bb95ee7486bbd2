//! Aggregate statistics for buses and stops.

use serde::Serialize;

/// Summary of a bus line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusInfo {
    /// Stops on the traversal, counting repeats
    pub stop_count: usize,

    /// Distinct stops on the traversal
    pub unique_stop_count: usize,

    /// Road length of the traversal in metres
    pub route_length: f64,

    /// Road length divided by great-circle length
    pub curvature: f64,
}

/// Summary of a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopInfo {
    /// Names of the buses calling here, sorted
    pub buses: Vec<String>,
}
