//! Stops and their arena handles.

use std::collections::BTreeSet;
use std::fmt;

use super::{BusId, Coordinates};

/// Handle to a stop owned by a [`TransportCatalogue`](crate::catalogue::TransportCatalogue).
///
/// The wrapped value is the stop's insertion index. Handles are only
/// meaningful for the catalogue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StopId(pub usize);

impl StopId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

/// A named physical location served by zero or more buses.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub name: String,
    pub coordinates: Coordinates,
    /// Buses calling at this stop. Grows as buses are added to the catalogue.
    pub(crate) buses: BTreeSet<BusId>,
}

impl Stop {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
            buses: BTreeSet::new(),
        }
    }

    /// Buses visiting this stop, in insertion order of the buses.
    pub fn buses(&self) -> impl Iterator<Item = BusId> + '_ {
        self.buses.iter().copied()
    }

    /// Returns true if no bus visits this stop.
    pub fn is_unserved(&self) -> bool {
        self.buses.is_empty()
    }
}
