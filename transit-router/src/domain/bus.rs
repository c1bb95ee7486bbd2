//! Bus lines and their arena handles.

use std::collections::HashSet;

use super::StopId;

/// Handle to a bus owned by a [`TransportCatalogue`](crate::catalogue::TransportCatalogue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusId(pub usize);

impl BusId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named bus line.
///
/// `stops` is the full traversal. For a line that is not a round trip the
/// sequence already holds the mirrored return leg, e.g. `A B C B A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn new(name: impl Into<String>, stops: Vec<StopId>, is_roundtrip: bool) -> Self {
        Self {
            name: name.into(),
            stops,
            is_roundtrip,
        }
    }

    /// Number of stops on the traversal, counting repeats.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Number of distinct stops on the traversal.
    pub fn unique_stop_count(&self) -> usize {
        self.stops.iter().collect::<HashSet<_>>().len()
    }

    /// Consecutive `(from, to)` stop pairs along the traversal.
    pub fn hops(&self) -> impl Iterator<Item = (StopId, StopId)> + '_ {
        self.stops.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Expand a one-way stop list into a there-and-back traversal.
///
/// The turnaround stop appears once: `A B C` becomes `A B C B A`.
pub fn mirror_stops<T: Clone>(stops: &[T]) -> Vec<T> {
    let mut full = Vec::with_capacity(stops.len() * 2);
    full.extend_from_slice(stops);
    full.extend(stops.iter().rev().skip(1).cloned());
    full
}
