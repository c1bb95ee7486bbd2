//! Road distance overrides between stops.

use std::collections::HashMap;

use crate::domain::StopId;

/// Asymmetric table of measured road distances, in metres.
///
/// An entry for `(a, b)` describes travel from `a` to `b`. Lookups fall back
/// to the reverse direction when only that one was measured.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<(StopId, StopId), f64>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance from `from` to `to`, replacing any earlier value
    /// for the same direction.
    pub fn insert(&mut self, from: StopId, to: StopId, metres: f64) {
        self.entries.insert((from, to), metres);
    }

    /// Distance from `from` to `to`, preferring the exact direction.
    ///
    /// Returns `None` if neither direction was recorded.
    pub fn get(&self, from: StopId, to: StopId) -> Option<f64> {
        self.entries
            .get(&(from, to))
            .or_else(|| self.entries.get(&(to, from)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
