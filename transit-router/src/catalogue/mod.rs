//! The transport catalogue.
//!
//! Owns every stop and bus in insertion order and answers distance and
//! statistics queries. Records refer to each other through `StopId` and
//! `BusId` handles issued here.

mod distance;
mod error;
mod info;

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Bus, BusId, Coordinates, Stop, StopId};
use crate::router::RouteSource;

pub use distance::DistanceTable;
pub use error::CatalogueError;
pub use info::{BusInfo, StopInfo};

/// Arena of stops and buses plus measured road distances.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,
    stops_by_name: HashMap<String, StopId>,
    buses_by_name: HashMap<String, BusId>,
    distances: DistanceTable,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop. Names must be unique.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stops_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        self.stops_by_name.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        Ok(id)
    }

    /// Record the road distance from one named stop to another.
    ///
    /// `metres` must be finite and non-negative.
    pub fn set_distance(&mut self, from: &str, to: &str, metres: f64) -> Result<(), CatalogueError> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        if !metres.is_finite() || metres < 0.0 {
            return Err(CatalogueError::InvalidDistance {
                from: from.to_string(),
                to: to.to_string(),
                metres,
            });
        }
        self.distances.insert(from_id, to_id, metres);
        Ok(())
    }

    /// Add a bus visiting `stops` in order.
    ///
    /// `stops` is the full traversal: a line that is not a round trip must
    /// already include its return leg (see [`mirror_stops`](crate::domain::mirror_stops)).
    pub fn add_bus<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<BusId, CatalogueError> {
        let name = name.into();
        if self.buses_by_name.contains_key(&name) {
            return Err(CatalogueError::DuplicateBus(name));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyBus(name));
        }

        let stop_ids = stops
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let id = BusId(self.buses.len());
        for stop in &stop_ids {
            self.stops[stop.index()].buses.insert(id);
        }

        debug!(bus = %name, stops = stop_ids.len(), is_roundtrip, "added bus");

        self.buses_by_name.insert(name.clone(), id);
        self.buses.push(Bus::new(name, stop_ids, is_roundtrip));
        Ok(id)
    }

    fn require_stop(&self, name: &str) -> Result<StopId, CatalogueError> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_string()))
    }

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stops_by_name.get(name).copied()
    }

    pub fn bus_id(&self, name: &str) -> Option<BusId> {
        self.buses_by_name.get(name).copied()
    }

    /// Look up a stop by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Look up a bus by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn bus(&self, id: BusId) -> &Bus {
        &self.buses[id.index()]
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = (BusId, &Bus)> {
        self.buses.iter().enumerate().map(|(i, b)| (BusId(i), b))
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Road distance from `from` to `to` in metres.
    ///
    /// Uses the measured distance for this direction if present, then the
    /// measured distance for the reverse direction, then the great-circle
    /// distance between the two stops.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        self.distances
            .get(from, to)
            .unwrap_or_else(|| self.geographic_distance(from, to))
    }

    /// Great-circle distance between two stops in metres.
    pub fn geographic_distance(&self, from: StopId, to: StopId) -> f64 {
        self.stop(from)
            .coordinates
            .distance_to(self.stop(to).coordinates)
    }

    /// Statistics for the named bus, or `None` if there is no such bus.
    pub fn bus_info(&self, name: &str) -> Option<BusInfo> {
        let bus = self.bus(self.bus_id(name)?);

        let (route_length, geo_length) = bus.hops().fold((0.0, 0.0), |(road, geo), (a, b)| {
            (road + self.distance(a, b), geo + self.geographic_distance(a, b))
        });
        let curvature = if geo_length > 0.0 {
            route_length / geo_length
        } else {
            1.0
        };

        Some(BusInfo {
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stop_count(),
            route_length,
            curvature,
        })
    }

    /// Buses calling at the named stop, or `None` if there is no such stop.
    pub fn stop_info(&self, name: &str) -> Option<StopInfo> {
        let stop = self.stop(self.stop_id(name)?);
        let mut buses: Vec<String> = stop.buses().map(|b| self.bus(b).name.clone()).collect();
        buses.sort();
        Some(StopInfo { buses })
    }
}

impl RouteSource for TransportCatalogue {
    fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.iter()
    }

    fn stop_name(&self, stop: StopId) -> &str {
        &self.stop(stop).name
    }

    fn distance(&self, from: StopId, to: StopId) -> f64 {
        TransportCatalogue::distance(self, from, to)
    }
}
