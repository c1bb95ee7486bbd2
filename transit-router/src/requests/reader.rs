//! Loading base requests into a catalogue.

use tracing::debug;

use crate::catalogue::{CatalogueError, TransportCatalogue};
use crate::domain::{Coordinates, mirror_stops};

use super::dto::{BaseRequest, BusRequest, StopRequest};

/// Build a catalogue from base requests.
///
/// Stops are added first, then road distances, then buses, so a request may
/// refer to a stop listed after it. Buses that are not round trips get their
/// return leg appended.
pub fn fill_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, CatalogueError> {
    let mut catalogue = TransportCatalogue::new();

    let stops: Vec<&StopRequest> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Stop(stop) => Some(stop),
            BaseRequest::Bus(_) => None,
        })
        .collect();
    let buses: Vec<&BusRequest> = requests
        .iter()
        .filter_map(|r| match r {
            BaseRequest::Bus(bus) => Some(bus),
            BaseRequest::Stop(_) => None,
        })
        .collect();

    for stop in &stops {
        catalogue.add_stop(
            stop.name.clone(),
            Coordinates::new(stop.latitude, stop.longitude),
        )?;
    }

    for stop in &stops {
        for (to, &metres) in &stop.road_distances {
            catalogue.set_distance(&stop.name, to, metres)?;
        }
    }

    for bus in &buses {
        if bus.is_roundtrip {
            catalogue.add_bus(bus.name.clone(), &bus.stops, true)?;
        } else {
            catalogue.add_bus(bus.name.clone(), &mirror_stops(&bus.stops), false)?;
        }
    }

    debug!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}
