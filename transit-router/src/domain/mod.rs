//! Domain types for the transit network.
//!
//! Stops and buses live in an arena owned by the catalogue and refer to each
//! other through integer handles (`StopId`, `BusId`) rather than references.

mod bus;
mod coordinates;
mod stop;

pub use bus::{Bus, BusId, mirror_stops};
pub use coordinates::Coordinates;
pub use stop::{Stop, StopId};
