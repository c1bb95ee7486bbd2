//! Routing settings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::RouterError;

/// Accepted wait times, in minutes.
const WAIT_TIME_RANGE: RangeInclusive<u32> = 1..=1000;

/// Accepted velocities, in km/h.
const VELOCITY_RANGE: RangeInclusive<f64> = 1.0..=1000.0;

/// Parameters that shape the routing graph.
///
/// Changing either value means building a new router; there is no in-place
/// update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Minutes spent at a stop before every boarding.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self {
            bus_wait_time,
            bus_velocity,
        }
    }

    /// Check both values are in range.
    pub fn validate(&self) -> Result<(), RouterError> {
        if !WAIT_TIME_RANGE.contains(&self.bus_wait_time) {
            return Err(RouterError::InvalidWaitTime(self.bus_wait_time));
        }
        // NaN fails `contains`
        if !VELOCITY_RANGE.contains(&self.bus_velocity) {
            return Err(RouterError::InvalidVelocity(self.bus_velocity));
        }
        Ok(())
    }

    /// Wait time as a graph weight, in minutes.
    pub fn wait_time(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed in metres per minute, matching distances in metres and
    /// weights in minutes.
    pub fn metres_per_minute(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self {
            bus_wait_time: 6,
            bus_velocity: 40.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_settings() {
        let settings = RoutingSettings::default();
        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn unit_conversions() {
        let settings = RoutingSettings::new(6, 60.0);
        assert_eq!(settings.wait_time(), 6.0);
        assert_relative_eq!(settings.metres_per_minute(), 1000.0);
    }

    #[test]
    fn range_bounds() {
        assert!(RoutingSettings::new(1, 1.0).validate().is_ok());
        assert!(RoutingSettings::new(1000, 1000.0).validate().is_ok());

        assert_eq!(
            RoutingSettings::new(0, 40.0).validate(),
            Err(RouterError::InvalidWaitTime(0))
        );
        assert_eq!(
            RoutingSettings::new(1001, 40.0).validate(),
            Err(RouterError::InvalidWaitTime(1001))
        );
        assert_eq!(
            RoutingSettings::new(6, 0.5).validate(),
            Err(RouterError::InvalidVelocity(0.5))
        );
        assert!(RoutingSettings::new(6, f64::NAN).validate().is_err());
        assert!(RoutingSettings::new(6, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn deserialize_from_json() {
        let settings: RoutingSettings =
            serde_json::from_str(r#"{"bus_wait_time": 2, "bus_velocity": 30}"#).unwrap();
        assert_eq!(settings, RoutingSettings::new(2, 30.0));
    }
}
