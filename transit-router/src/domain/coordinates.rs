//! Geographic coordinates and great-circle distance.

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

/// A position on the Earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    fn to_point(self) -> Point {
        // geo points are (x, y) = (longitude, latitude)
        Point::new(self.longitude, self.latitude)
    }

    /// Great-circle distance to `other` in metres.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_router::domain::Coordinates;
    ///
    /// let a = Coordinates::new(55.611087, 37.20829);
    /// assert_eq!(a.distance_to(a), 0.0);
    /// ```
    pub fn distance_to(self, other: Coordinates) -> f64 {
        if self == other {
            return 0.0;
        }
        self.to_point().haversine_distance(&other.to_point())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn same_point_is_zero() {
        let c = Coordinates::new(55.595884, 37.209755);
        assert_eq!(c.distance_to(c), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Coordinates::new(55.611087, 37.20829);
        let b = Coordinates::new(55.595884, 37.209755);
        assert_relative_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn one_degree_of_latitude() {
        // Roughly 111.2 km along a meridian
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(1.0, 0.0);
        assert_relative_eq!(a.distance_to(b), 111_195.0, max_relative = 1e-3);
    }

    #[test]
    fn serde_field_names() {
        let c: Coordinates =
            serde_json::from_str(r#"{"latitude": 1.5, "longitude": -2.0}"#).unwrap();
        assert_eq!(c, Coordinates::new(1.5, -2.0));
    }
}
