/// A geographic position in degrees
///
/// Latitude is positive north, longitude positive east. The optional
/// altitude is carried through untouched; none of the cone geometry reads
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Optional altitude, unit defined by the caller
    pub altitude: Option<f64>,
}

impl GeoPoint {
    /// Create a point at sea level
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: None,
        }
    }

    /// Create a point with an altitude
    pub fn with_altitude(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude: Some(altitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_some_eq};

    #[test]
    fn test_new_has_no_altitude() {
        let point = GeoPoint::new(25.4, -76.2);
        assert_eq!(point.latitude, 25.4);
        assert_eq!(point.longitude, -76.2);
        assert_none!(point.altitude);
    }

    #[test]
    fn test_with_altitude() {
        let point = GeoPoint::with_altitude(25.4, -76.2, 0.0);
        assert_some_eq!(point.altitude, 0.0);
    }
}
