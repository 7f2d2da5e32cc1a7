//! Geographic observer location.

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Observer at mean sea level.
    pub fn sea_level(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self::new(latitude_deg, longitude_deg, 0.0)
    }

    /// Whether both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.latitude_deg.is_finite() && self.longitude_deg.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_zero_altitude() {
        let loc = GeoLocation::sea_level(34.0536909, -118.242766);
        assert_eq!(loc.altitude_m, 0.0);
        assert!((loc.latitude_deg - 34.0536909).abs() < 1e-12);
    }

    #[test]
    fn non_finite_detected() {
        assert!(!GeoLocation::sea_level(f64::NAN, 0.0).is_finite());
        assert!(!GeoLocation::sea_level(0.0, f64::INFINITY).is_finite());
        assert!(GeoLocation::sea_level(0.0, 0.0).is_finite());
    }
}
