//! Snapshot-backed ephemeris provider.
//!
//! Wraps a fixed table of ten body longitudes captured at one instant.
//! Useful for replaying recorded positions (CLI input, integration tests)
//! without a numerical ephemeris engine. The snapshot carries no event
//! data, so rise/set searches report not-found and callers fall back to
//! their documented defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::location::GeoLocation;
use crate::provider::{Direction, EphemerisProvider};

/// Ecliptic longitudes of all ten bodies at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEphemeris {
    /// Longitudes in degrees, indexed by `Body::index()` (0-9).
    pub longitudes: [f64; 10],
}

impl SnapshotEphemeris {
    /// Build from longitudes in chart order (Sun .. Pluto).
    pub fn from_longitudes(longitudes: [f64; 10]) -> Self {
        Self { longitudes }
    }

    /// Longitude for a specific body in degrees.
    pub fn longitude(&self, body: Body) -> f64 {
        self.longitudes[body.index() as usize]
    }

    /// Parse a snapshot from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, EphemerisError> {
        serde_json::from_str(json).map_err(|e| EphemerisError::Internal(e.to_string()))
    }
}

impl EphemerisProvider for SnapshotEphemeris {
    fn ecliptic_longitude(
        &self,
        body: Body,
        _instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError> {
        Ok(self.longitude(body))
    }

    fn search_rise_set(
        &self,
        _body: Body,
        _observer: &GeoLocation,
        _direction: Direction,
        _from: DateTime<Utc>,
        _window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError> {
        // A snapshot holds positions only; no events to search.
        Ok(None)
    }
}
