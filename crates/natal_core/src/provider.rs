//! External capability interfaces consumed by the chart engine.
//!
//! The engine never computes raw ephemeris positions itself: body longitudes,
//! rise/set searches, and the exact ascendant all come from providers behind
//! these traits, supplied by the caller. This replaces the original design's
//! ambient-global provider lookup with explicit injection.

use chrono::{DateTime, Utc};

use crate::body::Body;
use crate::error::{EphemerisError, HouseError};
use crate::location::GeoLocation;

/// Horizon-crossing direction for a rise/set search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Body crossing the horizon upward (rise).
    Ascending,
    /// Body crossing the horizon downward (set).
    Descending,
}

/// Supplies ecliptic longitudes and rise/set event searches.
///
/// Implementations are expected to be deterministic for a given instant and
/// to bound their own search time; the engine performs no retries and
/// enforces no timeout.
pub trait EphemerisProvider {
    /// Geocentric ecliptic longitude of `body` at `instant`, in degrees.
    ///
    /// The returned value need not be pre-normalized; the engine wraps it
    /// into [0, 360).
    fn ecliptic_longitude(
        &self,
        body: Body,
        instant: DateTime<Utc>,
    ) -> Result<f64, EphemerisError>;

    /// Search forward from `from` for the next horizon crossing of `body`
    /// in the given `direction`, within `window_days`.
    ///
    /// `Ok(None)` means no event occurs inside the window (e.g. polar
    /// day/night); it is not an error.
    fn search_rise_set(
        &self,
        body: Body,
        observer: &GeoLocation,
        direction: Direction,
        from: DateTime<Utc>,
        window_days: f64,
    ) -> Result<Option<DateTime<Utc>>, EphemerisError>;
}

/// Raw angle set returned by a house ephemeris provider.
///
/// `ascmc_deg` is the provider's native angle array (ascendant, MC, ARMC,
/// vertex, ...); index 0 is always the ascendant, duplicated in
/// `ascendant_deg` for convenience. The engine derives whole-sign cusps from
/// the ascendant and ignores the rest of the array.
#[derive(Debug, Clone, PartialEq)]
pub struct HouseAngles {
    /// Ecliptic longitude of the ascendant in degrees.
    pub ascendant_deg: f64,
    /// Provider-native angle array; `ascmc_deg[0]` equals `ascendant_deg`.
    pub ascmc_deg: Vec<f64>,
}

/// Optional high-precision provider for the exact ascendant.
///
/// Implementations own their initialization state: `initialize` must be
/// idempotent and safe to call from concurrent chart computations
/// (uninitialized -> initializing -> ready, e.g. via `std::sync::OnceLock`).
/// A process-wide mutable "initialized" flag is explicitly not part of this
/// contract.
pub trait HouseEphemerisProvider {
    /// Prepare the provider for use. At-most-once effectively; subsequent
    /// calls return the first outcome.
    fn initialize(&self) -> Result<(), HouseError>;

    /// Convert a UTC instant into the provider's day-number representation
    /// (Julian day, UT).
    fn julian_day(&self, instant: DateTime<Utc>) -> f64;

    /// Whole-sign house angles for the given day number and observer
    /// coordinates.
    fn whole_sign_angles(
        &self,
        jd_ut: f64,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<HouseAngles, HouseError>;
}

impl HouseAngles {
    /// Build from a raw provider angle array.
    ///
    /// Returns `None` when the array is empty (no ascendant to read).
    pub fn from_ascmc(ascmc_deg: Vec<f64>) -> Option<Self> {
        let ascendant_deg = *ascmc_deg.first()?;
        Some(Self {
            ascendant_deg,
            ascmc_deg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_angles_from_ascmc() {
        let angles = HouseAngles::from_ascmc(vec![123.5, 33.2]).unwrap();
        assert!((angles.ascendant_deg - 123.5).abs() < 1e-12);
        assert_eq!(angles.ascmc_deg.len(), 2);
    }

    #[test]
    fn house_angles_empty_ascmc() {
        assert!(HouseAngles::from_ascmc(Vec::new()).is_none());
    }
}
