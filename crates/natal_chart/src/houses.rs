//! Whole-sign house resolution.
//!
//! Houses are an optional layer on top of the body positions: they need an
//! exact birth time, finite observer coordinates, and a house-capable
//! provider. When any of those is missing, or the provider fails, the chart
//! carries an explicit "unavailable" house result instead of an error.

use chrono::{DateTime, Utc};

use natal_core::{HouseEphemerisProvider, HouseError};
use natal_zodiac::{SignPosition, normalize_360, sign_position};

use crate::input::{BirthInput, TimeMode};

/// Number of houses in the whole-sign system.
const HOUSE_COUNT: usize = 12;

/// Outcome of house resolution, always present on a chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct HouseResult {
    /// Ascendant ecliptic longitude, normalized to `[0, 360)`.
    /// `None` when houses could not be computed.
    pub ascendant_deg: Option<f64>,
    /// Twelve cusp longitudes starting at house 1; empty when unavailable.
    pub cusps_deg: Vec<f64>,
}

impl HouseResult {
    /// The explicit "no houses" value.
    pub fn unavailable() -> Self {
        Self {
            ascendant_deg: None,
            cusps_deg: Vec::new(),
        }
    }

    /// Whether house data was computed.
    pub fn is_available(&self) -> bool {
        self.ascendant_deg.is_some()
    }

    /// Zodiac placement of the ascendant, when available.
    pub fn ascendant_position(&self) -> Option<SignPosition> {
        self.ascendant_deg.map(sign_position)
    }
}

/// Resolve whole-sign houses for a birth input, degrading to
/// [`HouseResult::unavailable`] whenever the preconditions are not met or
/// the provider fails.
pub fn resolve_houses(
    input: &BirthInput,
    instant: DateTime<Utc>,
    provider: Option<&dyn HouseEphemerisProvider>,
) -> HouseResult {
    let Some(provider) = provider else {
        return HouseResult::unavailable();
    };
    if input.time_mode != TimeMode::Exact {
        return HouseResult::unavailable();
    }
    let Some(observer) = input.observer() else {
        return HouseResult::unavailable();
    };

    match compute(provider, instant, observer.latitude_deg, observer.longitude_deg) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("house computation failed, chart continues without houses: {e}");
            HouseResult::unavailable()
        }
    }
}

/// Fallible inner step: initialize, obtain the ascendant, derive cusps.
fn compute(
    provider: &dyn HouseEphemerisProvider,
    instant: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<HouseResult, HouseError> {
    provider.initialize()?;
    let jd_ut = provider.julian_day(instant);
    let angles = provider.whole_sign_angles(jd_ut, latitude_deg, longitude_deg)?;

    let ascendant = normalize_360(angles.ascendant_deg);
    let cusps_deg = (0..HOUSE_COUNT)
        .map(|i| normalize_360(ascendant + 30.0 * i as f64))
        .collect();

    Ok(HouseResult {
        ascendant_deg: Some(ascendant),
        cusps_deg,
    })
}
