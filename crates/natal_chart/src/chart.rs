//! Chart assembly: resolved instant, body placements, aspects, houses.

use chrono::{DateTime, Utc};

use natal_core::{ALL_BODIES, Body, EphemerisProvider, HouseEphemerisProvider};
use natal_zodiac::{
    Aspect, Dms, Element, Quality, Sign, deg_to_dms, detect_aspects, normalize_360, sign_position,
};

use crate::error::ChartError;
use crate::houses::{HouseResult, resolve_houses};
use crate::input::BirthInput;
use crate::resolve::resolve_instant;

/// One body's zodiac placement in a chart.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude normalized to `[0, 360)`.
    pub longitude_deg: f64,
    pub sign: Sign,
    pub element: Element,
    pub quality: Quality,
    /// Degrees past the sign boundary, in `[0, 30)`.
    pub degrees_in_sign: f64,
}

impl BodyPosition {
    /// Place a body from a raw (possibly unnormalized) longitude.
    pub fn from_longitude(body: Body, longitude_deg: f64) -> Self {
        let lon = normalize_360(longitude_deg);
        let pos = sign_position(lon);
        Self {
            body,
            longitude_deg: lon,
            sign: pos.sign,
            element: pos.sign.element(),
            quality: pos.sign.quality(),
            degrees_in_sign: pos.degrees_in_sign,
        }
    }

    /// Sexagesimal rendering of the in-sign offset.
    pub fn dms_in_sign(&self) -> Dms {
        deg_to_dms(self.degrees_in_sign)
    }
}

/// A fully assembled natal chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ChartResult {
    /// The resolved UTC instant all positions refer to.
    pub instant: DateTime<Utc>,
    /// All ten bodies in fixed chart order (Sun first, Pluto last).
    pub positions: [BodyPosition; 10],
    /// Detected aspects, in deterministic pair-then-kind order.
    pub aspects: Vec<Aspect>,
    /// House data, or the explicit unavailable state.
    pub houses: HouseResult,
}

/// Compute a complete chart for one birth input.
///
/// Any body longitude failure aborts the whole computation; no partial
/// charts are produced. House failures never abort (see
/// [`resolve_houses`]).
pub fn compute_chart(
    input: &BirthInput,
    ephemeris: &dyn EphemerisProvider,
    house_provider: Option<&dyn HouseEphemerisProvider>,
) -> Result<ChartResult, ChartError> {
    let instant = resolve_instant(input, ephemeris)?;

    let mut longitudes = [0.0_f64; 10];
    for (slot, &body) in longitudes.iter_mut().zip(ALL_BODIES.iter()) {
        *slot = ephemeris.ecliptic_longitude(body, instant)?;
    }

    let positions: [BodyPosition; 10] =
        std::array::from_fn(|i| BodyPosition::from_longitude(ALL_BODIES[i], longitudes[i]));

    let pairs: Vec<(Body, f64)> = positions
        .iter()
        .map(|p| (p.body, p.longitude_deg))
        .collect();
    let aspects = detect_aspects(&pairs);

    let houses = resolve_houses(input, instant, house_provider);

    log::debug!(
        "chart at {instant}: {} aspects, houses {}",
        aspects.len(),
        if houses.is_available() { "available" } else { "unavailable" }
    );

    Ok(ChartResult {
        instant,
        positions,
        aspects,
        houses,
    })
}
