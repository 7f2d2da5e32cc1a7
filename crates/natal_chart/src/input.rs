//! Birth input model.

use std::str::FromStr;

use natal_core::GeoLocation;

use crate::error::ChartError;

/// How the birth time is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeMode {
    /// Civil clock time is known; combined with the UTC offset.
    Exact,
    /// 12:00:00 UTC on the birth date.
    Noon,
    /// Local sunrise, best-effort via the ephemeris; 06:00 UTC fallback.
    Sunrise,
    /// Local sunset, best-effort via the ephemeris; 18:00 UTC fallback.
    Sunset,
    /// 00:00:00 UTC on the birth date.
    Midnight,
}

impl TimeMode {
    /// Display name of the mode.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "Exact",
            Self::Noon => "Noon",
            Self::Sunrise => "Sunrise",
            Self::Sunset => "Sunset",
            Self::Midnight => "Midnight",
        }
    }
}

impl FromStr for TimeMode {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "noon" => Ok(Self::Noon),
            "sunrise" => Ok(Self::Sunrise),
            "sunset" => Ok(Self::Sunset),
            "midnight" => Ok(Self::Midnight),
            _ => Err(ChartError::InvalidTimeSpec(
                "time mode must be one of Exact, Noon, Sunrise, Sunset, Midnight",
            )),
        }
    }
}

/// One chart request: calendar date, time specification, and observer.
///
/// Calendar fields are kept as raw numbers so an invalid combination is
/// representable; the instant resolver validates them and reports
/// `InvalidTimeSpec`. Immutable per chart request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub time_mode: TimeMode,
    /// Hour of day in local civil time. Used only when `time_mode` is Exact.
    pub hour: u32,
    /// Minute of hour. Used only when `time_mode` is Exact.
    pub minute: u32,
    /// Signed UTC offset of the birth place in hours (e.g. -7.0, +5.5).
    pub utc_offset_hours: f64,
    /// Geodetic latitude in degrees, north positive. Required only for
    /// Sunrise/Sunset resolution and house computation.
    pub latitude_deg: Option<f64>,
    /// Geodetic longitude in degrees, east positive.
    pub longitude_deg: Option<f64>,
}

impl BirthInput {
    /// Observer location at sea level, when both coordinates are present
    /// and finite.
    pub fn observer(&self) -> Option<GeoLocation> {
        match (self.latitude_deg, self.longitude_deg) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(GeoLocation::sea_level(lat, lon))
            }
            _ => None,
        }
    }
}
