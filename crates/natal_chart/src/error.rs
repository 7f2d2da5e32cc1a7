//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use natal_core::EphemerisError;

/// Errors that abort a chart computation.
///
/// House/ascendant failures are deliberately not represented here: they are
/// caught at the house boundary and degrade to the "unavailable" house
/// state without affecting the rest of the chart.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Date/time fields do not form a valid calendar instant.
    InvalidTimeSpec(&'static str),
    /// Body longitude lookup failed or no provider capability exists.
    Ephemeris(EphemerisError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeSpec(msg) => write!(f, "invalid time specification: {msg}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
