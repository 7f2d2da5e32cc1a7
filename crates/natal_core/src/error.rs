//! Error types for the external capability interfaces.

use std::error::Error;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};

/// Errors from an ephemeris position provider.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// No provider data for the requested body or capability.
    Unavailable(&'static str),
    /// Requested instant is outside the provider's supported span.
    OutOfRange { instant: DateTime<Utc> },
    /// Provider-internal failure.
    Internal(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "ephemeris unavailable: {msg}"),
            Self::OutOfRange { instant } => write!(f, "instant out of range: {instant}"),
            Self::Internal(msg) => write!(f, "ephemeris internal error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}

/// Errors from the optional house ephemeris provider.
///
/// These never abort a chart computation: the house resolver catches them
/// and degrades to the "unavailable" house state.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HouseError {
    /// Provider was used before `initialize()` succeeded.
    NotInitialized,
    /// House/ascendant computation failed inside the provider.
    Computation(String),
}

impl Display for HouseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInitialized => write!(f, "house ephemeris not initialized"),
            Self::Computation(msg) => write!(f, "house computation error: {msg}"),
        }
    }
}

impl Error for HouseError {}
