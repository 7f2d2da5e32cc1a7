//! Core contracts for the natal chart engine.
//!
//! This crate defines:
//! - The ten tracked bodies and their fixed chart ordering
//! - The external capability traits the engine consumes
//!   ([`EphemerisProvider`], [`HouseEphemerisProvider`])
//! - A deterministic snapshot-backed provider for replay and testing
//!
//! The numerical ephemeris itself is an external collaborator; nothing in
//! this workspace reimplements it.

pub mod body;
pub mod error;
pub mod location;
pub mod provider;
pub mod snapshot;

pub use body::{ALL_BODIES, Body};
pub use error::{EphemerisError, HouseError};
pub use location::GeoLocation;
pub use provider::{Direction, EphemerisProvider, HouseAngles, HouseEphemerisProvider};
pub use snapshot::SnapshotEphemeris;
