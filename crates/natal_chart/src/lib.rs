//! Natal chart engine: birth input resolution, body placement, aspect
//! detection, and optional whole-sign houses.
//!
//! The pipeline is `BirthInput` -> resolved UTC instant -> ten body
//! longitudes from an [`natal_core::EphemerisProvider`] -> zodiac placements
//! and aspects via `natal_zodiac` -> optional houses via an
//! [`natal_core::HouseEphemerisProvider`]. Body longitude failures abort the
//! chart; house failures degrade to an explicit unavailable state.

pub mod chart;
pub mod error;
pub mod houses;
pub mod input;
pub mod resolve;

pub use chart::{BodyPosition, ChartResult, compute_chart};
pub use error::ChartError;
pub use houses::{HouseResult, resolve_houses};
pub use input::{BirthInput, TimeMode};
pub use resolve::resolve_instant;
