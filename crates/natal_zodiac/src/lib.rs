//! Pure zodiac domain: sign tables, longitude mapping, aspect detection.
//!
//! Everything in this crate is total and deterministic over plain degree
//! values; no I/O and no ephemeris access.

pub mod aspect;
pub mod sign;
pub mod util;

pub use aspect::{ALL_ASPECT_KINDS, Aspect, AspectKind, detect_aspects, separation_deg};
pub use sign::{ALL_SIGNS, Dms, Element, Quality, Sign, SignPosition, deg_to_dms, sign_position};
pub use util::normalize_360;
