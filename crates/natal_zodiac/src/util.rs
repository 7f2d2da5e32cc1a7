//! Shared angle utilities.

/// Normalize an angle to [0, 360) degrees.
///
/// For tiny negative inputs `r + 360.0` rounds to exactly `360.0`, which
/// would escape the half-open range, so the result is wrapped once more.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    if r >= 360.0 { 0.0 } else { r }
}
