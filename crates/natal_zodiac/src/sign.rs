//! Zodiac sign mapping and DMS (degrees-minutes-seconds) conversion.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Each sign carries a fixed element and
//! quality; the table is a constant of the domain, not configuration.
//! Given an ecliptic longitude, we identify the sign and express the
//! position as degrees within that sign.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The four classical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    /// Display name of the element.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Air => "Air",
            Self::Water => "Water",
        }
    }
}

/// The three modalities (qualities).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Quality {
    /// Display name of the quality.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cardinal => "Cardinal",
            Self::Fixed => "Fixed",
            Self::Mutable => "Mutable",
        }
    }
}

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Unicode symbol of the sign.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Aries => "\u{2648}",
            Self::Taurus => "\u{2649}",
            Self::Gemini => "\u{264A}",
            Self::Cancer => "\u{264B}",
            Self::Leo => "\u{264C}",
            Self::Virgo => "\u{264D}",
            Self::Libra => "\u{264E}",
            Self::Scorpio => "\u{264F}",
            Self::Sagittarius => "\u{2650}",
            Self::Capricorn => "\u{2651}",
            Self::Aquarius => "\u{2652}",
            Self::Pisces => "\u{2653}",
        }
    }

    /// Element of the sign (repeats Fire/Earth/Air/Water around the circle).
    pub const fn element(self) -> Element {
        match self {
            Self::Aries | Self::Leo | Self::Sagittarius => Element::Fire,
            Self::Taurus | Self::Virgo | Self::Capricorn => Element::Earth,
            Self::Gemini | Self::Libra | Self::Aquarius => Element::Air,
            Self::Cancer | Self::Scorpio | Self::Pisces => Element::Water,
        }
    }

    /// Quality of the sign (repeats Cardinal/Fixed/Mutable around the circle).
    pub const fn quality(self) -> Quality {
        match self {
            Self::Aries | Self::Cancer | Self::Libra | Self::Capricorn => Quality::Cardinal,
            Self::Taurus | Self::Leo | Self::Scorpio | Self::Aquarius => Quality::Fixed,
            Self::Gemini | Self::Virgo | Self::Sagittarius | Self::Pisces => Quality::Mutable,
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }
}

/// Degrees-minutes-seconds representation of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees (0..29 within a sign, or 0..359 standalone).
    pub degrees: u16,
    /// Arc-minutes (0..59).
    pub minutes: u8,
    /// Arc-seconds (0.0..60.0), may include fractional part.
    pub seconds: f64,
}

/// Full sign position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignPosition {
    /// The zodiac sign.
    pub sign: Sign,
    /// 0-based sign index (0 = Aries).
    pub sign_index: u8,
    /// Position within the sign as DMS.
    pub dms: Dms,
    /// Decimal degrees within the sign [0.0, 30.0).
    pub degrees_in_sign: f64,
}

/// Convert decimal degrees to degrees-minutes-seconds.
///
/// Handles negative input by taking absolute value.
pub fn deg_to_dms(deg: f64) -> Dms {
    let d = deg.abs();
    let total_degrees = d.floor() as u16;
    let remainder = (d - total_degrees as f64) * 60.0;
    let minutes = remainder.floor() as u8;
    let seconds = (remainder - minutes as f64) * 60.0;
    Dms {
        degrees: total_degrees,
        minutes,
        seconds,
    }
}

/// Determine the zodiac sign from an ecliptic longitude.
///
/// The input is a tropical ecliptic longitude in degrees; negative and
/// out-of-range values are wrapped into [0, 360), never rejected. Each sign
/// spans exactly 30 degrees: Aries = [0, 30), Taurus = [30, 60), etc.
pub fn sign_position(lon_deg: f64) -> SignPosition {
    // normalize_360 guarantees lon < 360, so the index is at most 11
    let lon = normalize_360(lon_deg);
    let sign_idx = (lon / 30.0).floor() as u8;
    let degrees_in_sign = lon - (sign_idx as f64) * 30.0;
    let sign = ALL_SIGNS[sign_idx as usize];
    let dms = deg_to_dms(degrees_in_sign);

    SignPosition {
        sign,
        sign_index: sign_idx,
        dms,
        degrees_in_sign,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn element_cycle() {
        // Fire, Earth, Air, Water repeating from Aries
        let expected = [
            Element::Fire,
            Element::Earth,
            Element::Air,
            Element::Water,
        ];
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.element(), expected[i % 4], "element of {}", s.name());
        }
    }

    #[test]
    fn quality_cycle() {
        // Cardinal, Fixed, Mutable repeating from Aries
        let expected = [Quality::Cardinal, Quality::Fixed, Quality::Mutable];
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.quality(), expected[i % 3], "quality of {}", s.name());
        }
    }

    #[test]
    fn symbols_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.symbol().is_empty());
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn deg_to_dms_zero() {
        let d = deg_to_dms(0.0);
        assert_eq!(d.degrees, 0);
        assert_eq!(d.minutes, 0);
        assert!(d.seconds.abs() < 1e-10);
    }

    #[test]
    fn deg_to_dms_exact_minutes() {
        // 10.5 deg = 10 deg 30' 0"
        let d = deg_to_dms(10.5);
        assert_eq!(d.degrees, 10);
        assert_eq!(d.minutes, 30);
        assert!(d.seconds.abs() < 0.01);
    }

    #[test]
    fn sign_boundary_0() {
        let pos = sign_position(0.0);
        assert_eq!(pos.sign, Sign::Aries);
        assert_eq!(pos.sign_index, 0);
        assert!(pos.degrees_in_sign.abs() < 1e-10);
    }

    #[test]
    fn sign_all_boundaries() {
        for i in 0..12u8 {
            let lon = i as f64 * 30.0;
            let pos = sign_position(lon);
            assert_eq!(pos.sign_index, i, "boundary at {lon} deg");
        }
    }

    #[test]
    fn sign_mid() {
        let pos = sign_position(45.5);
        assert_eq!(pos.sign, Sign::Taurus);
        assert!((pos.degrees_in_sign - 15.5).abs() < 1e-10);
    }

    #[test]
    fn sign_wrap_around() {
        let pos = sign_position(365.0);
        assert_eq!(pos.sign, Sign::Aries);
        assert!((pos.degrees_in_sign - 5.0).abs() < 1e-10);
    }

    #[test]
    fn sign_tiny_negative_wraps_to_aries() {
        // -1e-14 rounds to a full turn; must not report Pisces at 30 deg
        let pos = sign_position(-1e-14);
        assert_eq!(pos.sign, Sign::Aries);
        assert_eq!(pos.sign_index, 0);
        assert!(
            pos.degrees_in_sign < 30.0,
            "degrees_in_sign = {}",
            pos.degrees_in_sign
        );
    }

    #[test]
    fn sign_negative() {
        let pos = sign_position(-10.0);
        assert_eq!(pos.sign, Sign::Pisces); // 350 deg
        assert!((pos.degrees_in_sign - 20.0).abs() < 1e-10);
    }

    #[test]
    fn sign_invariant_under_full_turns() {
        for k in [-3i32, -1, 0, 1, 2, 5] {
            let pos = sign_position(123.4 + 360.0 * k as f64);
            assert_eq!(pos.sign, Sign::Leo, "k = {k}");
            assert!(
                (pos.degrees_in_sign - 3.4).abs() < 1e-9,
                "k = {k}, deg = {}",
                pos.degrees_in_sign
            );
        }
    }

    #[test]
    fn degrees_in_sign_equals_lon_mod_30() {
        for lon in [0.0, 17.25, 29.999, 30.0, 211.75, 359.5, -45.0, 721.0] {
            let pos = sign_position(lon);
            let expected = normalize_360(lon) % 30.0;
            assert!(pos.degrees_in_sign >= 0.0 && pos.degrees_in_sign < 30.0);
            assert!(
                (pos.degrees_in_sign - expected).abs() < 1e-9,
                "lon = {lon}"
            );
        }
    }

    #[test]
    fn sign_dms_within_sign() {
        // 45.5 deg -> Taurus, 15 deg 30' 0"
        let pos = sign_position(45.5);
        assert_eq!(pos.dms.degrees, 15);
        assert_eq!(pos.dms.minutes, 30);
        assert!(pos.dms.seconds.abs() < 0.01);
    }
}
