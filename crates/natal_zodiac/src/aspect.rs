//! Pairwise aspect detection over body longitudes.
//!
//! An aspect is a named angular relationship between two bodies, counted as
//! present when the shorter-arc separation falls strictly within the kind's
//! orb of the exact angle. A pair may match several kinds at once near orb
//! boundaries; every match is emitted, deliberately — readings are never
//! collapsed to the closest kind. Both the pair iteration (ascending chart
//! index) and the kind enumeration order are fixed so output order is stable.

use serde::{Deserialize, Serialize};

use natal_core::Body;

/// The five major aspect kinds, in fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// All aspect kinds in emission order.
pub const ALL_ASPECT_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Display name of the aspect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "Conjunction",
            Self::Opposition => "Opposition",
            Self::Trine => "Trine",
            Self::Square => "Square",
            Self::Sextile => "Sextile",
        }
    }

    /// Exact separation angle in degrees.
    pub const fn exact_angle_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    /// Orb tolerance in degrees. A separation exactly on the orb boundary
    /// does not count (strict comparison).
    pub const fn orb_deg(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Trine => 8.0,
            Self::Square => 6.0,
            Self::Sextile => 4.0,
        }
    }
}

/// A detected aspect between two bodies.
///
/// The pair is unordered; it is stored with `body_a` earlier in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Absolute deviation from the exact aspect angle, in degrees.
    pub orb_deg: f64,
}

/// Shorter-arc angular separation between two longitudes, in [0, 180].
pub fn separation_deg(lon_a: f64, lon_b: f64) -> f64 {
    let angle = (lon_a - lon_b).abs();
    if angle > 180.0 { 360.0 - angle } else { angle }
}

/// Detect every aspect among the given named longitudes.
///
/// Longitudes are expected normalized into [0, 360). Pairs are visited in
/// ascending index order over the input slice; for each pair, every kind in
/// [`ALL_ASPECT_KINDS`] whose orb strictly contains the separation is
/// emitted.
pub fn detect_aspects(longitudes: &[(Body, f64)]) -> Vec<Aspect> {
    let mut aspects = Vec::new();
    for i in 0..longitudes.len() {
        for j in (i + 1)..longitudes.len() {
            let (body_a, lon_a) = longitudes[i];
            let (body_b, lon_b) = longitudes[j];
            let diff = separation_deg(lon_a, lon_b);
            for kind in ALL_ASPECT_KINDS {
                let orb = (diff - kind.exact_angle_deg()).abs();
                if orb < kind.orb_deg() {
                    aspects.push(Aspect {
                        body_a,
                        body_b,
                        kind,
                        orb_deg: orb,
                    });
                }
            }
        }
    }
    aspects
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn kind_order_fixed() {
        assert_eq!(ALL_ASPECT_KINDS[0], AspectKind::Conjunction);
        assert_eq!(ALL_ASPECT_KINDS[1], AspectKind::Opposition);
        assert_eq!(ALL_ASPECT_KINDS[2], AspectKind::Trine);
        assert_eq!(ALL_ASPECT_KINDS[3], AspectKind::Square);
        assert_eq!(ALL_ASPECT_KINDS[4], AspectKind::Sextile);
    }

    #[test]
    fn orb_table() {
        assert!((AspectKind::Conjunction.orb_deg() - 8.0).abs() < EPS);
        assert!((AspectKind::Opposition.orb_deg() - 8.0).abs() < EPS);
        assert!((AspectKind::Trine.orb_deg() - 8.0).abs() < EPS);
        assert!((AspectKind::Square.orb_deg() - 6.0).abs() < EPS);
        assert!((AspectKind::Sextile.orb_deg() - 4.0).abs() < EPS);
    }

    #[test]
    fn separation_folds_to_shorter_arc() {
        assert!((separation_deg(10.0, 350.0) - 20.0).abs() < EPS);
        assert!((separation_deg(0.0, 180.0) - 180.0).abs() < EPS);
        assert!((separation_deg(270.0, 90.0) - 180.0).abs() < EPS);
        assert!((separation_deg(45.0, 45.0)).abs() < EPS);
    }

    #[test]
    fn separation_symmetric() {
        for (a, b) in [(10.0, 350.0), (0.0, 119.0), (200.0, 10.0)] {
            assert!((separation_deg(a, b) - separation_deg(b, a)).abs() < EPS);
        }
    }

    #[test]
    fn exact_trine_sole_match() {
        let lons = [(Body::Sun, 10.0), (Body::Moon, 130.0)];
        let aspects = detect_aspects(&lons);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Trine);
        assert!(aspects[0].orb_deg.abs() < EPS);
    }

    #[test]
    fn trine_orb_one_degree() {
        // 119 deg apart: trine with orb 1
        let aspects = detect_aspects(&[(Body::Sun, 0.0), (Body::Moon, 119.0)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Trine);
        assert!((aspects[0].orb_deg - 1.0).abs() < EPS);
    }

    #[test]
    fn no_trine_beyond_orb() {
        // 111 deg apart: 9 deg from trine, outside the 8 deg orb
        let aspects = detect_aspects(&[(Body::Sun, 0.0), (Body::Moon, 111.0)]);
        assert!(
            !aspects.iter().any(|a| a.kind == AspectKind::Trine),
            "111 deg must not match trine: {aspects:?}"
        );
    }

    #[test]
    fn trine_inside_orb_on_both_sides() {
        // 114 and 126 deg are each 6 deg from exact, inside the 8 deg orb
        for lon in [114.0, 126.0] {
            let aspects = detect_aspects(&[(Body::Sun, 0.0), (Body::Moon, lon)]);
            assert_eq!(aspects.len(), 1, "separation {lon}");
            assert_eq!(aspects[0].kind, AspectKind::Trine);
            assert!((aspects[0].orb_deg - 6.0).abs() < EPS);
        }
    }

    #[test]
    fn boundary_separation_excluded() {
        // Exactly orb away from exact: strict < excludes it
        let aspects = detect_aspects(&[(Body::Sun, 0.0), (Body::Moon, 128.0)]);
        assert!(aspects.is_empty(), "128 = 120 + 8 must not match: {aspects:?}");
    }

    #[test]
    fn just_inside_boundary_included() {
        let aspects = detect_aspects(&[(Body::Sun, 0.0), (Body::Moon, 127.999)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Trine);
    }

    #[test]
    fn detection_symmetric_in_pair_order() {
        let fwd = detect_aspects(&[(Body::Sun, 40.0), (Body::Moon, 161.5)]);
        let rev = detect_aspects(&[(Body::Moon, 161.5), (Body::Sun, 40.0)]);
        assert_eq!(fwd.len(), rev.len());
        for (f, r) in fwd.iter().zip(rev.iter()) {
            assert_eq!(f.kind, r.kind);
            assert!((f.orb_deg - r.orb_deg).abs() < EPS);
        }
    }

    #[test]
    fn conjunction_across_wrap() {
        // 358 and 3: separation 5, conjunction with orb 5
        let aspects = detect_aspects(&[(Body::Venus, 358.0), (Body::Mars, 3.0)]);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].kind, AspectKind::Conjunction);
        assert!((aspects[0].orb_deg - 5.0).abs() < EPS);
    }

    #[test]
    fn all_pairs_visited_in_order() {
        // Three bodies, chained trines: (0,120), (120,240), (0,240 -> 120)
        let lons = [
            (Body::Sun, 0.0),
            (Body::Moon, 120.0),
            (Body::Mercury, 240.0),
        ];
        let aspects = detect_aspects(&lons);
        assert_eq!(aspects.len(), 3);
        assert_eq!((aspects[0].body_a, aspects[0].body_b), (Body::Sun, Body::Moon));
        assert_eq!(
            (aspects[1].body_a, aspects[1].body_b),
            (Body::Sun, Body::Mercury)
        );
        assert_eq!(
            (aspects[2].body_a, aspects[2].body_b),
            (Body::Moon, Body::Mercury)
        );
        assert!(aspects.iter().all(|a| a.kind == AspectKind::Trine));
    }

    #[test]
    fn orb_always_non_negative() {
        let aspects = detect_aspects(&[
            (Body::Sun, 13.0),
            (Body::Moon, 100.0),
            (Body::Mercury, 192.5),
            (Body::Venus, 255.0),
        ]);
        assert!(aspects.iter().all(|a| a.orb_deg >= 0.0));
    }
}
