//! Fill percent mapping
//!
//! Maps an aggregated intake total onto the fixed-anchor gauge scale. Which
//! formula applies depends on which thresholds the nutrient has.

use serde::Serialize;

use super::scale::{
    clamp_percent, lerp, normalize_threshold, sanitize_amount, CAP_MULTIPLIER, EPSILON,
    NO_GUIDELINE_FACTOR, REC_LINE, SCALE_MAX, SCALE_MIN, UPPER_LINE,
};

/// Which guideline thresholds a nutrient carries
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "regime", rename_all = "snake_case")]
pub enum Thresholds {
    /// Recommended amount and upper limit are both known
    Both { recommended: f64, upper: f64 },
    /// Only the upper limit is known
    UpperOnly { upper: f64 },
    /// Only the recommended amount is known
    RecommendedOnly { recommended: f64 },
    /// No guideline exists for this nutrient
    None,
}

impl Thresholds {
    /// Build the regime from raw optional amounts.
    ///
    /// Zero, negative and non-finite thresholds count as absent.
    pub fn from_amounts(recommended: Option<f64>, upper: Option<f64>) -> Self {
        match (normalize_threshold(recommended), normalize_threshold(upper)) {
            (Some(recommended), Some(upper)) => Thresholds::Both { recommended, upper },
            (None, Some(upper)) => Thresholds::UpperOnly { upper },
            (Some(recommended), None) => Thresholds::RecommendedOnly { recommended },
            (None, None) => Thresholds::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Thresholds::Both { .. } => "both",
            Thresholds::UpperOnly { .. } => "upper_only",
            Thresholds::RecommendedOnly { .. } => "recommended_only",
            Thresholds::None => "none",
        }
    }

    /// Whether any guideline is known
    pub fn has_guideline(&self) -> bool {
        !matches!(self, Thresholds::None)
    }

    /// Map an intake total onto the gauge for this regime
    pub fn fill_percent(&self, total: f64) -> f64 {
        let total = sanitize_amount(total);

        let percent = match *self {
            Thresholds::Both { recommended, upper } => {
                if total <= recommended {
                    lerp(SCALE_MIN, REC_LINE, total, recommended)
                } else if total <= upper {
                    lerp(REC_LINE, UPPER_LINE, total - recommended, upper - recommended)
                } else {
                    over_map(total, upper, CAP_MULTIPLIER)
                }
            }
            Thresholds::UpperOnly { upper } => {
                if total <= upper {
                    lerp(SCALE_MIN, UPPER_LINE, total, upper)
                } else {
                    over_map(total, upper, CAP_MULTIPLIER)
                }
            }
            Thresholds::RecommendedOnly { recommended } => {
                if total <= recommended {
                    lerp(SCALE_MIN, REC_LINE, total, recommended)
                } else {
                    // No upper limit to ramp towards: any excess is full severity.
                    SCALE_MAX
                }
            }
            Thresholds::None => {
                if total > 0.0 {
                    REC_LINE * NO_GUIDELINE_FACTOR
                } else {
                    SCALE_MIN
                }
            }
        };

        clamp_percent(percent)
    }
}

/// Map intake beyond the upper limit into `[UPPER_LINE, 100]`.
///
/// The gauge saturates once `total` reaches `cap_multiplier * upper`.
pub fn over_map(total: f64, upper: f64, cap_multiplier: f64) -> f64 {
    let extra = (total - upper).max(0.0);
    if extra > 0.0 && total >= upper * cap_multiplier {
        return SCALE_MAX;
    }

    let max_extra = (upper * (cap_multiplier - 1.0)).max(EPSILON);
    let t = (extra / max_extra).min(1.0);
    clamp_percent(UPPER_LINE + t * (SCALE_MAX - UPPER_LINE))
}

/// Compute the gauge fill percent for a nutrient total.
///
/// Always returns a value in `[0, 100]`, for any input.
pub fn compute_fill_percent(total: f64, recommended: Option<f64>, upper: Option<f64>) -> f64 {
    Thresholds::from_amounts(recommended, upper).fill_percent(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn test_from_amounts_regimes() {
        assert_eq!(
            Thresholds::from_amounts(Some(60.0), Some(100.0)),
            Thresholds::Both { recommended: 60.0, upper: 100.0 }
        );
        assert_eq!(
            Thresholds::from_amounts(None, Some(100.0)),
            Thresholds::UpperOnly { upper: 100.0 }
        );
        assert_eq!(
            Thresholds::from_amounts(Some(60.0), None),
            Thresholds::RecommendedOnly { recommended: 60.0 }
        );
        assert_eq!(Thresholds::from_amounts(None, None), Thresholds::None);
    }

    #[test]
    fn test_zero_thresholds_are_absent() {
        assert_eq!(
            Thresholds::from_amounts(Some(0.0), Some(100.0)),
            Thresholds::UpperOnly { upper: 100.0 }
        );
        assert_eq!(
            Thresholds::from_amounts(Some(60.0), Some(0.0)),
            Thresholds::RecommendedOnly { recommended: 60.0 }
        );
        assert_eq!(Thresholds::from_amounts(Some(0.0), Some(0.0)), Thresholds::None);
    }

    #[test]
    fn test_both_below_recommended() {
        let p = compute_fill_percent(30.0, Some(60.0), Some(100.0));
        assert!(approx(p, REC_LINE / 2.0));
    }

    #[test]
    fn test_both_between_thresholds() {
        // Halfway between 60 and 100 lands halfway between the anchors
        let p = compute_fill_percent(80.0, Some(60.0), Some(100.0));
        assert!(approx(p, (REC_LINE + UPPER_LINE) / 2.0));
    }

    #[test]
    fn test_anchor_fidelity() {
        assert_eq!(compute_fill_percent(60.0, Some(60.0), Some(100.0)), REC_LINE);
        assert!(approx(compute_fill_percent(100.0, Some(60.0), Some(100.0)), UPPER_LINE));

        // Anchor spacing ignores the gap between thresholds
        assert_eq!(compute_fill_percent(1.0, Some(1.0), Some(5000.0)), REC_LINE);
        assert!(approx(compute_fill_percent(5000.0, Some(1.0), Some(5000.0)), UPPER_LINE));
    }

    #[test]
    fn test_saturation() {
        assert_eq!(compute_fill_percent(150.0, Some(60.0), Some(100.0)), 100.0);
        assert_eq!(compute_fill_percent(150.0, None, Some(100.0)), 100.0);
        assert_eq!(compute_fill_percent(0.45, Some(0.1), Some(0.3)), 100.0);
        assert_eq!(compute_fill_percent(10_000.0, Some(60.0), Some(100.0)), 100.0);
    }

    #[test]
    fn test_overflow_midpoint() {
        // 125 is halfway to the 150 cap
        let p = compute_fill_percent(125.0, Some(60.0), Some(100.0));
        assert!(approx(p, UPPER_LINE + 0.5 * (100.0 - UPPER_LINE)));
    }

    #[test]
    fn test_upper_only() {
        assert!(approx(compute_fill_percent(50.0, None, Some(100.0)), UPPER_LINE / 2.0));
        assert!(approx(compute_fill_percent(100.0, None, Some(100.0)), UPPER_LINE));
        assert!(compute_fill_percent(110.0, None, Some(100.0)) > UPPER_LINE);
    }

    #[test]
    fn test_recommended_only_snap() {
        assert_eq!(compute_fill_percent(60.0, Some(60.0), None), REC_LINE);
        assert_eq!(compute_fill_percent(60.0001, Some(60.0), None), 100.0);
        assert!(approx(compute_fill_percent(30.0, Some(60.0), None), REC_LINE / 2.0));
    }

    #[test]
    fn test_no_guideline_floor() {
        assert_eq!(compute_fill_percent(0.0, None, None), 0.0);
        assert!((compute_fill_percent(5.0, None, None) - 23.33).abs() < 0.01);
        assert_eq!(
            compute_fill_percent(5.0, None, None),
            compute_fill_percent(5000.0, None, None)
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compute_fill_percent(-10.0, Some(60.0), Some(100.0)), 0.0);
        assert_eq!(compute_fill_percent(f64::NAN, Some(60.0), Some(100.0)), 0.0);
        assert_eq!(compute_fill_percent(f64::INFINITY, None, Some(100.0)), 0.0);
        assert_eq!(compute_fill_percent(f64::NAN, None, None), 0.0);
        assert_eq!(compute_fill_percent(10.0, Some(f64::NAN), Some(f64::NAN)), REC_LINE * NO_GUIDELINE_FACTOR);
    }

    #[test]
    fn test_recommended_above_upper_does_not_panic() {
        for total in [0.0, 50.0, 100.0, 150.0, 200.0, 400.0] {
            let p = compute_fill_percent(total, Some(200.0), Some(100.0));
            assert!((0.0..=100.0).contains(&p));
        }
    }

    #[test]
    fn test_over_map_zero_upper() {
        assert_eq!(over_map(0.0, 0.0, CAP_MULTIPLIER), UPPER_LINE);
        assert_eq!(over_map(1.0, 0.0, CAP_MULTIPLIER), 100.0);
    }

    #[test]
    fn test_over_map_custom_cap() {
        // Cap at 2x: 150 is halfway
        let p = over_map(150.0, 100.0, 2.0);
        assert!(approx(p, UPPER_LINE + 0.5 * (100.0 - UPPER_LINE)));
        assert_eq!(over_map(200.0, 100.0, 2.0), 100.0);
    }

    fn optional_threshold() -> impl Strategy<Value = Option<f64>> {
        prop_oneof![Just(None), (0.0f64..1000.0).prop_map(Some)]
    }

    proptest! {
        #[test]
        fn prop_fill_percent_in_range(
            total in 0.0f64..1_000_000.0,
            recommended in optional_threshold(),
            upper in optional_threshold(),
        ) {
            let p = compute_fill_percent(total, recommended, upper);
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn prop_any_input_never_nan(
            total in any::<f64>(),
            recommended in proptest::option::of(any::<f64>()),
            upper in proptest::option::of(any::<f64>()),
        ) {
            let p = compute_fill_percent(total, recommended, upper);
            prop_assert!(!p.is_nan());
            prop_assert!((0.0..=100.0).contains(&p));
        }

        #[test]
        fn prop_monotonic_both(
            recommended in 0.01f64..1000.0,
            gap in 0.0f64..1000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let upper = recommended + gap;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compute_fill_percent(lo * 3.0 * upper, Some(recommended), Some(upper));
            let p_hi = compute_fill_percent(hi * 3.0 * upper, Some(recommended), Some(upper));
            prop_assert!(p_lo <= p_hi);
        }

        #[test]
        fn prop_monotonic_upper_only(
            upper in 0.01f64..1000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compute_fill_percent(lo * 3.0 * upper, None, Some(upper));
            let p_hi = compute_fill_percent(hi * 3.0 * upper, None, Some(upper));
            prop_assert!(p_lo <= p_hi);
        }

        #[test]
        fn prop_monotonic_recommended_only(
            recommended in 0.01f64..1000.0,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let p_lo = compute_fill_percent(lo * 3.0 * recommended, Some(recommended), None);
            let p_hi = compute_fill_percent(hi * 3.0 * recommended, Some(recommended), None);
            prop_assert!(p_lo <= p_hi);
        }

        #[test]
        fn prop_monotonic_no_guideline(a in 0.0f64..1000.0, b in 0.0f64..1000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(compute_fill_percent(lo, None, None) <= compute_fill_percent(hi, None, None));
        }

        #[test]
        fn prop_saturates_at_cap(
            upper in 0.001f64..100_000.0,
            recommended in proptest::option::of(0.0f64..1.0),
        ) {
            // Recommended stays strictly below upper in valid data
            let recommended = recommended.map(|r| r * upper);
            prop_assert_eq!(compute_fill_percent(upper * CAP_MULTIPLIER, recommended, Some(upper)), 100.0);
        }
    }
}
