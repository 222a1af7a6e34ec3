//! Gauge scale constants and numeric helpers
//!
//! The gauge is a fixed 0-100 scale with two anchor lines. The anchors are
//! visual reference marks and do not move with the underlying thresholds.

// ============================================================================
// Scale Constants
// ============================================================================

/// Lower edge of the gauge
pub const SCALE_MIN: f64 = 0.0;
/// Upper edge of the gauge
pub const SCALE_MAX: f64 = 100.0;
/// Anchor line for the recommended amount
pub const REC_LINE: f64 = 33.33;
/// Anchor line for the safe upper limit
pub const UPPER_LINE: f64 = 66.67;
/// Overflow saturates once total reaches this multiple of the upper limit
pub const CAP_MULTIPLIER: f64 = 1.5;
/// Fraction of REC_LINE shown when a nutrient has no guideline at all
pub const NO_GUIDELINE_FACTOR: f64 = 0.7;
/// Floor for the overflow span so a zero upper limit never divides by zero
pub const EPSILON: f64 = 1e-9;
/// Decimal places used when a percent is shown to a person
pub const DISPLAY_DECIMALS: u32 = 2;

// ============================================================================
// Helpers
// ============================================================================

/// Clamp a percent onto the gauge. NaN collapses to the bottom of the scale.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return SCALE_MIN;
    }
    value.clamp(SCALE_MIN, SCALE_MAX)
}

/// Sanitize an intake total: negative and non-finite values read as zero.
pub fn sanitize_amount(value: f64) -> f64 {
    if !value.is_finite() {
        tracing::trace!(value, "non-finite intake total treated as 0");
        return 0.0;
    }
    value.max(0.0)
}

/// Normalize a threshold.
///
/// A missing, zero, negative or non-finite threshold cannot be divided by,
/// so it is reported as absent.
pub fn normalize_threshold(value: Option<f64>) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Some(v),
        Some(v) => {
            tracing::trace!(value = v, "unusable threshold treated as absent");
            None
        }
        None => None,
    }
}

/// Linear position of `value` inside `[0, span]`, mapped onto `[from, to]`.
pub(crate) fn lerp(from: f64, to: f64, value: f64, span: f64) -> f64 {
    from + (value / span) * (to - from)
}

/// Round a percent to display precision (half away from zero).
pub fn round_to_scale(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round a percent for display using [`DISPLAY_DECIMALS`].
pub fn display_percent(value: f64) -> f64 {
    round_to_scale(clamp_percent(value), DISPLAY_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_ordering() {
        assert!(SCALE_MIN < REC_LINE);
        assert!(REC_LINE < UPPER_LINE);
        assert!(UPPER_LINE < SCALE_MAX);
    }

    #[test]
    fn test_clamp_percent() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(f64::NAN), 0.0);
        assert_eq!(clamp_percent(f64::INFINITY), 100.0);
    }

    #[test]
    fn test_sanitize_amount() {
        assert_eq!(sanitize_amount(12.0), 12.0);
        assert_eq!(sanitize_amount(-3.0), 0.0);
        assert_eq!(sanitize_amount(f64::NAN), 0.0);
        assert_eq!(sanitize_amount(f64::INFINITY), 0.0);
        assert_eq!(sanitize_amount(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_normalize_threshold() {
        assert_eq!(normalize_threshold(Some(60.0)), Some(60.0));
        assert_eq!(normalize_threshold(Some(0.0)), None);
        assert_eq!(normalize_threshold(Some(-1.0)), None);
        assert_eq!(normalize_threshold(Some(f64::NAN)), None);
        assert_eq!(normalize_threshold(Some(f64::INFINITY)), None);
        assert_eq!(normalize_threshold(None), None);
    }

    #[test]
    fn test_round_to_scale() {
        assert_eq!(round_to_scale(23.330999999999996, 2), 23.33);
        assert_eq!(round_to_scale(66.666, 2), 66.67);
        assert_eq!(round_to_scale(12.5, 0), 13.0);
    }

    #[test]
    fn test_display_percent_clamps_first() {
        assert_eq!(display_percent(100.0000001), 100.0);
        assert_eq!(display_percent(-0.4), 0.0);
    }
}
