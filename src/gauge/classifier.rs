//! Over-limit classification
//!
//! Classification is read off the gauge position, not from a direct
//! `total > upper` comparison. A recommended-only nutrient therefore counts
//! as over the limit as soon as it passes its recommended amount.

use serde::{Deserialize, Serialize};

use super::mapper::{compute_fill_percent, Thresholds};
use super::scale::{REC_LINE, UPPER_LINE};
use crate::models::NutrientResult;

/// Whether a nutrient total exceeds its safe limit
pub fn is_over_limit(total: f64, recommended: Option<f64>, upper: Option<f64>) -> bool {
    compute_fill_percent(total, recommended, upper) > UPPER_LINE
}

/// Display zone of a gauge reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    /// No recommended amount or upper limit exists
    NoGuideline,
    /// Below the recommended anchor
    Below,
    /// Between the recommended and upper anchors (inclusive)
    Adequate,
    /// Past the upper anchor
    Exceeded,
}

impl IntakeStatus {
    /// Derive the zone from a fill percent
    pub fn from_fill_percent(fill_percent: f64, has_guideline: bool) -> Self {
        if !has_guideline {
            IntakeStatus::NoGuideline
        } else if fill_percent > UPPER_LINE {
            IntakeStatus::Exceeded
        } else if fill_percent >= REC_LINE {
            IntakeStatus::Adequate
        } else {
            IntakeStatus::Below
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IntakeStatus::NoGuideline => "no_guideline",
            IntakeStatus::Below => "below",
            IntakeStatus::Adequate => "adequate",
            IntakeStatus::Exceeded => "exceeded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IntakeStatus::NoGuideline => "기준 없음",
            IntakeStatus::Below => "부족",
            IntakeStatus::Adequate => "적정",
            IntakeStatus::Exceeded => "초과",
        }
    }
}

/// Gauge position and classification for one nutrient
///
/// Recomputed on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeReading {
    pub fill_percent: f64,
    pub is_over_limit: bool,
    pub status: IntakeStatus,
}

impl GaugeReading {
    /// Compute a reading from raw amounts
    pub fn compute(total: f64, recommended: Option<f64>, upper: Option<f64>) -> Self {
        let thresholds = Thresholds::from_amounts(recommended, upper);
        let fill_percent = thresholds.fill_percent(total);

        Self {
            fill_percent,
            is_over_limit: fill_percent > UPPER_LINE,
            status: IntakeStatus::from_fill_percent(fill_percent, thresholds.has_guideline()),
        }
    }

    /// Compute a reading for a nutrient result
    pub fn for_result(result: &NutrientResult) -> Self {
        Self::compute(
            result.total_amount,
            result.recommended_amount,
            result.upper_amount,
        )
    }
}
