//! Nutrient result model
//!
//! One row of aggregated intake for a single nutrient across the selected
//! product combination. Produced upstream by the combination analysis service.

use serde::{Deserialize, Serialize};

/// Aggregated intake for one nutrient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientResult {
    pub name: String,
    pub total_amount: f64,
    /// Display only; the gauge never reads it
    #[serde(default)]
    pub unit: String,
    pub recommended_amount: Option<f64>,
    pub upper_amount: Option<f64>,
}

impl NutrientResult {
    pub fn new(
        name: impl Into<String>,
        total_amount: f64,
        unit: impl Into<String>,
        recommended_amount: Option<f64>,
        upper_amount: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            total_amount,
            unit: unit.into(),
            recommended_amount,
            upper_amount,
        }
    }

    /// Format an amount with this result's unit
    pub fn format_amount(&self, amount: f64) -> String {
        if self.unit.is_empty() {
            format!("{}", amount)
        } else {
            format!("{} {}", amount, self.unit)
        }
    }
}
