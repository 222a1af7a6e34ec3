//! Combination analysis response
//!
//! Envelope returned by the combination analysis service, plus a diagnostics
//! pass that reports malformed upstream data without rejecting it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::NutrientResult;

/// Errors loading an analysis response
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to read analysis file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid analysis JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for analysis loading
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// A combination analysis response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub results: Vec<NutrientResult>,
    /// Names of the products that were combined
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub analyzed_at: Option<String>,
}

/// Accepts either the full envelope or a bare list of results
#[derive(Deserialize)]
#[serde(untagged)]
enum AnalysisPayload {
    Envelope(AnalysisResponse),
    Bare(Vec<NutrientResult>),
}

impl AnalysisResponse {
    pub fn new(results: Vec<NutrientResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    /// Parse a response from JSON text
    pub fn from_json(json: &str) -> AnalysisResult<Self> {
        let payload: AnalysisPayload = serde_json::from_str(json)?;
        Ok(match payload {
            AnalysisPayload::Envelope(response) => response,
            AnalysisPayload::Bare(results) => Self::new(results),
        })
    }

    /// Load a response from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> AnalysisResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Report malformed upstream data. Never removes results.
    pub fn diagnose(&self) -> Vec<DataIssue> {
        diagnose_results(&self.results)
    }
}

/// A problem with upstream data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataIssue {
    DuplicateName { name: String },
    NegativeAmount { name: String, field: &'static str, value: f64 },
    NonFiniteAmount { name: String, field: &'static str },
    RecommendedAboveUpper { name: String, recommended: f64, upper: f64 },
}

impl DataIssue {
    pub fn message(&self) -> String {
        match self {
            DataIssue::DuplicateName { name } => {
                format!("Nutrient '{}' appears more than once", name)
            }
            DataIssue::NegativeAmount { name, field, value } => {
                format!("Nutrient '{}' has negative {} ({})", name, field, value)
            }
            DataIssue::NonFiniteAmount { name, field } => {
                format!("Nutrient '{}' has a non-finite {}", name, field)
            }
            DataIssue::RecommendedAboveUpper { name, recommended, upper } => format!(
                "Nutrient '{}' has recommended amount {} above upper limit {}",
                name, recommended, upper
            ),
        }
    }
}

/// Check a list of results for malformed values
pub fn diagnose_results(results: &[NutrientResult]) -> Vec<DataIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for result in results {
        if !seen.insert(result.name.as_str()) {
            issues.push(DataIssue::DuplicateName {
                name: result.name.clone(),
            });
        }

        let fields = [
            ("totalAmount", Some(result.total_amount)),
            ("recommendedAmount", result.recommended_amount),
            ("upperAmount", result.upper_amount),
        ];
        for (field, value) in fields {
            match value {
                Some(v) if !v.is_finite() => issues.push(DataIssue::NonFiniteAmount {
                    name: result.name.clone(),
                    field,
                }),
                Some(v) if v < 0.0 => issues.push(DataIssue::NegativeAmount {
                    name: result.name.clone(),
                    field,
                    value: v,
                }),
                _ => {}
            }
        }

        if let (Some(recommended), Some(upper)) = (result.recommended_amount, result.upper_amount) {
            if recommended > upper {
                issues.push(DataIssue::RecommendedAboveUpper {
                    name: result.name.clone(),
                    recommended,
                    upper,
                });
            }
        }
    }

    issues
}
