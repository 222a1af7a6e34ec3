//! Data models
//!
//! Serde structs for the combination analysis data the gauge consumes.

mod analysis;
mod nutrient_result;

pub use analysis::{
    diagnose_results, AnalysisError, AnalysisResponse, AnalysisResult, DataIssue,
};
pub use nutrient_result::NutrientResult;
