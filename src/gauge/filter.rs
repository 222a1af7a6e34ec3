//! Result set filtering
//!
//! Splits an analysis response into the "all" and "over limit" views shown
//! by the combination analysis tabs.

use serde::{Deserialize, Serialize};

use super::classifier::is_over_limit;
use crate::models::NutrientResult;

/// Which tab of the analysis is being shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultView {
    #[default]
    All,
    OverLimit,
}

impl ResultView {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultView::All => "all",
            ResultView::OverLimit => "over_limit",
        }
    }

    /// Parse a tab name. Unknown names return None.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" | "전체" => Some(ResultView::All),
            "over" | "over_limit" | "exceeded" | "초과" => Some(ResultView::OverLimit),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ResultView::All => "전체",
            ResultView::OverLimit => "초과",
        }
    }
}

/// Both views of one analysis response, borrowed from the input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<'a> {
    /// Every result, in input order
    pub all: Vec<&'a NutrientResult>,
    /// Results classified as over limit, in input order
    pub over_limit: Vec<&'a NutrientResult>,
}

impl<'a> Partition<'a> {
    /// Results for the given tab
    pub fn view(&self, view: ResultView) -> &[&'a NutrientResult] {
        match view {
            ResultView::All => &self.all,
            ResultView::OverLimit => &self.over_limit,
        }
    }

    pub fn over_limit_count(&self) -> usize {
        self.over_limit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Partition results into the "all" and "over limit" views.
///
/// Both lists keep input order. Nothing is mutated.
pub fn partition(results: &[NutrientResult]) -> Partition<'_> {
    let all: Vec<&NutrientResult> = results.iter().collect();
    let over_limit = results
        .iter()
        .filter(|r| is_over_limit(r.total_amount, r.recommended_amount, r.upper_amount))
        .collect();

    Partition { all, over_limit }
}
