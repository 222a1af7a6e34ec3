//! Gauge MCP Tools
//!
//! Tools for reading single nutrient gauges and analyzing a product combination.

use serde::Serialize;

use crate::gauge::{
    display_percent, partition, GaugeReading, ResultView, Thresholds, REC_LINE, UPPER_LINE,
};
use crate::models::{diagnose_results, DataIssue, NutrientResult};

/// Anchor line positions, echoed so callers can draw the marks
#[derive(Debug, Serialize)]
pub struct AnchorLines {
    pub recommended_line: f64,
    pub upper_line: f64,
}

impl AnchorLines {
    fn current() -> Self {
        Self {
            recommended_line: REC_LINE,
            upper_line: UPPER_LINE,
        }
    }
}

/// Response for compute_fill_percent
#[derive(Debug, Serialize)]
pub struct FillPercentResponse {
    pub fill_percent: f64,
    pub fill_percent_display: f64,
    pub is_over_limit: bool,
    pub status: String,
    pub status_display: String,
    pub regime: &'static str,
    pub anchors: AnchorLines,
}

/// Response for check_over_limit
#[derive(Debug, Serialize)]
pub struct OverLimitResponse {
    pub is_over_limit: bool,
    pub fill_percent: f64,
}

/// One gauge row in an analysis
#[derive(Debug, Serialize)]
pub struct NutrientGauge {
    pub name: String,
    pub total_amount: f64,
    pub unit: String,
    pub recommended_amount: Option<f64>,
    pub upper_amount: Option<f64>,
    pub regime: &'static str,
    pub fill_percent: f64,
    pub is_over_limit: bool,
    pub status: String,
    pub status_display: String,
}

impl From<&NutrientResult> for NutrientGauge {
    fn from(result: &NutrientResult) -> Self {
        let reading = GaugeReading::for_result(result);
        let regime = Thresholds::from_amounts(result.recommended_amount, result.upper_amount);
        Self {
            name: result.name.clone(),
            total_amount: result.total_amount,
            unit: result.unit.clone(),
            recommended_amount: result.recommended_amount,
            upper_amount: result.upper_amount,
            regime: regime.as_str(),
            fill_percent: display_percent(reading.fill_percent),
            is_over_limit: reading.is_over_limit,
            status: reading.status.as_str().to_string(),
            status_display: reading.status.display_name().to_string(),
        }
    }
}

/// Upstream data problem, with a readable message
#[derive(Debug, Serialize)]
pub struct IssueSummary {
    #[serde(flatten)]
    pub issue: DataIssue,
    pub message: String,
}

impl From<DataIssue> for IssueSummary {
    fn from(issue: DataIssue) -> Self {
        let message = issue.message();
        Self { issue, message }
    }
}

/// Response for analyze_combination
#[derive(Debug, Serialize)]
pub struct AnalyzeCombinationResponse {
    pub view: String,
    pub view_display: String,
    pub total_count: usize,
    pub over_limit_count: usize,
    pub items: Vec<NutrientGauge>,
    pub issues: Vec<IssueSummary>,
    pub analyzed_at: String,
}

/// Compute the gauge reading for raw amounts
pub fn compute_fill_percent(
    total: f64,
    recommended: Option<f64>,
    upper: Option<f64>,
) -> FillPercentResponse {
    let reading = GaugeReading::compute(total, recommended, upper);
    let regime = Thresholds::from_amounts(recommended, upper);

    FillPercentResponse {
        fill_percent: reading.fill_percent,
        fill_percent_display: display_percent(reading.fill_percent),
        is_over_limit: reading.is_over_limit,
        status: reading.status.as_str().to_string(),
        status_display: reading.status.display_name().to_string(),
        regime: regime.as_str(),
        anchors: AnchorLines::current(),
    }
}

/// Classify raw amounts as over limit or not
pub fn check_over_limit(total: f64, recommended: Option<f64>, upper: Option<f64>) -> OverLimitResponse {
    let reading = GaugeReading::compute(total, recommended, upper);
    OverLimitResponse {
        is_over_limit: reading.is_over_limit,
        fill_percent: reading.fill_percent,
    }
}

/// Gauge every nutrient of a combination and return the requested tab
pub fn analyze_combination(
    results: &[NutrientResult],
    view: Option<&str>,
) -> Result<AnalyzeCombinationResponse, String> {
    let view = match view {
        Some(name) => ResultView::from_str(name).ok_or_else(|| {
            format!("Invalid view '{}'. Use 'all' or 'over_limit'.", name)
        })?,
        None => ResultView::default(),
    };

    let issues = diagnose_results(results);
    for issue in &issues {
        tracing::warn!("Malformed analysis data: {}", issue.message());
    }

    let part = partition(results);
    let items: Vec<NutrientGauge> = part
        .view(view)
        .iter()
        .map(|r| NutrientGauge::from(*r))
        .collect();

    tracing::info!(
        view = view.as_str(),
        total = part.all.len(),
        over_limit = part.over_limit_count(),
        "Analyzed nutrient combination"
    );

    Ok(AnalyzeCombinationResponse {
        view: view.as_str().to_string(),
        view_display: view.display_name().to_string(),
        total_count: part.all.len(),
        over_limit_count: part.over_limit_count(),
        items,
        issues: issues.into_iter().map(IssueSummary::from).collect(),
        analyzed_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}
