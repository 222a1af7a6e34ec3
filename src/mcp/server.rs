//! Dosage Gauge MCP Server Implementation
//!
//! Implements the MCP server with all gauge tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::NutrientResult;
use crate::tools::gauge;
use crate::tools::status::StatusTracker;

/// Dosage Gauge MCP Service
#[derive(Clone)]
pub struct GaugeService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<GaugeService>,
}

impl GaugeService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for GaugeService {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GaugeAmountsParams {
    /// Aggregated intake across the selected products
    pub total: f64,
    /// Daily recommended intake (omit or null if no guideline)
    pub recommended: Option<f64>,
    /// Daily safe upper limit (omit or null if no guideline)
    pub upper: Option<f64>,
}

/// Nutrient row as delivered by the combination analysis service
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NutrientResultParams {
    pub name: String,
    pub total_amount: f64,
    #[serde(default)]
    pub unit: String,
    pub recommended_amount: Option<f64>,
    pub upper_amount: Option<f64>,
}

impl From<NutrientResultParams> for NutrientResult {
    fn from(p: NutrientResultParams) -> Self {
        NutrientResult::new(
            p.name,
            p.total_amount,
            p.unit,
            p.recommended_amount,
            p.upper_amount,
        )
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeCombinationParams {
    /// Nutrient results from the combination analysis
    pub results: Vec<NutrientResultParams>,
    /// "all" (default) or "over_limit"
    pub view: Option<String>,
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl GaugeService {
    // --- Status ---

    #[tool(description = "Get the current status of the gauge service including build info and process information")]
    async fn gauge_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_json(&tracker.get_status())
    }

    #[tool(description = "Get instructions for reading nutrient gauges. Call this before analyzing a supplement combination for the first time.")]
    fn gauge_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::GAUGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(GAUGE_INSTRUCTIONS)]))
    }

    // --- Gauge ---

    #[tool(description = "Compute the 0-100 gauge fill percent for one nutrient total with optional recommended and upper thresholds")]
    fn compute_fill_percent(&self, Parameters(p): Parameters<GaugeAmountsParams>) -> Result<CallToolResult, McpError> {
        to_json(&gauge::compute_fill_percent(p.total, p.recommended, p.upper))
    }

    #[tool(description = "Check whether one nutrient total is over its safe limit")]
    fn check_over_limit(&self, Parameters(p): Parameters<GaugeAmountsParams>) -> Result<CallToolResult, McpError> {
        to_json(&gauge::check_over_limit(p.total, p.recommended, p.upper))
    }

    #[tool(description = "Gauge every nutrient of a combination analysis. Returns the 'all' or 'over_limit' view in original order, with counts and any malformed-data issues.")]
    fn analyze_combination(&self, Parameters(p): Parameters<AnalyzeCombinationParams>) -> Result<CallToolResult, McpError> {
        let results: Vec<NutrientResult> = p.results.into_iter().map(NutrientResult::from).collect();
        let result = gauge::analyze_combination(&results, p.view.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for GaugeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "dosegauge".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Dosage Gauge".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Dosage Gauge - nutrient intake gauges for supplement combinations. \
                 Call gauge_instructions first. \
                 Single nutrient: compute_fill_percent, check_over_limit. \
                 Whole combination: analyze_combination (view: all | over_limit). \
                 Service: gauge_status."
                    .into(),
            ),
        }
    }
}
