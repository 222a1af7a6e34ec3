//! Dosage Gauge
//!
//! An MCP server for supplement combination intake gauges.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use dosegauge::build_info;
use dosegauge::mcp::GaugeService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log to stderr so stdout stays clean for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dosegauge=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let service = GaugeService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;
    tracing::info!("MCP server ready");

    server.waiting().await?;

    Ok(())
}
