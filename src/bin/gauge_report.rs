//! Print gauge readings for a saved combination analysis
//! Usage: cargo run --bin gauge_report -- [path/to/analysis.json]

use std::path::PathBuf;

use dosegauge::gauge::{display_percent, partition, GaugeReading};
use dosegauge::models::{AnalysisResponse, NutrientResult};

fn get_analysis_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var("DOSEGAUGE_ANALYSIS_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| {
            let mut path = PathBuf::from("data");
            path.push("analysis.json");
            path
        })
}

fn threshold(result: &NutrientResult, amount: Option<f64>) -> String {
    amount
        .map(|a| result.format_amount(a))
        .unwrap_or_else(|| "-".to_string())
}

fn print_row(result: &NutrientResult) {
    let reading = GaugeReading::for_result(result);
    println!(
        "  {:<20} {:>14}  rec {:>12}  upper {:>12}  {:>6.2}%  {}",
        result.name,
        result.format_amount(result.total_amount),
        threshold(result, result.recommended_amount),
        threshold(result, result.upper_amount),
        display_percent(reading.fill_percent),
        reading.status.display_name()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = get_analysis_path();
    println!("Analysis: {}", path.display());

    let response = AnalysisResponse::from_path(&path)?;
    if !response.products.is_empty() {
        println!("Products: {}", response.products.join(", "));
    }

    for issue in response.diagnose() {
        eprintln!("warning: {}", issue.message());
    }

    let part = partition(&response.results);
    if part.is_empty() {
        println!("No nutrient results.");
        return Ok(());
    }

    println!("\n초과 ({})", part.over_limit_count());
    for result in &part.over_limit {
        print_row(result);
    }

    println!("\n전체 ({})", part.all.len());
    for result in &part.all {
        print_row(result);
    }

    Ok(())
}
