//! Inventory Forecast CLI
//!
//! Loads the historical financials, runs one scenario and prints the
//! base vs adjusted tables (or JSON with --json)

use anyhow::{Context, Result};
use clap::Parser;
use inventory_forecast::{
    history::{load_history, DEFAULT_DATA_PATH},
    projection::{DEFAULT_CUTOFF_YEAR, DEFAULT_TARGET_YEAR},
    scenario::DEFAULT_ANNUAL_BUDGET,
    DemandOutlook, ForecastConfig, ForecastEngine, ForecastReport, OrderFrequency, ScenarioInputs,
};

/// Interactive inventory and supply chain financial forecast
#[derive(Parser)]
#[command(name = "inventory-forecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Historical financials CSV
    #[arg(short, long, default_value = DEFAULT_DATA_PATH)]
    data: String,

    /// How often inventory is ordered
    #[arg(short = 'f', long, value_enum, default_value = "weekly")]
    order_frequency: OrderFrequency,

    /// Annual inventory budget
    #[arg(short, long, default_value_t = DEFAULT_ANNUAL_BUDGET)]
    budget: f64,

    /// Demand scenario
    #[arg(short, long, value_enum, default_value = "pessimistic")]
    outlook: DemandOutlook,

    /// Last historical year used for growth rates
    #[arg(long, default_value_t = DEFAULT_CUTOFF_YEAR)]
    cutoff_year: i32,

    /// Year to project to
    #[arg(long, default_value_t = DEFAULT_TARGET_YEAR)]
    target_year: i32,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let history = load_history(&cli.data)
        .with_context(|| format!("Failed to load data from {}", cli.data))?;

    let scenario = ScenarioInputs::new(cli.order_frequency, cli.budget, cli.outlook)?;
    let engine = ForecastEngine::new(ForecastConfig {
        cutoff_year: cli.cutoff_year,
        target_year: cli.target_year,
    });

    log::info!(
        "Projecting to {} from growth through {}",
        engine.config().target_year,
        engine.config().cutoff_year
    );

    let forecast = engine
        .forecast(&history, &scenario)
        .context("Forecast failed")?;
    let report = ForecastReport::new(&forecast);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}
