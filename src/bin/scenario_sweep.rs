//! Run every demand outlook / order frequency combination
//!
//! Writes one row per scenario to scenario_sweep_output.csv, or prints JSON with --json.
//! Accepts config via environment variables:
//!   FORECAST_DATA_PATH, ANNUAL_BUDGET, CUTOFF_YEAR, TARGET_YEAR

use anyhow::{Context, Result};
use inventory_forecast::{
    history::DEFAULT_DATA_PATH,
    metrics::report::format_ratio,
    projection::{DEFAULT_CUTOFF_YEAR, DEFAULT_TARGET_YEAR},
    scenario::DEFAULT_ANNUAL_BUDGET,
    ForecastConfig, ForecastReport, ScenarioRunner,
};
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<()> {
    env_logger::init();

    let json_output = env::args().any(|arg| arg == "--json");
    let start = Instant::now();

    let data_path: PathBuf = env_or("FORECAST_DATA_PATH", PathBuf::from(DEFAULT_DATA_PATH));
    let budget: f64 = env_or("ANNUAL_BUDGET", DEFAULT_ANNUAL_BUDGET);
    let config = ForecastConfig {
        cutoff_year: env_or("CUTOFF_YEAR", DEFAULT_CUTOFF_YEAR),
        target_year: env_or("TARGET_YEAR", DEFAULT_TARGET_YEAR),
    };

    let runner = ScenarioRunner::from_csv_path(&data_path, config)
        .with_context(|| format!("Failed to load data from {}", data_path.display()))?;
    log::info!(
        "Loaded {} yearly records from {}",
        runner.history().len(),
        data_path.display()
    );
    let forecasts = runner.sweep(budget).context("Scenario sweep failed")?;

    if json_output {
        let reports: Vec<ForecastReport> = forecasts.iter().map(ForecastReport::new).collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    let output_path = "scenario_sweep_output.csv";
    let mut file = File::create(output_path).context("Failed to create output file")?;

    writeln!(
        file,
        "Outlook,OrderFrequency,Budget,Revenue,COGS,Inventory,CurrentAssets,WorkingCapital,NetIncome,CurrentRatio,QuickRatio,WorkingCapitalRatio,NetProfitMargin"
    )?;

    for f in &forecasts {
        let b = &f.adjusted.balance;
        let r = &f.adjusted.ratios;
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{},{},{},{}",
            f.scenario.demand_outlook.label(),
            f.scenario.order_frequency.label(),
            f.scenario.annual_budget,
            b.revenue,
            f.adjusted.cogs,
            b.inventory,
            b.current_assets,
            b.working_capital,
            b.net_income,
            format_ratio(r.current_ratio),
            format_ratio(r.quick_ratio),
            format_ratio(r.working_capital_ratio),
            format_ratio(r.net_profit_margin),
        )?;
    }

    println!(
        "Ran {} scenarios over {} historical years in {:?}",
        forecasts.len(),
        runner.history().len(),
        start.elapsed()
    );
    println!("Output written to {}", output_path);

    Ok(())
}
