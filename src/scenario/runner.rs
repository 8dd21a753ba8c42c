//! Scenario runner for batch forecasts over one loaded history
//!
//! Loads the historical series once, then runs any number of scenarios
//! against it without re-reading the source.

use super::inputs::ScenarioInputs;
use crate::error::Result;
use crate::history::{load_history, HistoricalSeries};
use crate::projection::{Forecast, ForecastConfig, ForecastEngine};
use rayon::prelude::*;
use std::path::Path;

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv_path(Path::new("data/financials.csv"), ForecastConfig::default())?;
///
/// for forecast in runner.sweep(100_000.0)? {
///     println!("{}: {:?}", forecast.scenario.demand_outlook, forecast.adjusted.ratios);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    history: HistoricalSeries,
    config: ForecastConfig,
}

impl ScenarioRunner {
    pub fn new(history: HistoricalSeries, config: ForecastConfig) -> Self {
        Self { history, config }
    }

    /// Create runner by loading history from a CSV file
    pub fn from_csv_path(path: &Path, config: ForecastConfig) -> Result<Self> {
        Ok(Self::new(load_history(path)?, config))
    }

    pub fn history(&self) -> &HistoricalSeries {
        &self.history
    }

    /// Run a single forecast
    pub fn run(&self, scenario: &ScenarioInputs) -> Result<Forecast> {
        ForecastEngine::new(self.config).forecast(&self.history, scenario)
    }

    /// Run many scenarios in parallel, preserving input order
    pub fn run_scenarios(&self, scenarios: &[ScenarioInputs]) -> Result<Vec<Forecast>> {
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Every outlook/frequency combination at one budget
    pub fn sweep(&self, annual_budget: f64) -> Result<Vec<Forecast>> {
        self.run_scenarios(&ScenarioInputs::grid(annual_budget)?)
    }
}
