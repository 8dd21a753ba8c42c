//! Forecast pipeline: growth rates, baseline, scenario, reconciliation, ratios

use super::baseline::project_baseline;
use super::growth::{GrowthRateTable, HistoryWindow};
use crate::error::Result;
use crate::history::{Financials, HistoricalSeries};
use crate::metrics::{BalanceInputs, BalanceSheet, RatioSet};
use crate::scenario::{apply_scenario, AdjustedFigures, ScenarioInputs};
use serde::Serialize;

/// Last historical year used for growth extraction
pub const DEFAULT_CUTOFF_YEAR: i32 = 2023;

/// Year the forecast is projected to
pub const DEFAULT_TARGET_YEAR: i32 = 2025;

/// Configuration for a forecast run
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastConfig {
    /// Inclusive cutoff year for the growth window
    pub cutoff_year: i32,

    /// Projection target year
    pub target_year: i32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            cutoff_year: DEFAULT_CUTOFF_YEAR,
            target_year: DEFAULT_TARGET_YEAR,
        }
    }
}

/// Reconciled figures and ratios for one side of the comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioOutcome {
    pub cogs: f64,
    pub balance: BalanceSheet,
    pub ratios: RatioSet,
}

impl ScenarioOutcome {
    /// Reconcile and compute ratios; the only path for both scenarios
    fn evaluate(baseline: &Financials, figures: &AdjustedFigures) -> Self {
        let balance = BalanceSheet::reconcile(&BalanceInputs::new(baseline, figures));
        Self {
            cogs: figures.cogs,
            ratios: RatioSet::from_balance(&balance),
            balance,
        }
    }
}

/// Complete result of one forecast run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub config: ForecastConfig,
    pub scenario: ScenarioInputs,
    pub growth: GrowthRateTable,

    /// Raw per-field baseline projection
    pub projection: Financials,

    pub base: ScenarioOutcome,
    pub adjusted: ScenarioOutcome,
}

/// Main forecast engine
pub struct ForecastEngine {
    config: ForecastConfig,
}

impl ForecastEngine {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForecastConfig {
        &self.config
    }

    /// Run the full pipeline. Pure: identical inputs give identical output.
    pub fn forecast(&self, history: &HistoricalSeries, scenario: &ScenarioInputs) -> Result<Forecast> {
        scenario.validate()?;

        let window = HistoryWindow::select(history, self.config.cutoff_year)?;
        let growth = GrowthRateTable::from_window(&window);
        let projection = project_baseline(window.end, self.config.target_year, &growth)?;

        let base = ScenarioOutcome::evaluate(&projection, &AdjustedFigures::unadjusted(&projection));
        let adjusted = ScenarioOutcome::evaluate(&projection, &apply_scenario(&projection, scenario));

        log::info!(
            "Forecast {} ({} / {} / budget {:.2}): revenue {:.2} -> {:.2}, inventory {:.2} -> {:.2}",
            self.config.target_year,
            scenario.demand_outlook,
            scenario.order_frequency,
            scenario.annual_budget,
            base.balance.revenue,
            adjusted.balance.revenue,
            base.balance.inventory,
            adjusted.balance.inventory
        );

        Ok(Forecast {
            config: self.config,
            scenario: *scenario,
            growth,
            projection,
            base,
            adjusted,
        })
    }
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(ForecastConfig::default())
    }
}
