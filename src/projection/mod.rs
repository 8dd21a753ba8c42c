//! Growth extraction, baseline projection and the forecast pipeline

mod baseline;
mod engine;
mod growth;

pub use baseline::project_baseline;
pub use engine::{
    Forecast, ForecastConfig, ForecastEngine, ScenarioOutcome, DEFAULT_CUTOFF_YEAR,
    DEFAULT_TARGET_YEAR,
};
pub use growth::{cagr, GrowthRateTable, HistoryWindow};
