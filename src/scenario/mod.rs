//! Scenario inputs, adjustment and batch running

mod adjust;
mod inputs;
mod runner;

pub use adjust::{apply_scenario, AdjustedFigures};
pub use inputs::{DemandOutlook, OrderFrequency, ScenarioInputs, DEFAULT_ANNUAL_BUDGET};
pub use runner::ScenarioRunner;
