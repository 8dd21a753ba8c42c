//! Inventory Forecast - one-year-ahead financial and inventory forecast engine
//!
//! This library provides:
//! - Historical series loading and column validation
//! - Two-point compound growth extraction and baseline projection
//! - Demand outlook, inventory budget and order-frequency scenarios
//! - Balance-sheet reconciliation and liquidity/profitability ratios
//! - Batch scenario sweeps over a pre-loaded history

pub mod error;
pub mod history;
pub mod metrics;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ForecastError, Result};
pub use history::{Field, Financials, HistoricalRecord, HistoricalSeries};
pub use metrics::{BalanceSheet, ForecastReport, Ratio, RatioSet};
pub use projection::{Forecast, ForecastConfig, ForecastEngine, GrowthRateTable};
pub use scenario::{DemandOutlook, OrderFrequency, ScenarioInputs, ScenarioRunner};
