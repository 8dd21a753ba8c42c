//! Balance reconciliation, financial ratios and report tables

mod balance;
mod ratios;
pub mod report;

pub use balance::{BalanceInputs, BalanceSheet};
pub use ratios::{Ratio, RatioChange, RatioSet};
pub use report::{ForecastReport, MetricRow, RatioRow};
