//! Scenario adjustment of the baseline projection
//!
//! Order is fixed: demand outlook, then budget cap, then order-frequency
//! multiplier. Capping after scaling gives a different inventory.

use super::inputs::ScenarioInputs;
use crate::history::Financials;
use serde::Serialize;

/// Figures moved by the scenario knobs; everything else stays at baseline
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustedFigures {
    pub revenue: f64,
    pub cogs: f64,
    pub inventory: f64,
    pub net_income: f64,
}

impl AdjustedFigures {
    /// The degenerate adjustment: baseline values unchanged
    pub fn unadjusted(baseline: &Financials) -> Self {
        Self {
            revenue: baseline.revenue,
            cogs: baseline.cogs,
            inventory: baseline.inventory,
            net_income: baseline.net_income,
        }
    }
}

/// Apply the scenario to a baseline projection
pub fn apply_scenario(baseline: &Financials, scenario: &ScenarioInputs) -> AdjustedFigures {
    // 1. Demand outlook scales revenue and COGS only
    let outlook = scenario.demand_outlook.factor();
    let revenue = baseline.revenue * outlook;
    let cogs = baseline.cogs * outlook;

    // 2. Budget cap, 3. frequency multiplier on the capped amount
    let capped = baseline.inventory.min(scenario.annual_budget);
    let inventory = capped * scenario.order_frequency.factor();

    // Margin held proportional to the revenue movement
    let revenue_ratio = if baseline.revenue != 0.0 {
        revenue / baseline.revenue
    } else {
        log::warn!("Baseline revenue is zero, scaling net income by outlook factor {}", outlook);
        outlook
    };
    let net_income = baseline.net_income * revenue_ratio;

    AdjustedFigures {
        revenue,
        cogs,
        inventory,
        net_income,
    }
}
