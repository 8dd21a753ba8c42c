//! User-selectable scenario knobs

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default annual inventory budget offered by the input surface
pub const DEFAULT_ANNUAL_BUDGET: f64 = 100_000.0;

/// Demand scenario applied to revenue and COGS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum DemandOutlook {
    /// -10%
    Pessimistic,
    /// 0%
    Baseline,
    /// +10%
    Optimistic,
}

impl DemandOutlook {
    pub const ALL: [DemandOutlook; 3] = [
        DemandOutlook::Pessimistic,
        DemandOutlook::Baseline,
        DemandOutlook::Optimistic,
    ];

    /// Multiplier on baseline revenue and COGS
    pub fn factor(&self) -> f64 {
        match self {
            DemandOutlook::Pessimistic => 0.9,
            DemandOutlook::Baseline => 1.0,
            DemandOutlook::Optimistic => 1.1,
        }
    }

    /// Label shown by the dashboard
    pub fn label(&self) -> &'static str {
        match self {
            DemandOutlook::Pessimistic => "Pessimistic (-10%)",
            DemandOutlook::Baseline => "Baseline (0%)",
            DemandOutlook::Optimistic => "Optimistic (+10%)",
        }
    }
}

impl FromStr for DemandOutlook {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        DemandOutlook::ALL
            .into_iter()
            .find(|o| o.label() == key || format!("{:?}", o).eq_ignore_ascii_case(key))
            .ok_or_else(|| ForecastError::UnknownScenario {
                kind: "demand outlook",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for DemandOutlook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory ordering cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum OrderFrequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl OrderFrequency {
    pub const ALL: [OrderFrequency; 3] = [
        OrderFrequency::Weekly,
        OrderFrequency::BiWeekly,
        OrderFrequency::Monthly,
    ];

    /// Multiplier on the budget-capped inventory.
    /// Less frequent ordering carries more stock between deliveries.
    pub fn factor(&self) -> f64 {
        match self {
            OrderFrequency::Weekly => 0.9,
            OrderFrequency::BiWeekly => 1.0,
            OrderFrequency::Monthly => 1.1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderFrequency::Weekly => "Weekly",
            OrderFrequency::BiWeekly => "Bi-weekly",
            OrderFrequency::Monthly => "Monthly",
        }
    }
}

impl FromStr for OrderFrequency {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        OrderFrequency::ALL
            .into_iter()
            .find(|o| {
                o.label().eq_ignore_ascii_case(key) || format!("{:?}", o).eq_ignore_ascii_case(key)
            })
            .ok_or_else(|| ForecastError::UnknownScenario {
                kind: "order frequency",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for OrderFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One set of scenario choices, immutable for a single forecast.
///
/// Deserialization goes through [`ScenarioInputs::new`], so the budget check
/// also applies to serialized input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScenarioInputs")]
pub struct ScenarioInputs {
    pub order_frequency: OrderFrequency,
    pub annual_budget: f64,
    pub demand_outlook: DemandOutlook,
}

impl ScenarioInputs {
    /// Build inputs, rejecting a negative or non-finite budget
    pub fn new(
        order_frequency: OrderFrequency,
        annual_budget: f64,
        demand_outlook: DemandOutlook,
    ) -> Result<Self> {
        let inputs = Self {
            order_frequency,
            annual_budget,
            demand_outlook,
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Reject a negative or non-finite budget
    pub fn validate(&self) -> Result<()> {
        if !self.annual_budget.is_finite() || self.annual_budget < 0.0 {
            return Err(ForecastError::InvalidBudget(self.annual_budget));
        }
        Ok(())
    }

    /// Every outlook/frequency combination at a fixed budget
    pub fn grid(annual_budget: f64) -> Result<Vec<Self>> {
        let mut grid = Vec::with_capacity(9);
        for outlook in DemandOutlook::ALL {
            for frequency in OrderFrequency::ALL {
                grid.push(Self::new(frequency, annual_budget, outlook)?);
            }
        }
        Ok(grid)
    }
}

/// Unchecked wire form of [`ScenarioInputs`]
#[derive(Deserialize)]
struct RawScenarioInputs {
    order_frequency: OrderFrequency,
    annual_budget: f64,
    demand_outlook: DemandOutlook,
}

impl TryFrom<RawScenarioInputs> for ScenarioInputs {
    type Error = ForecastError;

    fn try_from(raw: RawScenarioInputs) -> Result<Self> {
        Self::new(raw.order_frequency, raw.annual_budget, raw.demand_outlook)
    }
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            order_frequency: OrderFrequency::Weekly,
            annual_budget: DEFAULT_ANNUAL_BUDGET,
            demand_outlook: DemandOutlook::Pessimistic,
        }
    }
}
