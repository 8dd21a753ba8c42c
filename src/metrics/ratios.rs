//! Liquidity and profitability ratios
//!
//! A ratio with a zero denominator is `None`, never 0.0 or NaN.

use super::balance::BalanceSheet;
use serde::Serialize;

/// The four reported ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ratio {
    CurrentRatio,
    QuickRatio,
    WorkingCapitalRatio,
    NetProfitMargin,
}

impl Ratio {
    pub const ALL: [Ratio; 4] = [
        Ratio::CurrentRatio,
        Ratio::QuickRatio,
        Ratio::WorkingCapitalRatio,
        Ratio::NetProfitMargin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Ratio::CurrentRatio => "Current Ratio",
            Ratio::QuickRatio => "Quick Ratio",
            Ratio::WorkingCapitalRatio => "Working Capital Ratio",
            Ratio::NetProfitMargin => "Net Profit Margin",
        }
    }

    /// What a move in this ratio means for the business
    pub fn interpretation(&self) -> &'static str {
        match self {
            Ratio::CurrentRatio => "higher ⇒ more liquidity; lower ⇒ potential strain",
            Ratio::QuickRatio => {
                "higher ⇒ meet immediate obligations; lower ⇒ risk if inventory illiquid"
            }
            Ratio::WorkingCapitalRatio => "higher ⇒ buffer; lower ⇒ tight operations",
            Ratio::NetProfitMargin => "higher ⇒ efficiency; lower ⇒ margin pressure",
        }
    }
}

/// Ratio values for one scenario; `None` marks an undefined ratio
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioSet {
    pub current_ratio: Option<f64>,
    pub quick_ratio: Option<f64>,
    pub working_capital_ratio: Option<f64>,
    pub net_profit_margin: Option<f64>,
}

impl RatioSet {
    /// Compute all four ratios from raw balance figures
    pub fn compute(
        current_assets: f64,
        current_liabilities: f64,
        inventory: f64,
        net_income: f64,
        revenue: f64,
        total_assets: f64,
    ) -> Self {
        Self {
            current_ratio: safe_div(current_assets, current_liabilities),
            quick_ratio: safe_div(current_assets - inventory, current_liabilities),
            working_capital_ratio: safe_div(current_assets - current_liabilities, total_assets),
            net_profit_margin: safe_div(net_income, revenue),
        }
    }

    pub fn from_balance(sheet: &BalanceSheet) -> Self {
        Self::compute(
            sheet.current_assets,
            sheet.current_liabilities,
            sheet.inventory,
            sheet.net_income,
            sheet.revenue,
            sheet.total_assets,
        )
    }

    pub fn get(&self, ratio: Ratio) -> Option<f64> {
        match ratio {
            Ratio::CurrentRatio => self.current_ratio,
            Ratio::QuickRatio => self.quick_ratio,
            Ratio::WorkingCapitalRatio => self.working_capital_ratio,
            Ratio::NetProfitMargin => self.net_profit_margin,
        }
    }
}

fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator != 0.0 {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Direction of a ratio from base to adjusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatioChange {
    Higher,
    Lower,
    Unchanged,
    /// Either side is undefined
    Undefined,
}

impl RatioChange {
    pub fn between(base: Option<f64>, adjusted: Option<f64>) -> Self {
        const TOLERANCE: f64 = 1e-12;
        match (base, adjusted) {
            (Some(b), Some(a)) if (a - b).abs() <= TOLERANCE => RatioChange::Unchanged,
            (Some(b), Some(a)) if a > b => RatioChange::Higher,
            (Some(_), Some(_)) => RatioChange::Lower,
            _ => RatioChange::Undefined,
        }
    }
}
