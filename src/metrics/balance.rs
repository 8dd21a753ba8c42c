//! Balance-sheet reconciliation shared by the baseline and adjusted scenarios

use crate::history::Financials;
use crate::scenario::AdjustedFigures;
use serde::Serialize;

/// Inputs to the reconciliation.
///
/// Cash, receivables, liabilities and total assets always come from the
/// baseline projection; no scenario lever moves them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceInputs {
    pub revenue: f64,
    pub inventory: f64,
    pub net_income: f64,
    pub cash: f64,
    pub accounts_receivable: f64,
    pub current_liabilities: f64,
    pub total_assets: f64,
}

impl BalanceInputs {
    /// Combine scenario-moved figures with the held-fixed baseline items
    pub fn new(baseline: &Financials, figures: &AdjustedFigures) -> Self {
        Self {
            revenue: figures.revenue,
            inventory: figures.inventory,
            net_income: figures.net_income,
            cash: baseline.cash,
            accounts_receivable: baseline.accounts_receivable,
            current_liabilities: baseline.current_liabilities,
            total_assets: baseline.total_assets,
        }
    }
}

/// Reconciled aggregate figures for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceSheet {
    pub revenue: f64,
    pub inventory: f64,
    pub net_income: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub working_capital: f64,
    pub quick_assets: f64,
    pub total_assets: f64,
}

impl BalanceSheet {
    pub fn reconcile(inputs: &BalanceInputs) -> Self {
        let current_assets = inputs.cash + inputs.accounts_receivable + inputs.inventory;

        Self {
            revenue: inputs.revenue,
            inventory: inputs.inventory,
            net_income: inputs.net_income,
            current_assets,
            current_liabilities: inputs.current_liabilities,
            working_capital: current_assets - inputs.current_liabilities,
            quick_assets: current_assets - inputs.inventory,
            total_assets: inputs.total_assets,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn baseline() -> Financials {
        Financials {
            revenue: 1_000.0,
            cogs: 600.0,
            current_assets: 999.0,
            current_liabilities: 300.0,
            inventory: 150.0,
            cash: 200.0,
            accounts_receivable: 100.0,
            net_income: 80.0,
            total_assets: 2_000.0,
        }
    }

    #[test]
    fn test_reconcile_baseline() {
        let base = baseline();
        let sheet = BalanceSheet::reconcile(&BalanceInputs::new(&base, &AdjustedFigures::unadjusted(&base)));

        assert_relative_eq!(sheet.current_assets, 450.0);
        assert_relative_eq!(sheet.working_capital, 150.0);
        assert_relative_eq!(sheet.quick_assets, 300.0);
        assert_eq!(sheet.current_liabilities, 300.0);
        assert_eq!(sheet.total_assets, 2_000.0);
    }

    #[test]
    fn test_adjusted_holds_cash_and_liabilities_fixed() {
        let base = baseline();
        let figures = AdjustedFigures {
            revenue: 1_100.0,
            cogs: 660.0,
            inventory: 110.0,
            net_income: 88.0,
        };
        let sheet = BalanceSheet::reconcile(&BalanceInputs::new(&base, &figures));

        assert_relative_eq!(sheet.current_assets, 410.0);
        // Quick assets do not depend on inventory
        assert_relative_eq!(sheet.quick_assets, 300.0);
        assert_relative_eq!(sheet.working_capital, 110.0);
        assert_eq!(sheet.revenue, 1_100.0);
        assert_eq!(sheet.net_income, 88.0);
    }
}
