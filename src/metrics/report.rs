//! Base vs adjusted output tables
//!
//! The engine keeps full precision; rounding to two decimals happens only
//! when rendering.

use super::ratios::{Ratio, RatioChange};
use crate::projection::{Forecast, ScenarioOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// Modelling assumptions shown alongside every forecast
pub const ASSUMPTIONS: [&str; 3] = [
    "Base forecast via CAGR through the cutoff year.",
    "Demand outlook: -10%/0%/+10%.",
    "Inventory budget cap and freq adj: Weekly=-10%, Bi-weekly=0%, Monthly=+10%.",
];

/// Rows of the metric table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    Revenue,
    Cogs,
    Inventory,
    CurrentAssets,
    CurrentLiabilities,
    WorkingCapital,
    QuickAssets,
    TotalAssets,
    NetIncome,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Revenue,
        Metric::Cogs,
        Metric::Inventory,
        Metric::CurrentAssets,
        Metric::CurrentLiabilities,
        Metric::WorkingCapital,
        Metric::QuickAssets,
        Metric::TotalAssets,
        Metric::NetIncome,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue",
            Metric::Cogs => "COGS",
            Metric::Inventory => "Inventory",
            Metric::CurrentAssets => "Current Assets",
            Metric::CurrentLiabilities => "Current Liabilities",
            Metric::WorkingCapital => "Working Capital",
            Metric::QuickAssets => "Quick Assets",
            Metric::TotalAssets => "Total Assets",
            Metric::NetIncome => "Net Income",
        }
    }

    fn value(&self, outcome: &ScenarioOutcome) -> f64 {
        let b = &outcome.balance;
        match self {
            Metric::Revenue => b.revenue,
            Metric::Cogs => outcome.cogs,
            Metric::Inventory => b.inventory,
            Metric::CurrentAssets => b.current_assets,
            Metric::CurrentLiabilities => b.current_liabilities,
            Metric::WorkingCapital => b.working_capital,
            Metric::QuickAssets => b.quick_assets,
            Metric::TotalAssets => b.total_assets,
            Metric::NetIncome => b.net_income,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricRow {
    pub metric: &'static str,
    pub base: f64,
    pub adjusted: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RatioRow {
    pub ratio: &'static str,
    pub base: Option<f64>,
    pub adjusted: Option<f64>,
    pub change: RatioChange,
}

/// Presentation-ready forecast report
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub generated_at: DateTime<Utc>,
    pub target_year: i32,
    pub order_frequency: &'static str,
    pub demand_outlook: &'static str,
    pub annual_budget: f64,
    pub metrics: Vec<MetricRow>,
    pub ratios: Vec<RatioRow>,
    pub assumptions: Vec<&'static str>,
}

impl ForecastReport {
    pub fn new(forecast: &Forecast) -> Self {
        Self {
            generated_at: Utc::now(),
            target_year: forecast.config.target_year,
            order_frequency: forecast.scenario.order_frequency.label(),
            demand_outlook: forecast.scenario.demand_outlook.label(),
            annual_budget: forecast.scenario.annual_budget,
            metrics: metric_table(forecast),
            ratios: ratio_table(forecast),
            assumptions: ASSUMPTIONS.to_vec(),
        }
    }

    /// Render both tables plus the assumption notes as plain text
    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{} Forecast: Base vs Adjusted", self.target_year);
        let _ = writeln!(
            out,
            "Scenario: {} ordering, {} demand, budget {:.2}\n",
            self.order_frequency, self.demand_outlook, self.annual_budget
        );

        let _ = writeln!(out, "{:<24} {:>16} {:>16}", "Metric", "Base", "Adjusted");
        let _ = writeln!(out, "{}", "-".repeat(58));
        for row in &self.metrics {
            let _ = writeln!(out, "{:<24} {:>16.2} {:>16.2}", row.metric, row.base, row.adjusted);
        }

        let _ = writeln!(out, "\nKey Financial Ratios");
        let _ = writeln!(out, "{:<24} {:>16} {:>16}", "Ratio", "Base", "Adjusted");
        let _ = writeln!(out, "{}", "-".repeat(58));
        for row in &self.ratios {
            let _ = writeln!(
                out,
                "{:<24} {:>16} {:>16}",
                row.ratio,
                format_ratio(row.base),
                format_ratio(row.adjusted)
            );
        }

        let _ = writeln!(out, "\nAssumptions & Explanations");
        for item in &self.assumptions {
            let _ = writeln!(out, "- {}", item);
        }
        let _ = writeln!(out, "\nWhat do changes in ratios mean?");
        for ratio in Ratio::ALL {
            let _ = writeln!(out, "- {}: {}.", ratio.label(), ratio.interpretation());
        }

        out
    }
}

pub fn metric_table(forecast: &Forecast) -> Vec<MetricRow> {
    Metric::ALL
        .iter()
        .map(|m| MetricRow {
            metric: m.label(),
            base: m.value(&forecast.base),
            adjusted: m.value(&forecast.adjusted),
        })
        .collect()
}

pub fn ratio_table(forecast: &Forecast) -> Vec<RatioRow> {
    Ratio::ALL
        .iter()
        .map(|r| {
            let base = forecast.base.ratios.get(*r);
            let adjusted = forecast.adjusted.ratios.get(*r);
            RatioRow {
                ratio: r.label(),
                base,
                adjusted,
                change: RatioChange::between(base, adjusted),
            }
        })
        .collect()
}

/// Two decimals, or "N/A" for an undefined ratio
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::{Financials, HistoricalRecord, HistoricalSeries};
    use crate::projection::ForecastEngine;
    use crate::scenario::{DemandOutlook, OrderFrequency, ScenarioInputs};

    fn forecast(revenue: f64) -> Forecast {
        let year = |y: i32, scale: f64| {
            HistoricalRecord::new(
                y,
                Financials {
                    revenue: revenue * scale,
                    cogs: 600.0 * scale,
                    current_assets: 500.0 * scale,
                    current_liabilities: 250.0 * scale,
                    inventory: 150.0 * scale,
                    cash: 200.0 * scale,
                    accounts_receivable: 150.0 * scale,
                    net_income: 80.0 * scale,
                    total_assets: 2000.0 * scale,
                },
            )
        };
        let history = HistoricalSeries::new(vec![year(2021, 1.0), year(2023, 1.21)]);
        let scenario = ScenarioInputs::new(OrderFrequency::Monthly, 100.0, DemandOutlook::Optimistic).unwrap();
        ForecastEngine::default().forecast(&history, &scenario).unwrap()
    }

    #[test]
    fn test_tables_have_fixed_rows() {
        let f = forecast(1000.0);
        let metrics = metric_table(&f);
        let ratios = ratio_table(&f);

        let labels: Vec<_> = metrics.iter().map(|r| r.metric).collect();
        assert_eq!(
            labels,
            vec![
                "Revenue", "COGS", "Inventory", "Current Assets", "Current Liabilities",
                "Working Capital", "Quick Assets", "Total Assets", "Net Income"
            ]
        );
        assert_eq!(ratios.len(), 4);
        assert_eq!(metrics[2].adjusted, f.adjusted.balance.inventory);
    }

    #[test]
    fn test_undefined_margin_renders_na() {
        let report = ForecastReport::new(&forecast(0.0));
        let margin = report.ratios.iter().find(|r| r.ratio == "Net Profit Margin").unwrap();

        assert_eq!(margin.base, None);
        assert_eq!(margin.change, RatioChange::Undefined);

        let text = report.render();
        assert!(text.contains("N/A"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_undefined_serializes_as_null() {
        let report = ForecastReport::new(&forecast(0.0));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["ratios"][3]["base"].is_null());
        assert!(json["ratios"][0]["base"].is_number());
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(Some(1.23456)), "1.23");
        assert_eq!(format_ratio(None), "N/A");
    }
}
