//! Two-point compound annual growth rates
//!
//! Only the earliest and latest records at or before the cutoff matter;
//! intermediate years are ignored.

use crate::error::{ForecastError, Result};
use crate::history::{Field, Financials, HistoricalRecord, HistoricalSeries};
use serde::Serialize;

/// The start and end records of the growth window
#[derive(Debug, Clone, Copy)]
pub struct HistoryWindow<'a> {
    pub start: &'a HistoricalRecord,
    pub end: &'a HistoricalRecord,
}

impl<'a> HistoryWindow<'a> {
    /// Select the earliest and latest records with `year <= cutoff_year`.
    ///
    /// When a year appears more than once the first occurrence is the start
    /// and the last occurrence is the end.
    pub fn select(series: &'a HistoricalSeries, cutoff_year: i32) -> Result<Self> {
        let start = series.up_to(cutoff_year).min_by_key(|r| r.year);
        let end = series.up_to(cutoff_year).max_by_key(|r| r.year);

        match (start, end) {
            (Some(start), Some(end)) if end.year > start.year => Ok(Self { start, end }),
            (Some(_), Some(_)) => Err(ForecastError::InsufficientHistory {
                cutoff_year,
                distinct_years: 1,
            }),
            _ => Err(ForecastError::InsufficientHistory {
                cutoff_year,
                distinct_years: 0,
            }),
        }
    }

    /// Elapsed years between start and end (always positive)
    pub fn duration(&self) -> i32 {
        self.end.year - self.start.year
    }
}

/// Compound annual growth rate per field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRateTable {
    pub start_year: i32,
    pub end_year: i32,
    pub rates: Financials,
}

impl GrowthRateTable {
    /// Extract rates over the window ending at `cutoff_year`
    pub fn extract(series: &HistoricalSeries, cutoff_year: i32) -> Result<Self> {
        let window = HistoryWindow::select(series, cutoff_year)?;
        Ok(Self::from_window(&window))
    }

    /// Compute `(end / start)^(1 / years) - 1` for every field
    pub fn from_window(window: &HistoryWindow<'_>) -> Self {
        let years = window.duration();
        let rates = Financials::from_fn(|field| {
            let (start, end) = (window.start.value(field), window.end.value(field));
            if start <= 0.0 {
                log::warn!(
                    "{}: non-positive start value {}, growth rate set to 0",
                    field.column(),
                    start
                );
            } else if end < 0.0 {
                log::warn!(
                    "{}: sign change from {} to {}, growth rate set to 0",
                    field.column(),
                    start,
                    end
                );
            }
            cagr(start, end, years)
        });

        log::debug!(
            "Growth rates {}-{}: revenue={:.6} inventory={:.6} net_income={:.6}",
            window.start.year,
            window.end.year,
            rates.revenue,
            rates.inventory,
            rates.net_income
        );

        Self {
            start_year: window.start.year,
            end_year: window.end.year,
            rates,
        }
    }

    pub fn rate(&self, field: Field) -> f64 {
        self.rates.get(field)
    }
}

/// Compound annual growth rate between two endpoint values.
///
/// Returns 0.0 for a non-positive start value. A negative end over a positive
/// start has no real fractional root and is also treated as flat.
pub fn cagr(start: f64, end: f64, years: i32) -> f64 {
    if start <= 0.0 {
        return 0.0;
    }

    let ratio = end / start;
    if ratio < 0.0 {
        return 0.0;
    }

    ratio.powf(1.0 / years as f64) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(year: i32, revenue: f64) -> HistoricalRecord {
        HistoricalRecord::new(
            year,
            Financials::from_fn(|field| match field {
                Field::Revenue => revenue,
                Field::NetIncome => -5.0,
                Field::Cash => 0.0,
                _ => 100.0,
            }),
        )
    }

    #[test]
    fn test_cagr_reproduces_end_value() {
        for &(start, end, years) in &[(1000.0, 1331.0, 3), (50.0, 75.0, 2), (10.0, 4.0, 5), (1.0, 1.0, 1)] {
            let rate = cagr(start, end, years);
            assert_relative_eq!(start * (1.0 + rate).powi(years), end, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_ten_percent_cagr() {
        let series = HistoricalSeries::new(vec![record(2020, 1000.0), record(2023, 1331.0)]);
        let table = GrowthRateTable::extract(&series, 2023).unwrap();

        assert_eq!(table.start_year, 2020);
        assert_eq!(table.end_year, 2023);
        assert_relative_eq!(table.rate(Field::Revenue), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_non_positive_start_is_exactly_zero() {
        let series = HistoricalSeries::new(vec![record(2020, 0.0), record(2023, 1331.0)]);
        let table = GrowthRateTable::extract(&series, 2023).unwrap();

        assert_eq!(table.rate(Field::Revenue), 0.0);
        assert_eq!(table.rate(Field::NetIncome), 0.0);
        assert_eq!(table.rate(Field::Cash), 0.0);
        // Flat fields still get a defined rate
        assert_eq!(table.rate(Field::Inventory), 0.0);
    }

    #[test]
    fn test_sign_change_is_flat() {
        assert_eq!(cagr(100.0, -50.0, 2), 0.0);
        assert_eq!(cagr(0.0, 50.0, 2), 0.0);
        assert_eq!(cagr(-10.0, 50.0, 2), 0.0);
    }

    #[test]
    fn test_sign_change_field_is_flat_in_table() {
        let mut end = record(2023, 1331.0);
        end.financials.inventory = -20.0;
        let series = HistoricalSeries::new(vec![record(2020, 1000.0), end]);
        let table = GrowthRateTable::extract(&series, 2023).unwrap();

        assert_eq!(table.rate(Field::Inventory), 0.0);
        assert_relative_eq!(table.rate(Field::Revenue), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_years_after_cutoff_ignored() {
        let series = HistoricalSeries::new(vec![
            record(2024, 5000.0),
            record(2020, 1000.0),
            record(2021, 1200.0),
            record(2023, 1331.0),
        ]);
        let table = GrowthRateTable::extract(&series, 2023).unwrap();

        assert_eq!(table.end_year, 2023);
        assert_relative_eq!(table.rate(Field::Revenue), 0.10, epsilon = 1e-12);
    }

    #[test]
    fn test_single_year_is_fatal() {
        let series = HistoricalSeries::new(vec![record(2023, 1000.0), record(2025, 1200.0)]);
        let err = GrowthRateTable::extract(&series, 2023).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InsufficientHistory { cutoff_year: 2023, distinct_years: 1 }
        ));
    }

    #[test]
    fn test_duplicate_single_year_is_fatal() {
        let series = HistoricalSeries::new(vec![record(2022, 1000.0), record(2022, 1100.0)]);
        assert!(GrowthRateTable::extract(&series, 2023).is_err());
    }

    #[test]
    fn test_no_years_before_cutoff() {
        let series = HistoricalSeries::new(vec![record(2024, 1000.0)]);
        let err = GrowthRateTable::extract(&series, 2023).unwrap_err();
        assert!(matches!(err, ForecastError::InsufficientHistory { distinct_years: 0, .. }));
    }

    #[test]
    fn test_duplicate_end_year_takes_last() {
        let series = HistoricalSeries::new(vec![
            record(2020, 1000.0),
            record(2023, 900.0),
            record(2023, 1331.0),
        ]);
        let window = HistoryWindow::select(&series, 2023).unwrap();
        assert_eq!(window.end.value(Field::Revenue), 1331.0);
    }
}
