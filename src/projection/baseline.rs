//! Baseline compound extrapolation from the last historical year

use super::growth::GrowthRateTable;
use crate::error::{ForecastError, Result};
use crate::history::{Financials, HistoricalRecord};

/// Project every field of `end` forward to `target_year`:
/// `end[f] * (1 + rate[f])^(target_year - end.year)`
pub fn project_baseline(
    end: &HistoricalRecord,
    target_year: i32,
    rates: &GrowthRateTable,
) -> Result<Financials> {
    if target_year < end.year {
        return Err(ForecastError::BackwardProjection {
            end_year: end.year,
            target_year,
        });
    }

    let years_forward = target_year - end.year;
    let baseline = Financials::from_fn(|field| {
        end.value(field) * (1.0 + rates.rate(field)).powi(years_forward)
    });

    log::debug!(
        "Baseline {} ({} years forward): revenue={:.2} inventory={:.2}",
        target_year,
        years_forward,
        baseline.revenue,
        baseline.inventory
    );

    Ok(baseline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Field;
    use approx::assert_relative_eq;

    fn rates(rate: f64) -> GrowthRateTable {
        GrowthRateTable {
            start_year: 2020,
            end_year: 2023,
            rates: Financials::from_fn(|_| rate),
        }
    }

    fn end_record() -> HistoricalRecord {
        HistoricalRecord::new(2023, Financials::from_fn(|_| 1331.0))
    }

    #[test]
    fn test_two_years_at_ten_percent() {
        let baseline = project_baseline(&end_record(), 2025, &rates(0.10)).unwrap();
        assert_relative_eq!(baseline.revenue, 1610.51, epsilon = 1e-9);
        assert_relative_eq!(baseline.get(Field::TotalAssets), 1610.51, epsilon = 1e-9);
    }

    #[test]
    fn test_same_year_is_identity() {
        let baseline = project_baseline(&end_record(), 2023, &rates(0.25)).unwrap();
        assert_eq!(baseline, end_record().financials);
    }

    #[test]
    fn test_backward_projection_rejected() {
        let err = project_baseline(&end_record(), 2022, &rates(0.10)).unwrap_err();
        assert!(matches!(
            err,
            ForecastError::BackwardProjection { end_year: 2023, target_year: 2022 }
        ));
    }
}
