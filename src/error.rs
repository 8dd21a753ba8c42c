//! Error types for loading history and running forecasts

use thiserror::Error;

/// Errors raised while loading a historical series or running a forecast.
///
/// Locally recoverable conditions (non-positive growth base, zero ratio
/// denominators) never surface here; they are folded into the results.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// One or more required columns are absent from the source header.
    #[error("Missing columns in data: {missing:?}")]
    MissingColumns {
        /// Every required column that was not found
        missing: Vec<String>,
    },

    /// The source contained a header but no records.
    #[error("Historical series is empty")]
    EmptySeries,

    /// A historical value is negative, NaN or infinite.
    #[error("Invalid value {value} for {column} in {year}: expected a finite non-negative number")]
    InvalidValue {
        /// Fiscal year of the offending row
        year: i32,
        /// Source column name
        column: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Fewer than two distinct years at or before the cutoff.
    #[error("Need at least two distinct years at or before {cutoff_year}, found {distinct_years}")]
    InsufficientHistory {
        /// Inclusive cutoff year used for the growth window
        cutoff_year: i32,
        /// Distinct years found within the window
        distinct_years: usize,
    },

    /// Target year precedes the last historical year.
    #[error("Cannot project backward from {end_year} to {target_year}")]
    BackwardProjection {
        /// Last historical year in the growth window
        end_year: i32,
        /// Requested projection year
        target_year: i32,
    },

    /// Annual inventory budget is negative or not a finite number.
    #[error("Invalid annual budget: {0}")]
    InvalidBudget(f64),

    /// A scenario label did not match any known variant.
    #[error("Unknown {kind}: {value}")]
    UnknownScenario {
        /// Which scenario knob was being parsed
        kind: &'static str,
        /// The rejected label
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_lists_every_column() {
        let err = ForecastError::MissingColumns {
            missing: vec!["Cash".to_string(), "Net Income".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Cash"));
        assert!(msg.contains("Net Income"));
    }

    #[test]
    fn test_insufficient_history_message() {
        let err = ForecastError::InsufficientHistory {
            cutoff_year: 2023,
            distinct_years: 1,
        };
        assert!(err.to_string().contains("2023"));
    }
}
