//! Load the historical series from a CSV export of the financial workbook

use super::{Field, Financials, HistoricalRecord, HistoricalSeries};
use crate::error::{ForecastError, Result};
use csv::Reader;
use std::path::Path;

/// Default location of the historical financials export
pub const DEFAULT_DATA_PATH: &str = "data/financials.csv";

/// Column holding the fiscal year
pub const YEAR_COLUMN: &str = "Year";

/// Raw CSV row matching the financial export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Revenue")]
    revenue: f64,
    #[serde(rename = "COGS")]
    cogs: f64,
    #[serde(rename = "Current Assets")]
    current_assets: f64,
    #[serde(rename = "Current Liabilities")]
    current_liabilities: f64,
    #[serde(rename = "Inventory")]
    inventory: f64,
    #[serde(rename = "Cash")]
    cash: f64,
    #[serde(rename = "Accounts Receivable")]
    accounts_receivable: f64,
    #[serde(rename = "Net Income")]
    net_income: f64,
    #[serde(rename = "Total Assets")]
    total_assets: f64,
}

impl CsvRow {
    fn to_record(self) -> Result<HistoricalRecord> {
        let financials = Financials {
            revenue: self.revenue,
            cogs: self.cogs,
            current_assets: self.current_assets,
            current_liabilities: self.current_liabilities,
            inventory: self.inventory,
            cash: self.cash,
            accounts_receivable: self.accounts_receivable,
            net_income: self.net_income,
            total_assets: self.total_assets,
        };

        // Every field must be a finite non-negative real
        if let Some((field, value)) = financials
            .iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            return Err(ForecastError::InvalidValue {
                year: self.year,
                column: field.column(),
                value,
            });
        }

        Ok(HistoricalRecord::new(self.year, financials))
    }
}

/// Every column the engine requires, Year first
pub fn required_columns() -> Vec<&'static str> {
    std::iter::once(YEAR_COLUMN)
        .chain(Field::ALL.iter().map(|f| f.column()))
        .collect()
}

fn check_headers(headers: &csv::StringRecord) -> Result<()> {
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|col| !headers.iter().any(|h| h.trim() == *col))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ForecastError::MissingColumns { missing })
    }
}

fn read_series<R: std::io::Read>(mut reader: Reader<R>) -> Result<HistoricalSeries> {
    // Fail on the header before touching any row
    check_headers(reader.headers()?)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        records.push(row.to_record()?);
    }

    if records.is_empty() {
        return Err(ForecastError::EmptySeries);
    }

    log::info!("Loaded financial dataset: {} yearly records", records.len());
    Ok(HistoricalSeries::new(records))
}

/// Load the historical series from a CSV file
pub fn load_history<P: AsRef<Path>>(path: P) -> Result<HistoricalSeries> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    read_series(reader)
}

/// Load the historical series from any reader (e.g., string buffer, network stream)
pub fn load_history_from_reader<R: std::io::Read>(reader: R) -> Result<HistoricalSeries> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_series(reader)
}

/// Load the historical series from the default data location
pub fn load_default_history() -> Result<HistoricalSeries> {
    load_history(DEFAULT_DATA_PATH)
}
