//! Yearly financial record structures matching the historical source format

use serde::{Deserialize, Serialize};

/// A financial field carried by every historical record (everything except Year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Revenue,
    Cogs,
    CurrentAssets,
    CurrentLiabilities,
    Inventory,
    Cash,
    AccountsReceivable,
    NetIncome,
    TotalAssets,
}

impl Field {
    /// All financial fields in source column order
    pub const ALL: [Field; 9] = [
        Field::Revenue,
        Field::Cogs,
        Field::CurrentAssets,
        Field::CurrentLiabilities,
        Field::Inventory,
        Field::Cash,
        Field::AccountsReceivable,
        Field::NetIncome,
        Field::TotalAssets,
    ];

    /// Column header used by the historical source
    pub fn column(&self) -> &'static str {
        match self {
            Field::Revenue => "Revenue",
            Field::Cogs => "COGS",
            Field::CurrentAssets => "Current Assets",
            Field::CurrentLiabilities => "Current Liabilities",
            Field::Inventory => "Inventory",
            Field::Cash => "Cash",
            Field::AccountsReceivable => "Accounts Receivable",
            Field::NetIncome => "Net Income",
            Field::TotalAssets => "Total Assets",
        }
    }
}

/// One value per financial field.
///
/// Used for raw yearly figures, growth rates and projections alike, so every
/// derived table is guaranteed to cover every field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Financials {
    pub revenue: f64,
    pub cogs: f64,
    pub current_assets: f64,
    pub current_liabilities: f64,
    pub inventory: f64,
    pub cash: f64,
    pub accounts_receivable: f64,
    pub net_income: f64,
    pub total_assets: f64,
}

impl Financials {
    /// Build a value set by evaluating `f` once per field
    pub fn from_fn<F: FnMut(Field) -> f64>(mut f: F) -> Self {
        Self {
            revenue: f(Field::Revenue),
            cogs: f(Field::Cogs),
            current_assets: f(Field::CurrentAssets),
            current_liabilities: f(Field::CurrentLiabilities),
            inventory: f(Field::Inventory),
            cash: f(Field::Cash),
            accounts_receivable: f(Field::AccountsReceivable),
            net_income: f(Field::NetIncome),
            total_assets: f(Field::TotalAssets),
        }
    }

    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Revenue => self.revenue,
            Field::Cogs => self.cogs,
            Field::CurrentAssets => self.current_assets,
            Field::CurrentLiabilities => self.current_liabilities,
            Field::Inventory => self.inventory,
            Field::Cash => self.cash,
            Field::AccountsReceivable => self.accounts_receivable,
            Field::NetIncome => self.net_income,
            Field::TotalAssets => self.total_assets,
        }
    }

    /// Iterate `(field, value)` pairs in source column order
    pub fn iter(&self) -> impl Iterator<Item = (Field, f64)> + '_ {
        Field::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

/// A single fiscal year of historical figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Fiscal year
    pub year: i32,

    /// Reported figures for that year
    pub financials: Financials,
}

impl HistoricalRecord {
    pub fn new(year: i32, financials: Financials) -> Self {
        Self { year, financials }
    }

    pub fn value(&self, field: Field) -> f64 {
        self.financials.get(field)
    }
}

/// The loaded historical series, in source order.
///
/// Never mutated after loading; the engine only reads from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    records: Vec<HistoricalRecord>,
}

impl HistoricalSeries {
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with `year <= cutoff_year`, in source order
    pub fn up_to(&self, cutoff_year: i32) -> impl Iterator<Item = &HistoricalRecord> {
        self.records.iter().filter(move |r| r.year <= cutoff_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_covers_every_field() {
        let mut seen = Vec::new();
        let values = Financials::from_fn(|field| {
            seen.push(field);
            seen.len() as f64
        });

        assert_eq!(seen, Field::ALL.to_vec());
        assert_eq!(values.revenue, 1.0);
        assert_eq!(values.total_assets, 9.0);
    }

    #[test]
    fn test_get_matches_iter() {
        let values = Financials::from_fn(|field| field.column().len() as f64);
        for (field, value) in values.iter() {
            assert_eq!(values.get(field), value);
        }
    }

    #[test]
    fn test_up_to_filters_by_cutoff() {
        let series = HistoricalSeries::new(vec![
            HistoricalRecord::new(2022, Financials::default()),
            HistoricalRecord::new(2024, Financials::default()),
            HistoricalRecord::new(2023, Financials::default()),
        ]);

        let years: Vec<i32> = series.up_to(2023).map(|r| r.year).collect();
        assert_eq!(years, vec![2022, 2023]);
    }
}
