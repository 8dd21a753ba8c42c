//! Historical financial series and its CSV loader

mod data;
pub mod loader;

pub use data::{Field, Financials, HistoricalRecord, HistoricalSeries};
pub use loader::{load_default_history, load_history, load_history_from_reader, DEFAULT_DATA_PATH};
