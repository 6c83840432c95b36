// src/table/mod.rs

pub mod load;

pub use load::{load_returns_table, parse_pct};

use std::collections::BTreeMap;
use thiserror::Error;

/// First year column a World Bank export can carry.
pub const FIRST_YEAR: i32 = 1960;
/// Last year column we select.
pub const LAST_YEAR: i32 = 2024;
/// Metadata rows preceding the header in a World Bank CSV export.
pub const METADATA_ROWS: usize = 4;
/// Header of the column the table is indexed by.
pub const COUNTRY_COLUMN: &str = "Country Name";

/// Annual percentage returns, one row per country.
#[derive(Debug)]
pub struct ReturnsTable {
    /// Year columns present in the file within [`FIRST_YEAR`, `LAST_YEAR`], ascending.
    pub years: Vec<i32>,
    /// One cell per entry of `years`. Blank or non-numeric source cells are
    /// `None`, never zero.
    pub rows: BTreeMap<String, Vec<Option<f64>>>,
}

impl ReturnsTable {
    /// (year, value) pairs for `country` with missing cells dropped, in year
    /// order. `None` if the country is not in the index at all.
    pub fn observations(&self, country: &str) -> Option<Vec<(i32, f64)>> {
        let row = self.rows.get(country)?;
        Some(
            self.years
                .iter()
                .zip(row)
                .filter_map(|(year, cell)| cell.map(|v| (*year, v)))
                .collect(),
        )
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    /// The source file is missing, unreadable, or lacks the expected header.
    #[error("cannot access dataset: {0}")]
    DataAccess(String),
    #[error("country '{0}' not found in dataset")]
    NotFound(String),
    #[error("no data available for '{0}'")]
    EmptyData(String),
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::DataAccess(e.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::DataAccess(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;
