pub mod config;
pub mod series;
pub mod table;

pub use series::{available_countries, country_series, CompoundedSeries};
pub use table::{load_returns_table, DataError, ReturnsTable};
