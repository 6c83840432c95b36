// src/series/mod.rs
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::table::{load_returns_table, DataError, Result};

/// Trailing observations kept per series when the caller does not choose.
pub const DEFAULT_WINDOW_YEARS: usize = 20;

/// Major markets the display layer shows before the user picks anything.
pub static DEFAULT_COUNTRIES: &[&str] = &[
    "United States",
    "China",
    "United Kingdom",
    "Germany",
    "Japan",
    "Canada",
    "France",
    "India",
    "Australia",
    "Brazil",
];

/// A compounded index anchored at 1.0 one year before the first observation.
///
/// `years` and `values` always have the same length: the synthetic baseline
/// year plus one entry per kept observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompoundedSeries {
    pub years: Vec<i32>,
    pub values: Vec<f64>,
}

/// Countries carrying at least one numeric observation, ascending.
///
/// Re-scans the file on every call; the table is never cached.
pub fn available_countries<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let table = load_returns_table(path)?;
    // BTreeMap iteration is already lexicographic
    Ok(table
        .rows
        .iter()
        .filter(|(_, cells)| cells.iter().any(Option::is_some))
        .map(|(name, _)| name.clone())
        .collect())
}

/// Compound the trailing `window_years` observations of `country` into an
/// index starting at 1.0.
///
/// Missing interior cells are dropped before windowing, so the returned years
/// need not be consecutive. The running product is rounded to 4 decimals only
/// at the end, never fed back into the compounding.
pub fn country_series<P: AsRef<Path>>(
    country: &str,
    window_years: usize,
    path: P,
) -> Result<CompoundedSeries> {
    let table = load_returns_table(path)?;
    let observed = table
        .observations(country)
        .ok_or_else(|| DataError::NotFound(country.to_string()))?;

    let start = observed.len().saturating_sub(window_years);
    let window = &observed[start..];
    if window.is_empty() {
        return Err(DataError::EmptyData(country.to_string()));
    }

    let mut years = Vec::with_capacity(window.len() + 1);
    let mut values = Vec::with_capacity(window.len() + 1);
    years.push(window[0].0 - 1);
    values.push(1.0);

    let mut running = 1.0_f64;
    for &(year, pct) in window {
        running *= 1.0 + pct / 100.0;
        years.push(year);
        values.push(running);
    }
    for v in &mut values {
        *v = round4(*v);
    }

    debug!(country, points = years.len(), "computed compounded series");
    Ok(CompoundedSeries { years, values })
}

/// Round to 4 decimal places, half away from zero.
fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
