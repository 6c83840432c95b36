// src/table/load.rs
use csv::ReaderBuilder;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use super::{
    DataError, Result, ReturnsTable, COUNTRY_COLUMN, FIRST_YEAR, LAST_YEAR, METADATA_ROWS,
};

/// Read a World Bank CSV export into a [`ReturnsTable`].
///
/// The export opens with [`METADATA_ROWS`] rows of provenance noise, then a
/// header row carrying the country-name column and one column per year. Only
/// 4-digit-year headers inside [`FIRST_YEAR`, `LAST_YEAR`] are selected; the
/// rest of the header (country code, indicator columns) is ignored.
#[tracing::instrument(level = "debug", skip(path), fields(path = %path.as_ref().display()))]
pub fn load_returns_table<P: AsRef<Path>>(path: P) -> Result<ReturnsTable> {
    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);

    // Skip physical lines, not CSV records: the export's metadata block
    // contains a blank line that a CSV reader would not count as a record.
    let mut skipped = String::new();
    for _ in 0..METADATA_ROWS {
        skipped.clear();
        if reader.read_line(&mut skipped)? == 0 {
            return Err(DataError::DataAccess("dataset has no header row".into()));
        }
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // trailing rows sometimes carry fewer fields
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header = rdr
        .headers()
        .map_err(|e| DataError::DataAccess(e.to_string()))?
        .clone();

    let name_col = header
        .iter()
        .position(|h| h == COUNTRY_COLUMN)
        .ok_or_else(|| DataError::DataAccess(format!("missing '{}' column", COUNTRY_COLUMN)))?;

    let mut year_cols: Vec<(usize, i32)> = header
        .iter()
        .enumerate()
        .filter_map(|(idx, h)| {
            let year: i32 = h.parse().ok()?;
            (FIRST_YEAR..=LAST_YEAR)
                .contains(&year)
                .then_some((idx, year))
        })
        .collect();
    year_cols.sort_by_key(|&(_, year)| year);
    let years: Vec<i32> = year_cols.iter().map(|&(_, year)| year).collect();

    let mut rows: BTreeMap<String, Vec<Option<f64>>> = BTreeMap::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result?;
        let name = match record.get(name_col) {
            Some(name) if !name.is_empty() => name,
            _ => {
                warn!(record = idx, "row without a country name, skipping");
                continue;
            }
        };
        let cells = year_cols
            .iter()
            .map(|&(col, _)| record.get(col).and_then(parse_pct))
            .collect();
        rows.insert(name.to_string(), cells);
    }

    debug!(
        countries = rows.len(),
        years = years.len(),
        "loaded returns table"
    );
    Ok(ReturnsTable { years, rows })
}

/// Parse a raw cell into a percentage. Blanks and non-numeric text become
/// `None` rather than an error; the export marks missing observations with
/// empty fields.
pub fn parse_pct(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
