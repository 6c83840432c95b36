// src/config/mod.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::series::{DEFAULT_COUNTRIES, DEFAULT_WINDOW_YEARS};

/// Canonical filename of the World Bank S&P Global Equity Indices export.
pub const DEFAULT_DATA_FILE: &str = "data/API_CM.MKT.INDX.ZG_DS2_en_csv_v2_10345.csv";

/// Run configuration for the harness. Every field has a built-in default so
/// a partial (or absent) YAML file still yields a usable config.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_window_years")]
    pub window_years: usize,
    #[serde(default = "default_countries")]
    pub countries: Vec<String>,
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

fn default_window_years() -> usize {
    DEFAULT_WINDOW_YEARS
}

fn default_countries() -> Vec<String> {
    DEFAULT_COUNTRIES.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: default_data_file(),
            window_years: default_window_years(),
            countries: default_countries(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("reading config {:?}", path.as_ref()))?;
        let config = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing config {:?}", path.as_ref()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_yaml_falls_back_to_defaults() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"window_years: 5\n")?;

        let config = Config::load(tmp.path())?;
        assert_eq!(config.window_years, 5);
        assert_eq!(config.data_file, DEFAULT_DATA_FILE);
        assert_eq!(config.countries.len(), DEFAULT_COUNTRIES.len());
        Ok(())
    }

    #[test]
    fn full_yaml_overrides_everything() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(
            b"data_file: data/other.csv\nwindow_years: 10\ncountries:\n  - Japan\n  - Brazil\n",
        )?;

        let config = Config::load(tmp.path())?;
        assert_eq!(config.data_file, "data/other.csv");
        assert_eq!(config.window_years, 10);
        assert_eq!(config.countries, vec!["Japan", "Brazil"]);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Config::load("does/not/exist.yaml").is_err());
    }
}
