use anyhow::{Context, Result};
use std::env;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use wbmarkets::config::Config;
use wbmarkets::series::{available_countries, country_series};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load config (path from argv, else built-in defaults) ─────
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading config {}", path))?,
        None => Config::default(),
    };
    info!(
        data_file = %config.data_file,
        window_years = config.window_years,
        "configured"
    );

    // ─── 3) scan dataset for usable countries ────────────────────────
    let countries = available_countries(&config.data_file)
        .with_context(|| format!("listing countries in {}", config.data_file))?;
    info!(available = countries.len(), "scanned dataset");

    // ─── 4) compound a series per configured country ─────────────────
    let mut out = serde_json::Map::new();
    for name in &config.countries {
        match country_series(name, config.window_years, &config.data_file) {
            Ok(series) => {
                out.insert(name.clone(), serde_json::to_value(&series)?);
            }
            Err(e) => warn!(country = %name, "skipping: {}", e),
        }
    }

    // the display collaborator consumes this JSON as-is
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(out))?
    );
    info!("all done");
    Ok(())
}
