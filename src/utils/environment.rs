use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Overrides the directory sets are stored in
pub const DATA_DIR_VAR: &str = "BRICK_TRACKER_DATA_DIR";
/// Catalog API key, sent as `Authorization: key <KEY>`
pub const API_KEY_VAR: &str = "REBRICKABLE_API_KEY";
/// Overrides the catalog base URL
pub const BASE_URL_VAR: &str = "REBRICKABLE_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://rebrickable.com/api/v3/lego";

/// Get the data directory holding one JSON file per set
///
/// Uses `$BRICK_TRACKER_DATA_DIR` when set, otherwise `<data dir>/brick-tracker/sets`
/// (`~/.local/share` on Linux, `~/Library/Application Support` on macOS).
pub fn get_data_dir() -> Result<PathBuf> {
    resolve_data_dir(non_empty_var(DATA_DIR_VAR), dirs::data_dir())
}

fn resolve_data_dir(override_dir: Option<String>, platform_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(PathBuf::from(dir));
    }
    let base = platform_dir.context("Failed to get platform data directory")?;
    Ok(base.join("brick-tracker").join("sets"))
}

/// Get the catalog API key
pub fn get_api_key() -> Result<String> {
    match non_empty_var(API_KEY_VAR) {
        Some(key) => Ok(key),
        None => bail!("{} environment variable not set (it can also go in a .env file)", API_KEY_VAR),
    }
}

/// Get the catalog base URL, without a trailing slash
pub fn get_catalog_base_url() -> String {
    non_empty_var(BASE_URL_VAR)
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
