//! Configuration file loading
//!
//! Loads the TOML configuration from disk and runs validation. Every field
//! has a default reproducing the original scrape of climat-opt.com.ua, so a
//! missing file (or an empty one) yields a fully usable configuration.

use super::types::Config;
use super::validation::validate_config;
use crate::ConfigResult;
use std::fs;
use std::path::Path;

/// Loads and validates configuration from a TOML file
pub fn load_config(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)?;
    validate_config(&config)?;
    Ok(config)
}

/// Loads configuration from an optional path, falling back to defaults
///
/// `None` (or a path that does not exist) yields the default configuration.
pub fn load_config_or_default(path: Option<&Path>) -> ConfigResult<Config> {
    match path {
        Some(p) if p.exists() => load_config(p),
        Some(p) => {
            tracing::warn!("Config file {} not found, using defaults", p.display());
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
        None => {
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}
