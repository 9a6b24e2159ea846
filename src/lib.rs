//! Climat-Harvest: a catalog scraper for climat-opt.com.ua
//!
//! This crate crawls the site's catalog hierarchy (catalogs → subcatalogs →
//! product pages), extracts structured product data into a JSON Lines store,
//! and flattens that store into a CSV with one row per product model.

pub mod config;
pub mod crawler;
pub mod export;
pub mod record;
pub mod storage;

use thiserror::Error;

/// Main error type for Climat-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Failed to fetch catalog index {url}: {reason}")]
    CatalogIndexUnavailable { url: String, reason: String },

    #[error("Missing required field `{field}` on product page {url}")]
    MissingField { url: String, field: &'static str },

    #[error("Sink error: {0}")]
    Sink(#[from] storage::SinkError),

    #[error("Export error: {0}")]
    Export(#[from] export::ExportError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid site origin: {0}")]
    InvalidOrigin(String),
}

/// Result type alias for Climat-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::ProductRecord;
