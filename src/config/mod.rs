//! Configuration module for Climat-Harvest
//!
//! The original scrape hard-coded its origin, batch size, and file paths as
//! module constants; here they live in a TOML file with the same values as
//! defaults, so running with no config file reproduces the original run.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};

pub use validation::validate_config;
