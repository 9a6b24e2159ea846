//! Configuration validation
//!
//! Checks the loaded configuration for values the pipeline cannot work with
//! before any network traffic happens.

use super::types::Config;
use crate::{ConfigError, ConfigResult};
use url::Url;

/// Validates a loaded configuration
pub fn validate_config(config: &Config) -> ConfigResult<()> {
    validate_origin(&config.site.origin)?;

    if !config.site.catalog_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "catalog-path must start with '/', got {:?}",
            config.site.catalog_path
        )));
    }

    if config.crawler.batch_size == 0 {
        return Err(ConfigError::Validation(
            "batch-size must be at least 1".to_string(),
        ));
    }

    if config.output.dump_path.is_empty() {
        return Err(ConfigError::Validation("dump-path is empty".to_string()));
    }

    if config.output.csv_path.is_empty() {
        return Err(ConfigError::Validation("csv-path is empty".to_string()));
    }

    Ok(())
}

/// Validates the site origin: absolute http(s) URL with a host and no
/// trailing slash (the origin is prepended verbatim to relative hrefs)
fn validate_origin(origin: &str) -> ConfigResult<()> {
    let url =
        Url::parse(origin).map_err(|e| ConfigError::InvalidOrigin(format!("{origin}: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidOrigin(format!(
            "{origin}: scheme must be http or https"
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidOrigin(format!("{origin}: missing host")));
    }

    if origin.ends_with('/') {
        return Err(ConfigError::InvalidOrigin(format!(
            "{origin}: must not end with '/'"
        )));
    }

    Ok(())
}
