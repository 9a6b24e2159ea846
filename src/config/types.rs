use serde::Deserialize;

/// Main configuration structure for Climat-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Origin used to absolutize relative hrefs (scheme + host, no trailing slash)
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Path of the root catalog index page
    #[serde(rename = "catalog-path", default = "default_catalog_path")]
    pub catalog_path: String,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Number of product pages fetched concurrently per batch
    #[serde(rename = "batch-size", default = "default_batch_size")]
    pub batch_size: usize,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON Lines intermediate store
    #[serde(rename = "dump-path", default = "default_dump_path")]
    pub dump_path: String,

    /// Path to the flattened CSV export
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,
}

fn default_origin() -> String {
    "https://climat-opt.com.ua".to_string()
}

fn default_catalog_path() -> String {
    "/catalog".to_string()
}

fn default_batch_size() -> usize {
    50
}

fn default_dump_path() -> String {
    "climat-opt.com.ua.jsonl".to_string()
}

fn default_csv_path() -> String {
    "climat-opt.com.ua.csv".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            catalog_path: default_catalog_path(),
        }
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dump_path: default_dump_path(),
            csv_path: default_csv_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig::default(),
            crawler: CrawlerConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Returns the absolute URL of the root catalog index page
    pub fn catalog_url(&self) -> String {
        format!("{}{}", self.origin, self.catalog_path)
    }
}
