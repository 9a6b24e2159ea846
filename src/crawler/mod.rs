//! Crawler module for catalog traversal and product extraction
//!
//! This module contains the crawl pass of the pipeline:
//! - HTTP fetching with an explicit success/failure result
//! - Link extraction from catalog and listing pages
//! - Product page extraction into [`crate::record::ProductRecord`]
//! - Batched orchestration of the whole traversal

mod extract;
mod fetcher;
mod orchestrator;
mod product;

pub use extract::{absolutize, extract_category_links, extract_product_links};
pub use fetcher::{build_http_client, fetch_page, FetchResult};
pub use orchestrator::Orchestrator;
pub use product::{extract_product, fetch_product};

use crate::config::Config;
use crate::storage::{JsonlSink, RecordSink};
use crate::Result;
use std::path::Path;

/// Runs a complete crawl pass
///
/// Discovery runs before the sink is opened, so a run aborted by an
/// unfetchable catalog index leaves no store file behind. Once discovery
/// succeeds, every extracted record streams into the JSON Lines sink at
/// the configured dump path.
pub async fn crawl(config: Config) -> Result<()> {
    let dump_path = config.output.dump_path.clone();
    let orchestrator = Orchestrator::new(config)?;

    let product_urls = orchestrator.discover_product_urls().await?;

    let mut sink = JsonlSink::open(Path::new(&dump_path))?;
    orchestrator.process_products(&product_urls, &mut sink).await?;
    sink.close()?;

    Ok(())
}
