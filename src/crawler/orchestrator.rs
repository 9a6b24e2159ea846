//! Crawl orchestration
//!
//! Drives the three-level traversal: root catalog index → catalog pages →
//! subcatalog listing pages → product detail pages. Each discovery level
//! fans out concurrently over all of its URLs; product pages are then
//! processed in fixed-size sequential batches, and every batch is fully
//! committed to the record sink before the next one starts. That ordering
//! is the crawl's only politeness bound.
//!
//! Failure semantics are asymmetric on purpose: an unfetchable catalog,
//! subcatalog or product page silently shrinks the result set, while a
//! fetched product page missing its name or SKU aborts the whole run so a
//! human can inspect the markup drift.

use crate::config::Config;
use crate::crawler::extract::{extract_category_links, extract_product_links};
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchResult};
use crate::crawler::product::fetch_product;
use crate::storage::RecordSink;
use crate::{HarvestError, Result};
use futures::future::join_all;
use reqwest::Client;

/// Main crawl orchestrator
pub struct Orchestrator {
    config: Config,
    client: Client,
}

impl Orchestrator {
    /// Creates an orchestrator with a shared HTTP client
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self { config, client })
    }

    /// Runs the full crawl, streaming extracted records into `sink`
    ///
    /// The sink is not closed here; the caller owns its lifecycle.
    pub async fn run<S: RecordSink>(&self, sink: &mut S) -> Result<()> {
        let product_urls = self.discover_product_urls().await?;
        self.process_products(&product_urls, sink).await
    }

    /// Fetches and extracts product pages in fixed-size sequential batches
    ///
    /// Every record of batch N is committed to the sink before batch N+1
    /// starts; within a batch, record order follows input URL order.
    pub async fn process_products<S: RecordSink>(
        &self,
        product_urls: &[String],
        sink: &mut S,
    ) -> Result<()> {
        let batch_size = self.config.crawler.batch_size;
        let mut written = 0usize;
        let mut dropped = 0usize;

        for (batch_index, batch) in product_urls.chunks(batch_size).enumerate() {
            tracing::debug!("Processing batch {} ({} URLs)", batch_index, batch.len());

            let results = join_all(
                batch
                    .iter()
                    .map(|url| fetch_product(&self.client, url, &self.config.site.origin)),
            )
            .await;

            // Results line up positionally with the batch's URLs; failed
            // fetches drop their slot. A missing required field anywhere in
            // the batch aborts before any of the batch's records reach the
            // sink, so the dump never holds a partial batch.
            let extracted = results.into_iter().collect::<Result<Vec<_>>>()?;

            for record in extracted {
                match record {
                    Some(record) => {
                        sink.write(&record)?;
                        written += 1;
                    }
                    None => dropped += 1,
                }
            }
        }

        tracing::info!(
            "Crawl finished: {} records written, {} product pages dropped",
            written,
            dropped
        );

        Ok(())
    }

    /// Walks the catalog hierarchy down to the product-detail URL list
    pub async fn discover_product_urls(&self) -> Result<Vec<String>> {
        let origin = &self.config.site.origin;

        // Level 0: the root catalog index is the one page whose failure
        // aborts the run outright, there is nothing to crawl without it.
        let catalog_url = self.config.site.catalog_url();
        let index_body = match fetch_page(&self.client, &catalog_url).await {
            FetchResult::Success { body } => body,
            FetchResult::HttpError { status_code } => {
                return Err(HarvestError::CatalogIndexUnavailable {
                    url: catalog_url,
                    reason: format!("HTTP {status_code}"),
                })
            }
            FetchResult::NetworkError { error } => {
                return Err(HarvestError::CatalogIndexUnavailable {
                    url: catalog_url,
                    reason: error,
                })
            }
        };

        let catalog_urls = extract_category_links(&index_body, origin);
        tracing::info!("Found {} catalogs", catalog_urls.len());

        // Level 1: catalogs → subcatalogs (same list markup at both levels)
        let subcatalog_urls = self
            .fan_out_links(&catalog_urls, extract_category_links)
            .await;
        tracing::info!("Found {} subcatalogs", subcatalog_urls.len());

        // Level 2: subcatalogs → product tiles
        let product_urls = self
            .fan_out_links(&subcatalog_urls, extract_product_links)
            .await;
        tracing::info!("Found {} product URLs", product_urls.len());

        Ok(product_urls)
    }

    /// Fetches every URL concurrently and flattens the extracted links
    ///
    /// Pages that fail to fetch are excluded entirely rather than counted
    /// as empty, so one dead subcatalog never disturbs its siblings.
    async fn fan_out_links(
        &self,
        urls: &[String],
        extract: fn(&str, &str) -> Vec<String>,
    ) -> Vec<String> {
        let bodies = join_all(urls.iter().map(|url| fetch_page(&self.client, url))).await;

        let mut links = Vec::new();
        for (url, result) in urls.iter().zip(bodies) {
            match result.into_body() {
                Some(body) => links.extend(extract(&body, &self.config.site.origin)),
                None => tracing::warn!("Skipping unfetchable page {}", url),
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_batching_shape() {
        // 120 URLs at batch size 50 must form batches of 50, 50, 20
        let urls: Vec<String> = (0..120).map(|i| format!("https://x/p{i}")).collect();
        let sizes: Vec<usize> = urls.chunks(50).map(<[String]>::len).collect();
        assert_eq!(sizes, vec![50, 50, 20]);
    }
}
