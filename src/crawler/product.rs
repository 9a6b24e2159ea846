//! Product page extraction
//!
//! Pulls the structured attributes off one product detail page: gallery
//! images, name, SKU, specification text, and the three parallel model
//! columns from the pricing table. Name and SKU are required; their absence
//! means the site markup drifted and is surfaced as a fatal error carrying
//! the page URL.

use crate::crawler::extract::absolutize;
use crate::crawler::fetcher::{fetch_page, FetchResult};
use crate::record::ProductRecord;
use crate::Result;
use reqwest::Client;
use scraper::{Html, Selector};

/// Fetches and extracts one product page
///
/// Returns `Ok(None)` when the page could not be fetched (the record is
/// silently dropped by the orchestrator), `Err` on a missing required field.
pub async fn fetch_product(client: &Client, url: &str, origin: &str) -> Result<Option<ProductRecord>> {
    let body = match fetch_page(client, url).await {
        FetchResult::Success { body } => body,
        FetchResult::HttpError { status_code } => {
            tracing::debug!("Dropping product {} (HTTP {})", url, status_code);
            return Ok(None);
        }
        FetchResult::NetworkError { error } => {
            tracing::debug!("Dropping product {} ({})", url, error);
            return Ok(None);
        }
    };

    extract_product(&body, url, origin).map(Some)
}

/// Extracts a [`ProductRecord`] from a fetched product page body
pub fn extract_product(html: &str, url: &str, origin: &str) -> Result<ProductRecord> {
    let document = Html::parse_document(html);

    let images = extract_images(&document, origin);
    let name = extract_name(&document);
    let sku = extract_sku(&document);
    let specifications = extract_specifications(&document);
    let (models, model_area, model_prices) = extract_model_table(&document);

    ProductRecord::new(
        url.to_string(),
        images,
        name,
        sku,
        specifications,
        models,
        model_area,
        model_prices,
    )
}

/// Gallery image URLs from the `data-original` attribute, absolutized
///
/// An absent gallery yields an empty sequence, never an error.
fn extract_images(document: &Html, origin: &str) -> Vec<String> {
    let mut images = Vec::new();

    if let Ok(selector) = Selector::parse("div.fll > ul > li > a[data-original]") {
        for element in document.select(&selector) {
            if let Some(src) = element.value().attr("data-original") {
                images.push(absolutize(src, origin));
            }
        }
    }

    images
}

/// Product title text, whitespace-normalized
fn extract_name(document: &Html) -> Option<String> {
    let selector = Selector::parse("div.flr > h1.title.title_ogr").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| normalize_whitespace(&element.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

/// SKU token from the article label's span
fn extract_sku(document: &Html) -> Option<String> {
    let selector = Selector::parse("div.flr > div.article.item > span").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Specification text: every descriptive paragraph after the first two
///
/// Paragraph texts are joined by newlines, then carriage returns, tabs and
/// double-space artifacts are stripped, matching the cleanup the original
/// applied after markup conversion.
fn extract_specifications(document: &Html) -> String {
    let Ok(selector) = Selector::parse("div.fll.wTxt > p:nth-of-type(n+3)") else {
        return String::new();
    };

    let joined = document
        .select(&selector)
        .map(|p| p.text().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    clean_markup_text(&joined)
}

/// The three model columns, each built by its own query
///
/// A variant row without a price span (or without area text) contributes
/// nothing to that column, so the columns may come out shorter than
/// `models`; the export pass blank-fills the tail.
fn extract_model_table(document: &Html) -> (Vec<String>, Vec<String>, Vec<String>) {
    let table = "table.table_tovar.table_item tr.sup_row";

    let models = select_texts(document, &format!("{table} > td:nth-of-type(1) > div"));
    let model_area = select_texts(document, &format!("{table} > td:nth-of-type(2)"));
    let model_prices = select_texts(document, &format!("{table} > td:nth-of-type(3) > span"));

    (models, model_area, model_prices)
}

/// Collects trimmed per-element text for a selector, skipping empty cells
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collapses runs of whitespace to single spaces and trims
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strips carriage returns, tabs and double-space artifacts
fn clean_markup_text(text: &str) -> String {
    text.replace('\r', "").replace('\t', "").replace("  ", "")
}
