//! Link extraction from catalog and listing pages
//!
//! Two structural patterns cover the whole hierarchy:
//! - catalog and subcatalog pages share one list markup
//!   (`ul.catalog.category`), so one extractor serves both levels
//! - subcatalog listing pages carry product tiles (`div.tovar_item`)
//!
//! Relative hrefs are absolutized by prefixing the configured site origin.
//! Links are returned in document order and never deduplicated.

use scraper::{Html, Selector};

/// Extracts catalog or subcatalog links from a category list page
///
/// Matches `ul.catalog.category > li > a` hrefs. Used both on the root
/// catalog index (yielding catalog URLs) and on individual catalog pages
/// (yielding subcatalog URLs); the markup is identical at both levels.
pub fn extract_category_links(html: &str, origin: &str) -> Vec<String> {
    extract_hrefs(html, "ul.catalog.category > li > a[href]", origin)
}

/// Extracts product-detail links from a subcatalog listing page
///
/// Matches the anchor inside each product tile's name block.
pub fn extract_product_links(html: &str, origin: &str) -> Vec<String> {
    extract_hrefs(html, "div.tovar_item > div > div.name > a[href]", origin)
}

/// Shared href walk: select, absolutize, keep document order
fn extract_hrefs(html: &str, selector: &str, origin: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse(selector) {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(absolutize(href, origin));
            }
        }
    }

    links
}

/// Prefixes the site origin onto a relative href
///
/// The site emits root-relative hrefs throughout; anything already absolute
/// is passed through untouched.
pub fn absolutize(href: &str, origin: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{origin}{href}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://climat-opt.com.ua";

    #[test]
    fn test_extract_category_links() {
        let html = r#"
            <ul class="catalog category">
                <li><a href="/catalog/conditioners">Conditioners</a></li>
                <li><a href="/catalog/heaters">Heaters</a></li>
                <li><a href="/catalog/dehumidifiers">Dehumidifiers</a></li>
            </ul>
        "#;
        let links = extract_category_links(html, ORIGIN);
        assert_eq!(
            links,
            vec![
                "https://climat-opt.com.ua/catalog/conditioners",
                "https://climat-opt.com.ua/catalog/heaters",
                "https://climat-opt.com.ua/catalog/dehumidifiers",
            ]
        );
    }

    #[test]
    fn test_category_links_require_exact_list_structure() {
        // Anchors outside the catalog list are ignored
        let html = r#"
            <ul class="other"><li><a href="/nope">No</a></li></ul>
            <div><a href="/also-nope">No</a></div>
            <ul class="catalog category"><li><a href="/catalog/one">One</a></li></ul>
        "#;
        let links = extract_category_links(html, ORIGIN);
        assert_eq!(links, vec!["https://climat-opt.com.ua/catalog/one"]);
    }

    #[test]
    fn test_extract_product_links_in_document_order() {
        let html = r#"
            <div class="tovar_item"><div><div class="name">
                <a href="/product/alpha">Alpha</a>
            </div></div></div>
            <div class="tovar_item"><div><div class="name">
                <a href="/product/beta">Beta</a>
            </div></div></div>
        "#;
        let links = extract_product_links(html, ORIGIN);
        assert_eq!(
            links,
            vec![
                "https://climat-opt.com.ua/product/alpha",
                "https://climat-opt.com.ua/product/beta",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"
            <ul class="catalog category">
                <li><a href="/catalog/same">Same</a></li>
                <li><a href="/catalog/same">Same</a></li>
            </ul>
        "#;
        assert_eq!(extract_category_links(html, ORIGIN).len(), 2);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        assert!(extract_category_links("<html><body></body></html>", ORIGIN).is_empty());
        assert!(extract_product_links("<html><body></body></html>", ORIGIN).is_empty());
    }

    #[test]
    fn test_absolutize_passes_through_absolute_urls() {
        assert_eq!(
            absolutize("https://elsewhere.example/x", ORIGIN),
            "https://elsewhere.example/x"
        );
        assert_eq!(
            absolutize("/catalog/x", ORIGIN),
            "https://climat-opt.com.ua/catalog/x"
        );
    }
}
