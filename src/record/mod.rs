//! Product record type
//!
//! One `ProductRecord` is produced per product page and appended to the
//! intermediate store. Records are written once and never mutated; the
//! export pass reads them back and flattens each into one CSV row per model.

use crate::{HarvestError, Result};
use serde::{Deserialize, Serialize};

/// Structured data extracted from one product page
///
/// `models`, `model_area` and `model_prices` are positionally correlated
/// but independently extracted, so the area and price columns may be
/// shorter than `models`. A missing tail entry means "no data for this
/// model", not an error; the exporter substitutes a blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Source product page URL, unique key for the record
    pub url: String,

    /// Absolute gallery image URLs, in document order (possibly empty)
    pub images: Vec<String>,

    /// Cleaned display name, never empty
    pub name: String,

    /// Article / SKU token, never empty
    pub sku: String,

    /// Cleaned free-form specification text, may be empty
    pub specifications: String,

    /// Model (variant) names, in table row order
    pub models: Vec<String>,

    /// Coverage area per model, aligned to `models`, may be shorter
    pub model_area: Vec<String>,

    /// Price per model, aligned to `models`, may be shorter
    pub model_prices: Vec<String>,
}

impl ProductRecord {
    /// Assembles a record, enforcing the required-field policy
    ///
    /// A missing or empty `name` or `sku` means the page structure has
    /// drifted from what the extractor expects; that is surfaced loudly as
    /// a [`HarvestError::MissingField`] carrying the offending URL, and
    /// aborts the run so a human can inspect the page.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        url: String,
        images: Vec<String>,
        name: Option<String>,
        sku: Option<String>,
        specifications: String,
        models: Vec<String>,
        model_area: Vec<String>,
        model_prices: Vec<String>,
    ) -> Result<Self> {
        let name = name.filter(|n| !n.trim().is_empty()).ok_or_else(|| {
            HarvestError::MissingField {
                url: url.clone(),
                field: "name",
            }
        })?;

        let sku = sku.filter(|s| !s.trim().is_empty()).ok_or_else(|| {
            HarvestError::MissingField {
                url: url.clone(),
                field: "sku",
            }
        })?;

        Ok(Self {
            url,
            images,
            name,
            sku,
            specifications,
            models,
            model_area,
            model_prices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: Option<&str>, sku: Option<&str>) -> Result<ProductRecord> {
        ProductRecord::new(
            "https://climat-opt.com.ua/product/1".to_string(),
            vec![],
            name.map(str::to_string),
            sku.map(str::to_string),
            String::new(),
            vec!["Model A".to_string()],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_valid_record() {
        let record = make_record(Some("Conditioner"), Some("CO-1")).unwrap();
        assert_eq!(record.name, "Conditioner");
        assert_eq!(record.sku, "CO-1");
    }

    #[test]
    fn test_missing_name_is_fatal() {
        let err = make_record(None, Some("CO-1")).unwrap_err();
        match err {
            HarvestError::MissingField { url, field } => {
                assert_eq!(field, "name");
                assert!(url.contains("/product/1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_sku_is_fatal() {
        let err = make_record(Some("Conditioner"), Some("   ")).unwrap_err();
        match err {
            HarvestError::MissingField { field, .. } => assert_eq!(field, "sku"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parallel_columns_may_differ_in_length() {
        let record = ProductRecord::new(
            "https://climat-opt.com.ua/product/2".to_string(),
            vec![],
            Some("Conditioner".to_string()),
            Some("CO-2".to_string()),
            String::new(),
            vec!["07".to_string(), "09".to_string(), "12".to_string()],
            vec!["20 m2".to_string(), "25 m2".to_string()],
            vec!["9999 грн".to_string()],
        )
        .unwrap();
        assert_eq!(record.models.len(), 3);
        assert_eq!(record.model_area.len(), 2);
        assert_eq!(record.model_prices.len(), 1);
    }
}
