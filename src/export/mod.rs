//! Export pass: flattening the intermediate store into CSV
//!
//! Runs independently of the crawl pass and consumes only the persisted
//! store, so it can be re-run at any time without network access.

mod csv_export;

pub use csv_export::export;

use crate::storage::SinkError;
use thiserror::Error;

/// Errors that can occur during the export pass
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to read intermediate store: {0}")]
    Store(#[from] SinkError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Summary of one export pass
#[derive(Debug, Clone, Default)]
pub struct ExportStats {
    /// Data rows written (one per product-model pair)
    pub rows_written: usize,

    /// Width of the variable image column block
    pub image_columns: usize,

    /// Records omitted because they had no model rows
    pub zero_model_records: usize,
}
