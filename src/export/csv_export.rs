//! CSV flattening of the intermediate store
//!
//! Reads the whole store, sizes the image column block to the widest
//! gallery seen, and writes one row per (product, model) pair. Field
//! quoting is the `csv` crate's standard behavior.

use super::{ExportError, ExportResult, ExportStats};
use crate::record::ProductRecord;
use crate::storage::load_records;
use std::fs::File;
use std::path::Path;

/// Fixed trailing column labels after the image block
const TRAILING_COLUMNS: [&str; 6] = ["sku", "name", "model", "price", "area", "specifications"];

/// Label repeated for each image column
const IMAGE_COLUMN: &str = "photo";

/// Flattens the intermediate store at `source` into a CSV at `dest`
pub fn export(source: &Path, dest: &Path) -> ExportResult<ExportStats> {
    let records = load_records(source)?;
    tracing::info!("Loaded {} records from {}", records.len(), source.display());

    let max_images = max_image_count(&records);

    let mut writer = csv::Writer::from_writer(File::create(dest)?);
    write_header(&mut writer, max_images)?;

    let mut stats = ExportStats {
        image_columns: max_images,
        ..Default::default()
    };

    for record in &records {
        if record.models.is_empty() {
            // Known quirk carried over from the original: a product with no
            // model rows contributes nothing to the export.
            stats.zero_model_records += 1;
            continue;
        }
        for model_index in 0..record.models.len() {
            writer.write_record(flatten_row(record, model_index, max_images))?;
            stats.rows_written += 1;
        }
    }

    writer.flush()?;

    if stats.zero_model_records > 0 {
        tracing::warn!(
            "{} records had no model rows and were omitted from the export",
            stats.zero_model_records
        );
    }

    tracing::info!(
        "Exported {} rows ({} image columns) to {}",
        stats.rows_written,
        stats.image_columns,
        dest.display()
    );

    Ok(stats)
}

/// Widest gallery across all records, 0 for an empty store
fn max_image_count(records: &[ProductRecord]) -> usize {
    records.iter().map(|r| r.images.len()).max().unwrap_or(0)
}

fn write_header(writer: &mut csv::Writer<File>, max_images: usize) -> Result<(), ExportError> {
    let mut header = Vec::with_capacity(1 + max_images + TRAILING_COLUMNS.len());
    header.push("url");
    header.extend(std::iter::repeat(IMAGE_COLUMN).take(max_images));
    header.extend(TRAILING_COLUMNS);
    writer.write_record(&header)?;
    Ok(())
}

/// Builds one flat row for a (product, model index) pair
///
/// Images are placed left-aligned from column 1; the rest of the image
/// block stays blank. Price and area fall back to blank when their column
/// is shorter than `models`.
fn flatten_row(record: &ProductRecord, model_index: usize, max_images: usize) -> Vec<String> {
    let mut row = vec![String::new(); 1 + max_images + TRAILING_COLUMNS.len()];

    row[0] = record.url.clone();
    for (i, image) in record.images.iter().enumerate() {
        row[1 + i] = image.clone();
    }

    let base = 1 + max_images;
    row[base] = record.sku.clone();
    row[base + 1] = record.name.clone();
    row[base + 2] = record.models[model_index].clone();
    row[base + 3] = record
        .model_prices
        .get(model_index)
        .cloned()
        .unwrap_or_default();
    row[base + 4] = record
        .model_area
        .get(model_index)
        .cloned()
        .unwrap_or_default();
    row[base + 5] = record.specifications.clone();

    row
}
