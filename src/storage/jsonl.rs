//! JSON Lines intermediate store
//!
//! The crawl pass appends one JSON object per line as records arrive; the
//! export pass reads the whole file back. JSON Lines keeps the store
//! self-describing (field names preserved) while staying appendable without
//! rewriting what is already on disk.

use super::traits::{RecordSink, SinkError, SinkResult};
use crate::record::ProductRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Append-only JSON Lines sink
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Creates (or truncates) the store file at `path`
    pub fn open(path: &Path) -> SinkResult<Self> {
        let file = File::create(path)?;
        tracing::debug!("Opened record sink at {}", path.display());
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl RecordSink for JsonlSink {
    fn write(&mut self, record: &ProductRecord) -> SinkResult<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Loads the entire store into memory for the export pass
pub fn load_records(path: &Path) -> SinkResult<Vec<ProductRecord>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: ProductRecord =
            serde_json::from_str(&line).map_err(|e| SinkError::MalformedRecord {
                line: index + 1,
                message: e.to_string(),
            })?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(url: &str, model_count: usize) -> ProductRecord {
        ProductRecord::new(
            url.to_string(),
            vec![format!("{url}/img.jpg")],
            Some("Conditioner".to_string()),
            Some("CO-1".to_string()),
            "Cooling: 2.6 kW".to_string(),
            (0..model_count).map(|i| format!("M{i}")).collect(),
            vec![],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.jsonl");

        let records = vec![
            sample_record("https://x/p1", 2),
            sample_record("https://x/p2", 0),
        ];

        let mut sink = JsonlSink::open(&path).unwrap();
        for record in &records {
            sink.write(record).unwrap();
        }
        sink.close().unwrap();

        let loaded = load_records(&path).unwrap();
        assert_eq!(loaded, records);
        // Empty sequences come back as empty, not absent
        assert!(loaded[1].model_area.is_empty());
        assert!(loaded[1].models.is_empty());
    }

    #[test]
    fn test_incremental_append_is_readable_midway() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.jsonl");

        let mut sink = JsonlSink::open(&path).unwrap();
        sink.write(&sample_record("https://x/p1", 1)).unwrap();
        sink.close().unwrap();

        assert_eq!(load_records(&path).unwrap().len(), 1);
    }

    #[test]
    fn test_empty_store_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.jsonl");
        let mut sink = JsonlSink::open(&path).unwrap();
        sink.close().unwrap();

        assert!(load_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.jsonl");
        std::fs::write(&path, "{\"not\": \"a record\"}\n").unwrap();

        match load_records(&path).unwrap_err() {
            SinkError::MalformedRecord { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
