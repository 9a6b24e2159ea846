//! Record sink trait and error types

use crate::record::ProductRecord;
use thiserror::Error;

/// Errors that can occur while writing or reading the intermediate store
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Append-only sink for extracted product records
///
/// Records arrive incrementally from the orchestrator's batches; an
/// implementation must not buffer the whole record set in memory. Writes
/// need not be individually durable, but everything written must be durable
/// once `close` returns.
pub trait RecordSink {
    /// Appends one record
    fn write(&mut self, record: &ProductRecord) -> SinkResult<()>;

    /// Flushes and finalizes the sink
    fn close(&mut self) -> SinkResult<()>;
}
