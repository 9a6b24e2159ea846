//! Intermediate store for extracted product records
//!
//! The store is the sole artifact shared between the crawl pass and the
//! export pass; the two may run at different times, or independently.

mod jsonl;
mod traits;

pub use jsonl::{load_records, JsonlSink};
pub use traits::{RecordSink, SinkError, SinkResult};
