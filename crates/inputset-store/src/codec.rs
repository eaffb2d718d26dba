//! Stream decoding for input batches.
//!
//! A batch arrives as a single structured document on a byte stream: JSON
//! on standard input in the common deployment, or YAML for hand-authored
//! batches. End-of-stream before any bytes is a valid batch with zero
//! items, not an error.

use inputset_core::{Batch, StoreError};
use std::io::Read;

/// Wire format of an input batch stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchFormat {
    /// JSON envelope, the default wire format.
    #[default]
    Json,
    /// YAML envelope.
    Yaml,
}

/// Decode a batch from `reader`, consuming the stream to its end.
///
/// An empty or whitespace-only stream decodes to `Batch::default()`. Any
/// other failure aborts with the underlying cause attached.
pub fn decode_batch(format: BatchFormat, mut reader: impl Read) -> Result<Batch, StoreError> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    if buf.trim().is_empty() {
        return Ok(Batch::default());
    }
    let batch = match format {
        BatchFormat::Json => serde_json::from_str(&buf)?,
        BatchFormat::Yaml => serde_yaml::from_str(&buf)?,
    };
    Ok(batch)
}
