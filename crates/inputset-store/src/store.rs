//! The `InputStore` — one-shot construction, read-only keyed resolution.

use crate::codec::{self, BatchFormat};
use indexmap::IndexMap;
use inputset_core::{Batch, Document, InputError, StoreError};
use serde::de::DeserializeOwned;
use std::io::{self, Read};
use tracing::debug;

/// Keyed input resolution over an immutable document batch.
///
/// Constructed once from a byte stream; every operation afterwards is a
/// pure read. The store holds no interior mutability, so a fully
/// constructed instance can be shared across threads freely.
#[derive(Debug)]
pub struct InputStore {
    batch: Batch,
}

impl InputStore {
    /// Construct from the process's standard input (JSON envelope). This is
    /// the default source in the common deployment; tests and embedders
    /// should prefer [`InputStore::from_reader`] with an injected stream.
    pub fn from_stdin() -> Result<Self, StoreError> {
        Self::from_reader(io::stdin().lock())
    }

    /// Construct from an arbitrary reader carrying a JSON envelope.
    pub fn from_reader(reader: impl Read) -> Result<Self, StoreError> {
        Self::from_reader_in(BatchFormat::Json, reader)
    }

    /// Construct from an arbitrary reader with an explicit wire format.
    pub fn from_reader_in(format: BatchFormat, reader: impl Read) -> Result<Self, StoreError> {
        let batch = codec::decode_batch(format, reader)?;
        debug!(items = batch.len(), "decoded input batch");
        Ok(Self { batch })
    }

    /// Returns `true` if the first document keyed `key` is marked optional.
    ///
    /// An unknown key also returns `false`: absence and "not optional" are
    /// conflated, so this must not be used as a presence check.
    pub fn is_optional(&self, key: &str) -> bool {
        self.find(key).map(Document::is_optional).unwrap_or(false)
    }

    /// Resolve the first document keyed `key` and convert its content
    /// into `T`.
    ///
    /// Returns [`InputError::NotFound`] when no document matches (callers
    /// can test for that kind with [`InputError::is_not_found`]) and
    /// [`InputError::Conversion`] when the content does not fit `T`.
    pub fn read_input<T: DeserializeOwned>(&self, key: &str) -> Result<T, InputError> {
        let doc = self.find(key).ok_or_else(|| InputError::NotFound {
            key: key.to_string(),
        })?;
        serde_json::from_value(doc.data.clone()).map_err(|source| InputError::Conversion {
            key: key.to_string(),
            source,
        })
    }

    /// A fresh snapshot of every document keyed by its logical key, in
    /// batch order.
    ///
    /// When several documents share a key, the later one replaces the
    /// earlier in the map, unlike the keyed lookups, which stop at the
    /// first match. Mutating the snapshot does not affect the store.
    pub fn all(&self) -> IndexMap<String, &Document> {
        self.batch
            .items
            .iter()
            .map(|doc| (doc.logical_key().to_string(), doc))
            .collect()
    }

    /// Documents in batch order.
    pub fn documents(&self) -> &[Document] {
        &self.batch.items
    }

    /// Number of documents in the batch.
    pub fn len(&self) -> usize {
        self.batch.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.is_empty()
    }

    fn find(&self, key: &str) -> Option<&Document> {
        self.batch.items.iter().find(|doc| doc.logical_key() == key)
    }
}
