//! The batch envelope: the ordered document collection a store decodes
//! once at construction.

use crate::document::Document;
use serde::{Deserialize, Serialize};

/// Wire envelope for an input batch: a small header plus an ordered list
/// of items.
///
/// Every field is defaultable, so a bare `{"items": [...]}` decodes, and
/// the codec can fall back to `Batch::default()` for an empty stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Envelope version, e.g. `"v1"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Envelope kind, e.g. `"InputBatch"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Documents in wire order. Order is semantic: keyed lookups stop at
    /// the first match.
    #[serde(default)]
    pub items: Vec<Document>,
}

impl Batch {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
