//! The document model: one semi-structured item within a batch.
//!
//! Documents are identified by a metadata-carried logical key, never by
//! position or by their own shape. Content stays untyped until a caller
//! asks for a concrete conversion.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata field carrying a document's logical key.
pub const INPUT_KEY: &str = "input-key";

/// Metadata field marking a document as non-mandatory when its literal
/// value is `"true"`.
pub const INPUT_OPTIONAL: &str = "input-optional";

/// A semi-structured document: arbitrary structural content plus a
/// string-to-string metadata map.
///
/// Both fields are defaultable so items with no metadata (or no content)
/// decode cleanly. `IndexMap` preserves wire order of the metadata entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Metadata entries, stored verbatim — an absent field and a field
    /// present with a falsy value remain distinguishable.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub meta: IndexMap<String, String>,

    /// Structural content, converted lazily into caller-supplied types.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Document {
    /// The document's logical key: the `input-key` metadata value, or the
    /// empty string when no such metadata exists.
    pub fn logical_key(&self) -> &str {
        self.meta.get(INPUT_KEY).map(String::as_str).unwrap_or("")
    }

    /// Whether the document is marked optional. Only the literal metadata
    /// value `"true"` counts; anything else (including absent) does not.
    pub fn is_optional(&self) -> bool {
        self.meta.get(INPUT_OPTIONAL).map(String::as_str) == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(meta: &[(&str, &str)]) -> Document {
        Document {
            meta: meta
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            data: json!({}),
        }
    }

    #[test]
    fn logical_key_from_metadata() {
        let d = doc(&[(INPUT_KEY, "replica-config")]);
        assert_eq!(d.logical_key(), "replica-config");
    }

    #[test]
    fn logical_key_defaults_to_empty() {
        assert_eq!(Document::default().logical_key(), "");
    }

    #[test]
    fn optional_requires_literal_true() {
        assert!(doc(&[(INPUT_OPTIONAL, "true")]).is_optional());
        assert!(!doc(&[(INPUT_OPTIONAL, "True")]).is_optional());
        assert!(!doc(&[(INPUT_OPTIONAL, "false")]).is_optional());
        assert!(!doc(&[(INPUT_OPTIONAL, "yes")]).is_optional());
        assert!(!doc(&[(INPUT_OPTIONAL, "")]).is_optional());
        assert!(!doc(&[]).is_optional());
    }

    #[test]
    fn absent_and_falsy_metadata_stay_distinguishable() {
        let absent = doc(&[]);
        let falsy = doc(&[(INPUT_OPTIONAL, "false")]);
        assert!(absent.meta.get(INPUT_OPTIONAL).is_none());
        assert_eq!(falsy.meta.get(INPUT_OPTIONAL).map(String::as_str), Some("false"));
        // Both still resolve to "not optional".
        assert!(!absent.is_optional());
        assert!(!falsy.is_optional());
    }

    #[test]
    fn document_decodes_without_metadata() {
        let d: Document = serde_json::from_str(r#"{"data": {"x": 1}}"#).unwrap();
        assert!(d.meta.is_empty());
        assert_eq!(d.data["x"], 1);
    }
}
