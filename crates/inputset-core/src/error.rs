//! Error types for batch decoding and input resolution.

use thiserror::Error;

/// Errors that can occur while constructing a store from a byte stream.
///
/// All of these are fatal to construction: no store instance is produced.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("reading input stream: {0}")]
    Io(#[from] std::io::Error),

    #[error("decoding input batch: {0}")]
    Json(#[from] serde_json::Error),

    #[error("decoding input batch: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from keyed input resolution. Both kinds are recoverable and left
/// to the caller to decide on; the store never retries or exits.
#[derive(Debug, Error)]
pub enum InputError {
    /// No document in the batch carries the requested key.
    #[error("input '{key}' not found")]
    NotFound { key: String },

    /// A document matched but its content does not fit the requested shape.
    #[error("converting input '{key}': {source}")]
    Conversion {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl InputError {
    /// Returns `true` for the not-found kind, so callers can tell an absent
    /// key from a conversion failure without matching on message text.
    pub fn is_not_found(&self) -> bool {
        matches!(self, InputError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_key_in_message() {
        let err = InputError::NotFound {
            key: "tls-cert".into(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("tls-cert"));
    }

    #[test]
    fn conversion_is_not_not_found() {
        let source = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = InputError::Conversion {
            key: "replica-config".into(),
            source,
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("replica-config"));
    }

    #[test]
    fn store_error_wraps_decode_cause() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::from(cause);
        assert!(err.to_string().starts_with("decoding input batch:"));
    }
}
