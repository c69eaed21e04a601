//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the local store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read or write the backing file.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize a value for storage.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored value exists but does not parse as the requested type.
    ///
    /// Callers decide the healing policy; the storefront discards the
    /// entry and continues with a default, never surfacing this upward.
    #[error("Corrupt value under key {key}: {detail}")]
    Corrupt { key: String, detail: String },
}

impl StoreError {
    /// Check whether this is a corrupt-value error.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::Corrupt { .. })
    }
}
