//! Storefront error types.

use flip_api::ApiError;
use flip_commerce::CommerceError;
use flip_store::StoreError;
use thiserror::Error;

/// Errors that can occur in storefront session operations.
///
/// Every variant ends in a rendered state somewhere: validation errors
/// re-prompt the form, API errors show the retry/unavailable banners, and
/// storage corruption never reaches here at all (it is healed in place).
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// Domain-level failure (validation, empty cart, bad quantity).
    #[error("Commerce error: {0}")]
    Commerce(#[from] CommerceError),

    /// Persistent storage failure (I/O, serialization).
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Remote API failure (network, not-found, rejection).
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

impl StorefrontError {
    /// Check whether this is the item-unavailable case (distinct UI state
    /// from a generic network failure).
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorefrontError::Api(e) if e.is_not_found())
    }
}
