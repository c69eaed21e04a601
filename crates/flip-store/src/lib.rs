//! Persistent local key-value state for the FlipPhone storefront.
//!
//! The moral equivalent of a browser profile's local storage: each named
//! slot holds one JSON-serialized string value, the whole map persists to a
//! single file, and every handle opened on the same store sees the same
//! data. Writes go through to disk immediately.
//!
//! # Example
//!
//! ```rust,ignore
//! use flip_store::{keys, Store};
//!
//! let store = Store::open("storefront.json");
//!
//! // Store a value
//! store.set(keys::CART, &cart_lines)?;
//!
//! // Retrieve a value
//! let lines: Option<Vec<CartLine>> = store.get(keys::CART)?;
//!
//! // Delete a value
//! store.delete(keys::CART)?;
//! ```

mod error;
pub mod keys;
mod kv;

pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{keys, Store, StoreError};
}
