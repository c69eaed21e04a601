//! Session engine for the FlipPhone storefront.
//!
//! Ties the domain crates together the way the pages do: a write-through
//! persistent cart, a catalog session with retrying loads and a
//! single-product fallback, checkout that snapshots an order and clears the
//! cart, receipt lookup, and the current-user session.
//!
//! # Example
//!
//! ```rust,ignore
//! use flip_store::Store;
//! use flip_storefront::Storefront;
//!
//! let store = Store::open("storefront.json");
//! let mut shop = Storefront::new("https://flipphone-backend.onrender.com/api", store);
//!
//! shop.load_catalog().await?;
//! shop.add_to_cart(product_id).await?;
//! let order = shop.checkout(customer)?;
//! ```

mod cart_store;
mod error;
mod storefront;

pub use cart_store::CartStore;
pub use error::StorefrontError;
pub use storefront::Storefront;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartStore, Storefront, StorefrontError};
}
