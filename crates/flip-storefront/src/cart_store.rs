//! Write-through persistent cart.

use crate::StorefrontError;
use flip_commerce::cart::{Cart, CartLine};
use flip_commerce::catalog::Product;
use flip_commerce::ids::ProductId;
use flip_commerce::money::Money;
use flip_store::{keys, Store};

/// A cart bound to persistent storage.
///
/// Every mutating operation writes the full line list through to the store
/// immediately, so in-memory state and persisted state never diverge. On
/// load, a corrupt stored cart heals to empty; the parse failure never
/// reaches the caller.
#[derive(Debug, Clone)]
pub struct CartStore {
    cart: Cart,
    store: Store,
}

impl CartStore {
    /// Restore the cart from storage.
    pub fn load(store: Store) -> Self {
        let cart = match store.get::<Vec<CartLine>>(keys::CART) {
            Ok(Some(lines)) => Cart::from_lines(lines),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt stored cart, starting empty");
                store.delete(keys::CART).ok();
                Cart::new()
            }
        };
        Self { cart, store }
    }

    /// Add a product (quantity merging and price snapshot per cart rules),
    /// then persist.
    pub fn add_product(&mut self, product: &Product, qty: u32) -> Result<(), StorefrontError> {
        self.cart.add_product(product, qty)?;
        tracing::debug!(product_id = %product.id, qty, "added to cart");
        self.persist()
    }

    /// Remove a product's line (no-op when absent), then persist.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: ProductId) -> Result<bool, StorefrontError> {
        let removed = self.cart.remove(product_id);
        self.persist()?;
        Ok(removed)
    }

    /// Adjust a line's quantity by a delta (floored at 1), then persist.
    ///
    /// Returns whether a line was found.
    pub fn change_quantity(
        &mut self,
        product_id: ProductId,
        delta: i64,
    ) -> Result<bool, StorefrontError> {
        let found = self.cart.change_quantity(product_id, delta);
        self.persist()?;
        Ok(found)
    }

    /// Empty the cart, then persist the empty state.
    pub fn clear(&mut self) -> Result<(), StorefrontError> {
        self.cart.clear();
        self.persist()
    }

    /// Cart total, recomputed on every call.
    pub fn total(&self) -> Result<Money, StorefrontError> {
        Ok(self.cart.total()?)
    }

    /// Total item count (`Σ quantity`).
    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.cart.lines
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    fn persist(&self) -> Result<(), StorefrontError> {
        self.store.set(keys::CART, &self.cart.lines)?;
        Ok(())
    }
}
