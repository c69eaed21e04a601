//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// `price` is snapshotted from the product at add time, so a later catalog
/// price change never silently reprices a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Image URL (denormalized for display).
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Total for this line (`price * quantity`).
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.quantity as i64)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart: an ordered list of lines, one per product.
///
/// A product id appears at most once; adding an already-present product
/// merges into the existing line's quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstruct a cart from persisted lines.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// Add a product to the cart.
    ///
    /// If a line with the same product id exists, its quantity grows by
    /// `qty`; otherwise a new line is appended with the product's current
    /// price snapshotted. Zero quantity is rejected.
    pub fn add_product(&mut self, product: &Product, qty: u32) -> Result<(), CommerceError> {
        if qty == 0 {
            return Err(CommerceError::InvalidQuantity(qty));
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing.quantity.saturating_add(qty);
            return Ok(());
        }

        self.lines.push(CartLine {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: qty,
        });
        Ok(())
    }

    /// Remove the line for a product.
    ///
    /// Returns whether a line was removed; removing an absent product is a
    /// no-op, not an error.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Adjust a line's quantity by a signed delta, clamped to a floor of 1.
    ///
    /// Decrementing below 1 leaves the line at quantity 1; it never removes
    /// the line (removal is explicit via [`Cart::remove`]). Returns whether
    /// a line was found.
    pub fn change_quantity(&mut self, product_id: ProductId, delta: i64) -> bool {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                let adjusted = (line.quantity as i64).saturating_add(delta);
                line.quantity = adjusted.clamp(1, u32::MAX as i64) as u32;
                true
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total across all lines (`Σ price * quantity`), recomputed on every
    /// call.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency());
        for line in &self.lines {
            let line_total = line.line_total()?;
            total = total.try_add(&line_total).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }

    /// Total item count (`Σ quantity`, distinct from line count).
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|l| l.quantity as u64).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product, if present.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn currency(&self) -> Currency {
        self.lines
            .first()
            .map(|l| l.price.currency)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Device {}", id),
            Money::new(cents, Currency::USD),
            "phones",
        )
    }

    #[test]
    fn test_add_product() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 2).unwrap();
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_add_same_product_merges_line() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 1).unwrap();
        cart.add_product(&product(1, 1000), 1).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_zero_quantity_rejected() {
        let mut cart = Cart::new();
        assert!(cart.add_product(&product(1, 1000), 0).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_price_snapshot_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product(1, 1000);
        cart.add_product(&p, 1).unwrap();
        p.price = Money::new(9999, Currency::USD);
        assert_eq!(
            cart.line(ProductId::new(1)).unwrap().price.amount_cents,
            1000
        );
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 1).unwrap();
        let total_before = cart.total().unwrap();

        assert!(!cart.remove(ProductId::new(99)));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total().unwrap(), total_before);
    }

    #[test]
    fn test_remove_deletes_line() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 3).unwrap();
        assert!(cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 1).unwrap();

        assert!(cart.change_quantity(ProductId::new(1), -5));
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 1);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_change_quantity_increments() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 1).unwrap();
        cart.change_quantity(ProductId::new(1), 2);
        assert_eq!(cart.line(ProductId::new(1)).unwrap().quantity, 3);
    }

    #[test]
    fn test_change_quantity_absent_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.change_quantity(ProductId::new(1), 1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_and_count_recomputed() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 2).unwrap();
        cart.add_product(&product(2, 2500), 1).unwrap();

        assert_eq!(cart.total().unwrap().amount_cents, 4500);
        assert_eq!(cart.count(), 3);

        cart.change_quantity(ProductId::new(2), 1);
        assert_eq!(cart.total().unwrap().amount_cents, 7000);
        assert_eq!(cart.count(), 4);

        cart.remove(ProductId::new(1));
        assert_eq!(cart.total().unwrap().amount_cents, 5000);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.total().unwrap().is_zero());
        assert_eq!(cart.count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1000), 2).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_lines_serde_roundtrip() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 1099), 2).unwrap();
        cart.add_product(&product(2, 250), 1).unwrap();

        let json = serde_json::to_string(&cart.lines).unwrap();
        let lines: Vec<CartLine> = serde_json::from_str(&json).unwrap();
        assert_eq!(Cart::from_lines(lines), cart);
    }
}
