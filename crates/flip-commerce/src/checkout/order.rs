//! Order snapshots.

use crate::cart::{Cart, CartLine};
use crate::checkout::CustomerInfo;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A completed order.
///
/// Created once at checkout submission and immutable thereafter; the items
/// are a snapshot of the cart, never a live reference, so later cart
/// mutations cannot rewrite a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier (time-derived).
    pub id: OrderId,
    /// Snapshot of the cart lines at submission time.
    pub items: Vec<CartLine>,
    /// Customer who placed the order.
    pub customer: CustomerInfo,
    /// Grand total charged.
    pub total: Money,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Order {
    /// Place an order by snapshotting the cart.
    ///
    /// Fails closed: an empty cart never produces an order record, and
    /// invalid customer details block the submission with the offending
    /// field named. On success the cart itself is untouched; clearing it is
    /// the caller's explicit follow-up step.
    pub fn place(cart: &Cart, customer: CustomerInfo) -> Result<Order, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        customer.validate(false)?;

        let total = cart.total()?;
        Ok(Order {
            id: generate_order_id(),
            items: cart.lines.clone(),
            customer,
            total,
            created_at: current_timestamp(),
        })
    }

    /// Total item count across the snapshot.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum()
    }
}

/// Generate a time-derived order id, unique within a session.
///
/// A per-process counter disambiguates orders placed within the same
/// second; global uniqueness is not required.
fn generate_order_id() -> OrderId {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let seq = COUNTER.fetch_add(1, Ordering::SeqCst);
    OrderId::new(format!("ORD-{}-{:04}", current_timestamp(), seq))
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
