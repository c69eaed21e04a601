//! Commerce domain types and logic for the FlipPhone storefront.
//!
//! This crate provides the pure, I/O-free core of a used-electronics
//! resale storefront:
//!
//! - **Catalog**: products, condition grades, in-memory search and sort
//! - **Cart**: line items keyed by product, quantity merging, totals
//! - **Checkout**: customer validation, a linear checkout flow, orders
//! - **Trade-in**: configurable quote calculation for devices sold to us
//!
//! # Example
//!
//! ```rust,ignore
//! use flip_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_product(&product, 1)?;
//!
//! let order = Order::place(&cart, customer)?;
//! println!("Total: {}", order.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod account;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod tradein;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId, UserId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId, UserId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Condition, Product, SearchQuery, SortOption};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, CustomerInfo, Order, PaymentMethod,
    };

    // Trade-in
    pub use crate::tradein::{
        DeviceCondition, DeviceKind, QuoteConfig, QuoteError, ScreenDamage, TradeInRequest,
    };

    // Accounts
    pub use crate::account::UserProfile;
}
