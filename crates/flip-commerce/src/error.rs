//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront domain operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Checkout attempted against an empty cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A required checkout field is missing.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A checkout field is present but not usable.
    #[error("Invalid value for field: {0}")]
    InvalidField(&'static str),

    /// Invalid line quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
