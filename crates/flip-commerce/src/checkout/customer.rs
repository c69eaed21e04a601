//! Customer details captured by the checkout form.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Payment method selected at checkout.
///
/// Checkout is a mock that records the selection; no payment is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Paypal,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Paypal => "paypal",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit / Debit Card",
            PaymentMethod::Paypal => "PayPal",
        }
    }
}

/// Customer information entered at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerInfo {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Shipping address, required only when the storefront ships.
    pub address: Option<String>,
    /// Selected payment method.
    pub payment_method: Option<PaymentMethod>,
}

impl CustomerInfo {
    /// Create customer info with the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            address: None,
            payment_method: None,
        }
    }

    /// Set the shipping address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the payment method.
    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = Some(method);
        self
    }

    /// Validate, failing closed on the first missing required field.
    ///
    /// Already-entered fields are untouched; the caller re-prompts for the
    /// named field only.
    pub fn validate(&self, require_address: bool) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(CommerceError::MissingField("email"));
        }
        if !self.email.contains('@') {
            return Err(CommerceError::InvalidField("email"));
        }
        if require_address
            && self
                .address
                .as_deref()
                .map(|a| a.trim().is_empty())
                .unwrap_or(true)
        {
            return Err(CommerceError::MissingField("address"));
        }
        Ok(())
    }
}
