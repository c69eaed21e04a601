//! Checkout flow state machine.
//!
//! A deliberately linear flow: review the cart, enter details, done. The
//! only branching is validation, which blocks the transition and names the
//! offending field.

use crate::cart::Cart;
use crate::checkout::CustomerInfo;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStep {
    /// Cart review.
    Cart,
    /// Customer details entry.
    Details,
    /// Checkout complete, order placed.
    Complete,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Details => "details",
            CheckoutStep::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Details => "Details",
            CheckoutStep::Complete => "Complete",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Details => 2,
            CheckoutStep::Complete => 3,
        }
    }
}

/// Checkout flow state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutFlow {
    /// Current step.
    pub step: CheckoutStep,
    /// Customer details collected at the Details step.
    pub customer: Option<CustomerInfo>,
    /// Whether the details form requires a shipping address.
    pub require_address: bool,
}

impl CheckoutFlow {
    /// Start a new checkout at the cart review step.
    pub fn new() -> Self {
        Self {
            step: CheckoutStep::Cart,
            customer: None,
            require_address: false,
        }
    }

    /// Require a shipping address at the details step.
    pub fn with_address_required(mut self) -> Self {
        self.require_address = true;
        self
    }

    /// Record the customer details entered on the form.
    pub fn set_customer(&mut self, customer: CustomerInfo) {
        self.customer = Some(customer);
    }

    /// Advance to the next step.
    ///
    /// Leaving `Cart` requires a non-empty cart; leaving `Details` requires
    /// valid customer details. A blocked transition leaves the flow (and
    /// any entered fields) untouched.
    pub fn advance(&mut self, cart: &Cart) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Cart => {
                if cart.is_empty() {
                    return Err(CommerceError::EmptyCart);
                }
                CheckoutStep::Details
            }
            CheckoutStep::Details => {
                let customer = self
                    .customer
                    .as_ref()
                    .ok_or(CommerceError::MissingField("name"))?;
                customer.validate(self.require_address)?;
                if cart.is_empty() {
                    return Err(CommerceError::EmptyCart);
                }
                CheckoutStep::Complete
            }
            CheckoutStep::Complete => {
                return Err(CommerceError::InvalidTransition {
                    from: "complete".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        self.step = next;
        Ok(next)
    }

    /// Go back one step. Entered details are kept.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Cart => {
                return Err(CommerceError::InvalidTransition {
                    from: "cart".to_string(),
                    to: "none".to_string(),
                })
            }
            CheckoutStep::Details => CheckoutStep::Cart,
            CheckoutStep::Complete => CheckoutStep::Details,
        };
        self.step = prev;
        Ok(prev)
    }

    /// Check if checkout is complete.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Complete
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}
