//! Well-known storage keys.
//!
//! One canonical scheme; the `_v1` suffix leaves room to migrate the
//! serialized shape without tripping over stale entries.

/// Cart lines (`Vec<CartLine>`).
pub const CART: &str = "fpr_cart_v1";

/// Most recently placed order (`Order`).
pub const LAST_ORDER: &str = "fpr_last_order_v1";

/// Logged-in user's public profile (`UserProfile`).
pub const CURRENT_USER: &str = "fpr_current_user_v1";
