//! Product and condition types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Fallback image shown when a product record carries none.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x300?text=No+Image";

/// Cosmetic/functional grade of a refurbished device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Condition {
    /// Indistinguishable from new.
    LikeNew,
    /// Light signs of use, fully functional.
    Excellent,
    /// Visible wear, fully functional.
    Good,
    /// Professionally refurbished.
    #[default]
    Refurbished,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::LikeNew => "like-new",
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Refurbished => "refurbished",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Condition::LikeNew => "Like New",
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Refurbished => "Refurbished",
        }
    }

    /// Parse a condition label as it appears in catalog data.
    ///
    /// Returns `None` for unrecognized labels; callers fall back to
    /// [`Condition::Refurbished`], the grade every listed device at least
    /// meets.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(' ', "-").as_str() {
            "like-new" => Some(Condition::LikeNew),
            "excellent" => Some(Condition::Excellent),
            "good" => Some(Condition::Good),
            "refurbished" => Some(Condition::Refurbished),
            _ => None,
        }
    }
}

/// A product in the catalog.
///
/// The remote catalog is the source of truth; products are immutable on the
/// client within a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Listed price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Condition grade.
    pub condition: Condition,
    /// Marketing badge (e.g., "Best Seller").
    pub badge: Option<String>,
    /// Category (e.g., "phones").
    pub category: String,
    /// Display rating (e.g., "4.8").
    pub rating: String,
    /// Free-form specs text.
    pub specs: Option<String>,
}

impl Product {
    /// Create a product with display defaults for the optional fields.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image: PLACEHOLDER_IMAGE.to_string(),
            condition: Condition::default(),
            badge: None,
            category: category.into(),
            rating: "5.0".to_string(),
            specs: None,
        }
    }
}
