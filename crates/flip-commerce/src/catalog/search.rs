//! In-memory catalog search and sort.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Server order (the catalog's own curation).
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Newest first (reverse insertion order).
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Newest => "Newest",
        }
    }

    /// Parse a sort selector value.
    pub fn from_value(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(SortOption::Featured),
            "price-low" => Some(SortOption::PriceAsc),
            "price-high" => Some(SortOption::PriceDesc),
            "newest" => Some(SortOption::Newest),
            _ => None,
        }
    }
}

/// A catalog search query.
///
/// Applies a free-text substring match over name, condition, and category,
/// then a sort. The catalog itself is never mutated; results borrow from it.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Free-text term (case-insensitive substring match).
    pub term: Option<String>,
    /// Sort option.
    pub sort: SortOption,
}

impl SearchQuery {
    /// Create an empty query (all products, server order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term. An empty term matches everything.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        let term = term.into();
        if !term.trim().is_empty() {
            self.term = Some(term);
        }
        self
    }

    /// Set the sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query against a loaded catalog.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut results: Vec<&Product> = match &self.term {
            Some(term) => {
                let needle = term.to_lowercase();
                products.iter().filter(|p| matches(p, &needle)).collect()
            }
            None => products.iter().collect(),
        };

        match self.sort {
            SortOption::Featured => {}
            SortOption::PriceAsc => {
                results.sort_by_key(|p| p.price.amount_cents);
            }
            SortOption::PriceDesc => {
                results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
            }
            SortOption::Newest => {
                results.reverse();
            }
        }

        results
    }
}

fn matches(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle)
        || product.condition.display_name().to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}
