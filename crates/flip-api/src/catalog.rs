//! Catalog fetching with bounded retry.

use crate::retry::RetryPolicy;
use crate::transport::{HttpTransport, Request, Transport};
use crate::ApiError;
use flip_commerce::catalog::{Condition, Product, PLACEHOLDER_IMAGE};
use flip_commerce::ids::ProductId;
use flip_commerce::money::{Currency, Money};
use serde::Deserialize;
use std::sync::Arc;

/// A product as served by the remote catalog.
///
/// The wire shape is looser than the domain type; missing fields take the
/// storefront's display defaults during conversion, and the numeric id is
/// parsed into a typed [`ProductId`] exactly once, here.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub specs: Option<String>,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            id: ProductId::new(record.id),
            name: record.name,
            price: Money::from_decimal(record.price.max(0.0), Currency::USD),
            image: record
                .image
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            condition: record
                .condition
                .as_deref()
                .and_then(Condition::from_label)
                .unwrap_or_default(),
            badge: record.badge.filter(|s| !s.is_empty()),
            category: record.category.unwrap_or_else(|| "devices".to_string()),
            rating: record.rating.unwrap_or_else(|| "5.0".to_string()),
            specs: record.specs,
        }
    }
}

/// Client for the remote product catalog.
pub struct CatalogClient {
    base_url: String,
    transport: Arc<dyn Transport>,
    retry: RetryPolicy,
}

impl CatalogClient {
    /// Create a client against a base URL (e.g.
    /// `https://flipphone-backend.onrender.com/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()))
    }

    /// Create a client with a custom transport.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport,
            retry: RetryPolicy::default(),
        }
    }

    /// Override the retry policy.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Fetch the full catalog.
    ///
    /// Attempts the call up to the policy's budget, pausing the fixed
    /// backoff between attempts; retries are strictly sequential. An empty
    /// array is a valid (empty) catalog; only an exhausted budget surfaces
    /// the last error as a terminal, retryable failure.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/products", self.base_url);
        let max_attempts = self.retry.max_attempts.max(1);
        let mut last_error = ApiError::Network("no attempts made".to_string());

        for attempt in 1..=max_attempts {
            match self.try_fetch_all(&url).await {
                Ok(products) => return Ok(products),
                Err(e) => {
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "catalog fetch attempt failed"
                    );
                    last_error = e;
                }
            }
            if attempt < max_attempts {
                tokio::time::sleep(self.retry.backoff.delay()).await;
            }
        }

        Err(last_error)
    }

    async fn try_fetch_all(&self, url: &str) -> Result<Vec<Product>, ApiError> {
        let response = self.transport.execute(Request::get(url)).await?;
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                message: response.text(),
            });
        }
        let records: Vec<ProductRecord> = response.json()?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    /// Fetch a single product. One attempt, no retry; a 404 is the
    /// item-unavailable state, not a network failure.
    pub async fn fetch_one(&self, id: ProductId) -> Result<Product, ApiError> {
        let url = format!("{}/products/{}", self.base_url, id);
        let response = self.transport.execute(Request::get(&url)).await?;

        if response.status == 404 {
            return Err(ApiError::NotFound(format!("product {}", id)));
        }
        if !response.is_success() {
            return Err(ApiError::Http {
                status: response.status,
                message: response.text(),
            });
        }

        let record: ProductRecord = response.json()?;
        Ok(Product::from(record))
    }
}
