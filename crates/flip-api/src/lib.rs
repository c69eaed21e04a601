//! Remote API client for the FlipPhone storefront.
//!
//! Talks to the storefront's backend as a black box:
//!
//! - `GET /products` — the full catalog (with bounded retry; the hosted
//!   backend sleeps between visits and needs a moment to wake)
//! - `GET /products/{id}` — a single product, 404 when unavailable
//! - `POST /users/register`, `POST /users/login` — opaque account calls
//!
//! The HTTP layer sits behind the [`Transport`] trait so tests drive the
//! clients with scripted responses instead of a live server.
//!
//! # Example
//!
//! ```rust,ignore
//! use flip_api::CatalogClient;
//!
//! let catalog = CatalogClient::new("https://flipphone-backend.onrender.com/api");
//! let products = catalog.fetch_all().await?;
//! ```

mod catalog;
mod error;
mod retry;
mod transport;
mod users;

pub use catalog::{CatalogClient, ProductRecord};
pub use error::ApiError;
pub use retry::{Backoff, RetryPolicy};
pub use transport::{HttpTransport, Method, Request, Response, Transport};
pub use users::AccountClient;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AccountClient, ApiError, Backoff, CatalogClient, HttpTransport, RetryPolicy, Transport,
    };
}
