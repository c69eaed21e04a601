//! The storefront session.

use crate::cart_store::CartStore;
use crate::StorefrontError;
use flip_api::{AccountClient, CatalogClient};
use flip_commerce::account::UserProfile;
use flip_commerce::catalog::{Product, SearchQuery};
use flip_commerce::checkout::{CustomerInfo, Order};
use flip_commerce::ids::ProductId;
use flip_commerce::money::Money;
use flip_commerce::tradein::{quote, QuoteConfig, QuoteError, TradeInRequest};
use flip_store::{keys, Store};

/// One shopper's session: the loaded catalog, the persistent cart, orders,
/// and the current user.
///
/// Single-flow by design: operations run to completion between user events,
/// and the only suspension points are the awaited fetches.
pub struct Storefront {
    catalog: CatalogClient,
    accounts: AccountClient,
    store: Store,
    cart: CartStore,
    products: Vec<Product>,
    quote_config: QuoteConfig,
}

impl Storefront {
    /// Create a session against the remote API, restoring persisted state.
    pub fn new(base_url: impl Into<String>, store: Store) -> Self {
        let base_url = base_url.into();
        Self::with_clients(
            CatalogClient::new(&base_url),
            AccountClient::new(&base_url),
            store,
        )
    }

    /// Create a session with preconfigured clients (custom transports or
    /// retry policies).
    pub fn with_clients(catalog: CatalogClient, accounts: AccountClient, store: Store) -> Self {
        Self {
            catalog,
            accounts,
            cart: CartStore::load(store.clone()),
            store,
            products: Vec::new(),
            quote_config: QuoteConfig::default(),
        }
    }

    /// Override the trade-in pricing coefficients.
    pub fn with_quote_config(mut self, config: QuoteConfig) -> Self {
        self.quote_config = config;
        self
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Load the catalog from the remote API (bounded retry inside the
    /// client). On success the list replaces the session's catalog; on
    /// terminal failure the previous list is kept so a later retry starts
    /// from a rendered state.
    pub async fn load_catalog(&mut self) -> Result<&[Product], StorefrontError> {
        let products = self.catalog.fetch_all().await?;
        self.products = products;
        Ok(&self.products)
    }

    /// The loaded catalog, in server order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a loaded product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Search and sort the loaded catalog.
    pub fn search(&self, query: &SearchQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add one unit of a product to the cart.
    ///
    /// Resolves from the loaded catalog first; a product not in the list
    /// (deep link, stale page) falls back to a single-product fetch, and a
    /// failure there propagates as the could-not-add case.
    pub async fn add_to_cart(&mut self, id: ProductId) -> Result<(), StorefrontError> {
        let product = match self.product(id) {
            Some(p) => p.clone(),
            None => self.catalog.fetch_one(id).await?,
        };
        self.cart.add_product(&product, 1)
    }

    /// The persistent cart.
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// The persistent cart, mutable (remove, quantity change, clear).
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    // ------------------------------------------------------------------
    // Checkout & receipt
    // ------------------------------------------------------------------

    /// Submit checkout: snapshot the cart into an order, persist it under
    /// the last-order key, then clear the cart.
    ///
    /// Fails closed without touching storage: an empty cart or invalid
    /// customer details never create an order record.
    pub fn checkout(&mut self, customer: CustomerInfo) -> Result<Order, StorefrontError> {
        let order = Order::place(self.cart.cart(), customer)?;
        self.store.set(keys::LAST_ORDER, &order)?;
        self.cart.clear()?;
        tracing::info!(order_id = %order.id, total = %order.total, "order placed");
        Ok(order)
    }

    /// The most recently placed order, for the receipt view.
    ///
    /// Missing or corrupt state renders the defined no-recent-order state
    /// (`None`), never an error; a corrupt entry is discarded.
    pub fn last_order(&self) -> Option<Order> {
        match self.store.get::<Order>(keys::LAST_ORDER) {
            Ok(order) => order,
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt stored order");
                self.store.delete(keys::LAST_ORDER).ok();
                None
            }
        }
    }

    // ------------------------------------------------------------------
    // Trade-in
    // ------------------------------------------------------------------

    /// Quote a trade-in offer for a device at a given market price.
    pub fn trade_in_quote(
        &self,
        request: &TradeInRequest,
        market_price: Money,
    ) -> Result<Money, QuoteError> {
        quote(request, market_price, &self.quote_config)
    }

    // ------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------

    /// Register an account and persist the returned profile as the current
    /// user.
    pub async fn register(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, StorefrontError> {
        let profile = self.accounts.register(email, password).await?;
        self.store.set(keys::CURRENT_USER, &profile)?;
        Ok(profile)
    }

    /// Log in and persist the returned profile as the current user.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, StorefrontError> {
        let profile = self.accounts.login(email, password).await?;
        self.store.set(keys::CURRENT_USER, &profile)?;
        Ok(profile)
    }

    /// The logged-in user's profile, if any. Corrupt state heals to
    /// logged-out.
    pub fn current_user(&self) -> Option<UserProfile> {
        match self.store.get::<UserProfile>(keys::CURRENT_USER) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "discarding corrupt stored user profile");
                self.store.delete(keys::CURRENT_USER).ok();
                None
            }
        }
    }

    /// Log out, forgetting the stored profile.
    pub fn logout(&self) -> Result<(), StorefrontError> {
        self.store.delete(keys::CURRENT_USER)?;
        Ok(())
    }
}
