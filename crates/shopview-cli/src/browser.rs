//! The browser controller: owns the UI state and runs user actions against
//! the catalog API, one request per action.
//!
//! Failures split into two classes. Primary actions (load, search, sort,
//! details) surface a visible error banner; the trending strip and the stats
//! counter are best-effort and only log. The product list invariant follows
//! the action: a failed search clears the list, a failed full load keeps
//! whatever was last displayed.

use shopview_api::{ApiError, CatalogClient, SortQuery};
use shopview_core::{
    sort_products, ClientConfig, Product, SortAlgorithm, SortField, SortOrder,
};
use shopview_render::{DetailsSection, PageView, ProductCard, ProductDetails};

/// Mutable UI state, replaced wholesale by each action.
#[derive(Debug, Default)]
pub(crate) struct BrowserState {
    /// Most recent successful fetch or local sort.
    pub(crate) products: Vec<Product>,
    /// True when `products` came from a query rather than the full catalog.
    /// Decides whether sorting happens locally or via a new request.
    pub(crate) search_mode: bool,
    /// Product whose details view is open, if any.
    pub(crate) selected: Option<i64>,
    /// Catalog size from the stats endpoint, when known.
    pub(crate) total_products: Option<u64>,
    /// Grid heading, e.g. `"All Products"`.
    pub(crate) section_title: String,
    /// Visible error banner from the last failed primary action.
    pub(crate) banner: Option<String>,
    /// Trending strip; `None` until a landing load requests it.
    pub(crate) trending: Option<Vec<Product>>,
    /// Open details view plus its recommendations.
    pub(crate) details: Option<(Product, Vec<Product>)>,
}

pub(crate) struct ProductBrowser {
    client: CatalogClient,
    trending_limit: u32,
    recommendations_limit: u32,
    pub(crate) state: BrowserState,
}

impl ProductBrowser {
    pub(crate) fn new(client: CatalogClient, config: &ClientConfig) -> Self {
        ProductBrowser {
            client,
            trending_limit: config.trending_limit,
            recommendations_limit: config.recommendations_limit,
            state: BrowserState {
                section_title: "All Products".to_string(),
                ..BrowserState::default()
            },
        }
    }

    /// Loads the full catalog ascending by ID and leaves search mode.
    ///
    /// On failure the previously displayed list stays untouched; only the
    /// banner changes.
    pub(crate) async fn load_all_products(&mut self) {
        self.state.banner = None;
        match self.client.list_products(SortQuery::default()).await {
            Ok(products) => {
                self.state.products = products;
                self.state.search_mode = false;
                self.state.section_title = "All Products".to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load products");
                self.state.banner = Some(banner_message(&e, "Failed to load products"));
            }
        }
    }

    /// Runs a search. An empty or whitespace query routes to the full
    /// catalog load instead of an empty-results search.
    ///
    /// On failure the list is cleared: stale results from a previous query
    /// must not sit under a new query's error banner.
    pub(crate) async fn search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.load_all_products().await;
            return;
        }

        self.state.banner = None;
        match self.client.search_products(query).await {
            Ok(products) => {
                self.state.section_title = format!("Search Results ({})", products.len());
                self.state.products = products;
                self.state.search_mode = true;
            }
            Err(e) => {
                tracing::error!(error = %e, query, "search failed");
                self.state.banner = Some(banner_message(&e, "Search failed"));
                self.state.products = Vec::new();
                self.state.search_mode = true;
                self.state.section_title = "Search Results".to_string();
            }
        }
    }

    /// Resets the query box: delegates to the full catalog load.
    pub(crate) async fn clear(&mut self) {
        self.load_all_products().await;
    }

    /// Sorts the current list. No-op when the list is empty.
    ///
    /// In search mode the in-memory list is sorted locally; `algorithm` only
    /// matters in browse mode, where the catalog is re-fetched with the sort
    /// parameters and the backend picks the routine.
    pub(crate) async fn sort(
        &mut self,
        field: SortField,
        order: SortOrder,
        algorithm: Option<SortAlgorithm>,
    ) {
        if self.state.products.is_empty() {
            return;
        }

        if self.state.search_mode {
            sort_products(&mut self.state.products, field, order);
            return;
        }

        self.state.banner = None;
        let sort = SortQuery {
            field,
            order,
            algorithm,
        };
        match self.client.list_products(sort).await {
            Ok(products) => self.state.products = products,
            Err(e) => {
                tracing::error!(error = %e, "failed to sort products");
                self.state.banner = Some(banner_message(&e, "Failed to sort products"));
            }
        }
    }

    /// Opens the details view for `id`.
    ///
    /// A missing product shows an error banner and opens nothing. Once the
    /// product is fetched, its recommendations are requested sequentially;
    /// a failure there degrades to an empty list (the view renders a
    /// placeholder), never to an error.
    pub(crate) async fn show_product_details(&mut self, id: i64) {
        self.state.banner = None;
        let product = match self.client.get_product(id).await {
            Ok(product) => product,
            Err(e @ ApiError::NotFound { .. }) => {
                tracing::warn!(id, "product not found");
                self.state.banner = Some(banner_message(&e, "Product not found"));
                self.state.details = None;
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, id, "failed to load product details");
                self.state.banner = Some(banner_message(&e, "Failed to load product details"));
                self.state.details = None;
                return;
            }
        };

        self.state.selected = Some(id);

        let recommendations = match self
            .client
            .recommendations(id, self.recommendations_limit)
            .await
        {
            Ok(recommendations) => recommendations,
            Err(e) => {
                tracing::warn!(error = %e, id, "failed to load recommendations");
                Vec::new()
            }
        };

        self.state.details = Some((product, recommendations));
    }

    /// Best-effort fetch of the trending strip for the landing view.
    pub(crate) async fn load_trending(&mut self) {
        match self.client.trending(self.trending_limit).await {
            Ok(products) => self.state.trending = Some(products),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load trending products");
                self.state.trending = Some(Vec::new());
            }
        }
    }

    /// Best-effort fetch of the catalog total.
    pub(crate) async fn load_stats(&mut self) {
        match self.client.stats().await {
            Ok(total) => self.state.total_products = Some(total),
            Err(e) => tracing::warn!(error = %e, "failed to load stats"),
        }
    }

    /// Lowers the current state to view models for rendering.
    pub(crate) fn page_view(&self) -> PageView {
        PageView {
            section_title: self.state.section_title.clone(),
            total_products: self.state.total_products,
            banner: self.state.banner.clone(),
            cards: self
                .state
                .products
                .iter()
                .map(ProductCard::from_product)
                .collect(),
            trending: self
                .state
                .trending
                .as_ref()
                .map(|t| t.iter().map(ProductCard::from_product).collect()),
            details: self.state.details.as_ref().map(|(product, recs)| {
                DetailsSection {
                    details: ProductDetails::from_product(product),
                    recommendations: recs.iter().map(ProductCard::from_product).collect(),
                }
            }),
        }
    }
}

/// Picks the banner text for a failed action: the backend's own message for
/// envelope failures and not-found, a transport-prefixed message otherwise.
fn banner_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Api { message } => message.clone(),
        ApiError::NotFound { .. } => "Product not found".to_string(),
        ApiError::Http(_) | ApiError::UnexpectedStatus { .. } => format!("Error: {error}"),
        ApiError::Deserialize { .. } | ApiError::InvalidBaseUrl { .. } => {
            format!("{fallback}: {error}")
        }
    }
}

#[cfg(test)]
#[path = "browser_test.rs"]
mod tests;
