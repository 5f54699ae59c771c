//! HTTP client for the catalog backend API.
//!
//! Wraps `reqwest` with typed envelope deserialization. Every endpoint checks
//! the `"success"` field in the JSON envelope and surfaces API-level failures
//! as [`ApiError::Api`] (or [`ApiError::NotFound`] for product lookups),
//! regardless of the HTTP status code.

use std::time::Duration;

use reqwest::{Client, Url};

use shopview_core::{ClientConfig, Product, SortAlgorithm, SortField, SortOrder};

use crate::error::ApiError;
use crate::types::{ProductEnvelope, ProductsEnvelope, RecommendationsEnvelope, StatsEnvelope};

/// Sort parameters forwarded to the backend in browse mode.
#[derive(Debug, Clone, Copy)]
pub struct SortQuery {
    pub field: SortField,
    pub order: SortOrder,
    /// Which server-side sorting routine to use; `None` lets the backend pick
    /// its default (merge).
    pub algorithm: Option<SortAlgorithm>,
}

impl Default for SortQuery {
    /// The landing-view ordering: ascending by ID.
    fn default() -> Self {
        SortQuery {
            field: SortField::Id,
            order: SortOrder::Asc,
            algorithm: None,
        }
    }
}

/// Client for the catalog backend API.
///
/// Manages the HTTP client and base URL. Use [`CatalogClient::new`] with the
/// loaded [`ClientConfig`] for production, or [`CatalogClient::with_base_url`]
/// to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the configured base URL does
    /// not parse, or [`ApiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` does not parse or
    /// cannot serve as a base for endpoint paths, or [`ApiError::Http`] if
    /// the underlying `reqwest::Client` cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Fetches the full catalog, ordered server-side by `sort`.
    ///
    /// `SortQuery::default()` gives the landing-view ordering (ascending ID).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Api`] if the envelope reports failure.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] / [`ApiError::UnexpectedStatus`] if the
    ///   response is not the expected envelope.
    pub async fn list_products(&self, sort: SortQuery) -> Result<Vec<Product>, ApiError> {
        let mut params = vec![
            ("sort_by", sort.field.as_str()),
            ("order", sort.order.as_str()),
        ];
        if let Some(algorithm) = sort.algorithm {
            params.push(("algorithm", algorithm.as_str()));
        }
        let url = self.endpoint_url(&["products"], &params)?;
        let envelope: ProductsEnvelope = self.get_envelope(url, "list products").await?;
        Self::check_success(envelope.success, envelope.error, "Failed to load products")?;
        Ok(envelope.products)
    }

    /// Searches the catalog by name or ID.
    ///
    /// The query is sent verbatim (percent-encoded) in the `q` parameter; the
    /// backend decides whether to treat it as an ID or a name prefix.
    ///
    /// # Errors
    ///
    /// [`ApiError::Api`] carries the backend's `error` message when the
    /// envelope reports failure (e.g. a blank query), plus the transport and
    /// shape errors shared by every endpoint.
    pub async fn search_products(&self, query: &str) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint_url(&["products", "search"], &[("q", query)])?;
        let envelope: ProductsEnvelope = self
            .get_envelope(url, &format!("search(q={query})"))
            .await?;
        Self::check_success(envelope.success, envelope.error, "Search failed")?;
        Ok(envelope.products)
    }

    /// Fetches a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the envelope reports failure or
    /// carries no product — the backend's 404 body — plus the transport and
    /// shape errors shared by every endpoint.
    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.endpoint_url(&["products", &id.to_string()], &[])?;
        let envelope: ProductEnvelope = self
            .get_envelope(url, &format!("get product {id}"))
            .await?;
        if !envelope.success {
            return Err(ApiError::NotFound { id });
        }
        envelope.product.ok_or(ApiError::NotFound { id })
    }

    /// Fetches recommendations for a product, capped at `limit`.
    ///
    /// The cap is enforced client-side as well, so a backend that ignores the
    /// `limit` parameter cannot overflow the details view.
    ///
    /// # Errors
    ///
    /// Same classes as [`CatalogClient::list_products`].
    pub async fn recommendations(&self, id: i64, limit: u32) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint_url(
            &["products", &id.to_string(), "recommendations"],
            &[("limit", &limit.to_string())],
        )?;
        let envelope: RecommendationsEnvelope = self
            .get_envelope(url, &format!("recommendations for product {id}"))
            .await?;
        Self::check_success(
            envelope.success,
            envelope.error,
            "Failed to load recommendations",
        )?;
        let mut recommendations = envelope.recommendations;
        recommendations.truncate(limit as usize);
        Ok(recommendations)
    }

    /// Fetches recommended products for a category, capped at `limit`.
    ///
    /// # Errors
    ///
    /// Same classes as [`CatalogClient::list_products`].
    pub async fn category_recommendations(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint_url(
            &["recommendations", "category", category],
            &[("limit", &limit.to_string())],
        )?;
        let envelope: ProductsEnvelope = self
            .get_envelope(url, &format!("category recommendations ({category})"))
            .await?;
        Self::check_success(
            envelope.success,
            envelope.error,
            "Failed to load category recommendations",
        )?;
        let mut products = envelope.products;
        products.truncate(limit as usize);
        Ok(products)
    }

    /// Fetches the trending product list for the landing view.
    ///
    /// # Errors
    ///
    /// Same classes as [`CatalogClient::list_products`]; callers treat all of
    /// them as best-effort.
    pub async fn trending(&self, limit: u32) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint_url(
            &["recommendations", "trending"],
            &[("limit", &limit.to_string())],
        )?;
        let envelope: ProductsEnvelope = self.get_envelope(url, "trending products").await?;
        Self::check_success(
            envelope.success,
            envelope.error,
            "Failed to load trending products",
        )?;
        let mut products = envelope.products;
        products.truncate(limit as usize);
        Ok(products)
    }

    /// Fetches the total product count.
    ///
    /// # Errors
    ///
    /// Same classes as [`CatalogClient::list_products`], plus [`ApiError::Api`]
    /// when a successful envelope is missing `total_products`.
    pub async fn stats(&self) -> Result<u64, ApiError> {
        let url = self.endpoint_url(&["stats"], &[])?;
        let envelope: StatsEnvelope = self.get_envelope(url, "stats").await?;
        Self::check_success(envelope.success, envelope.error, "Failed to load stats")?;
        envelope.total_products.ok_or_else(|| ApiError::Api {
            message: "stats envelope is missing total_products".to_string(),
        })
    }

    /// Builds an endpoint URL by appending path `segments` and query `params`
    /// to the base URL.
    ///
    /// Segments and parameter values are percent-encoded by `reqwest::Url`,
    /// so raw user input (search queries, category names) cannot inject path
    /// or query structure.
    fn endpoint_url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "cannot be a base URL".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Sends a GET request and parses the body as the expected envelope.
    ///
    /// The body is parsed regardless of HTTP status: the backend encodes
    /// failures in the envelope and may pair them with 4xx statuses. Only
    /// when the body is not the envelope does the status decide the error —
    /// non-2xx becomes [`ApiError::UnexpectedStatus`], 2xx becomes
    /// [`ApiError::Deserialize`].
    async fn get_envelope<T>(&self, url: Url, context: &str) -> Result<T, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<T>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(ApiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            }),
            Err(e) => Err(ApiError::Deserialize {
                context: context.to_string(),
                source: e,
            }),
        }
    }

    /// Maps an envelope-level failure to [`ApiError::Api`], preferring the
    /// backend's own `error` message over the `fallback`.
    fn check_success(
        success: bool,
        error: Option<String>,
        fallback: &str,
    ) -> Result<(), ApiError> {
        if success {
            Ok(())
        } else {
            Err(ApiError::Api {
                message: error.unwrap_or_else(|| fallback.to_string()),
            })
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
