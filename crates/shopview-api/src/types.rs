//! Catalog API response envelopes.
//!
//! ## Observed shape from the demo backend
//!
//! Every endpoint wraps its payload in a `success` boolean envelope, and the
//! envelope — not the HTTP status — is authoritative: the backend returns
//! `404`/`400` responses whose bodies are still valid JSON with
//! `"success": false` and an `"error"` message. Clients must therefore parse
//! the body before looking at the status code.
//!
//! Other observations:
//! - List endpoints include a redundant `count` field alongside the array;
//!   we deserialize it but callers use the array length.
//! - `GET /products/{id}` returns `{"success": true, "product": {...}}` on a
//!   hit and `{"success": false, "error": "Product not found"}` with a 404 on
//!   a miss; `product` is absent in the miss body, hence `Option`.
//! - `GET /stats` carries `total_products` only; more stats fields may appear
//!   later and are ignored.
//! - `#[serde(default)]` covers arrays and optional members so a terse error
//!   envelope (`{"success": false, "error": "..."}`) parses into every type.

use serde::Deserialize;

use shopview_core::Product;

/// Envelope for `GET /products` and `GET /products/search`, and for the
/// trending/category recommendation lists, which share the `products` key.
#[derive(Debug, Deserialize)]
pub struct ProductsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `GET /products/{id}`.
#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    pub success: bool,
    #[serde(default)]
    pub product: Option<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `GET /products/{id}/recommendations`, which keys the list as
/// `recommendations` rather than `products`.
#[derive(Debug, Deserialize)]
pub struct RecommendationsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub recommendations: Vec<Product>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Envelope for `GET /stats`.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope {
    pub success: bool,
    #[serde(default)]
    pub total_products: Option<u64>,
    #[serde(default)]
    pub error: Option<String>,
}
