pub mod client;
pub mod error;
pub mod types;

pub use client::{CatalogClient, SortQuery};
pub use error::ApiError;
pub use types::{ProductEnvelope, ProductsEnvelope, RecommendationsEnvelope, StatsEnvelope};
