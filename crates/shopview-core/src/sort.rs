//! Sort vocabulary shared by the API query parameters and the local sort.
//!
//! The backend sorts server-side when browsing the full catalog; search
//! results are sorted locally without another round trip. Both paths use the
//! same field/order names, which are also the literal query-param values.

use std::cmp::Ordering;
use std::str::FromStr;

use thiserror::Error;

use crate::product::Product;

/// A sort key accepted by both the backend and the local sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    Price,
    Rating,
    Popularity,
}

impl SortField {
    /// Wire value for the `sort_by` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::Price => "price",
            SortField::Rating => "rating",
            SortField::Popularity => "popularity",
        }
    }
}

impl FromStr for SortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "price" => Ok(SortField::Price),
            "rating" => Ok(SortField::Rating),
            "popularity" => Ok(SortField::Popularity),
            other => Err(SortParseError::Field(other.to_string())),
        }
    }
}

/// Ascending or descending, as the `order` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Wire value for the `order` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(SortParseError::Order(other.to_string())),
        }
    }
}

/// Server-side sorting routine selector, forwarded as the `algorithm` query
/// parameter in browse mode. The local sort ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// Wire value for the `algorithm` query parameter.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            other => Err(SortParseError::Algorithm(other.to_string())),
        }
    }
}

/// Parse failure for one of the sort wire values.
#[derive(Debug, Error)]
pub enum SortParseError {
    #[error("unknown sort field \"{0}\" (expected id, name, price, rating, or popularity)")]
    Field(String),

    #[error("unknown sort order \"{0}\" (expected asc or desc)")]
    Order(String),

    #[error("unknown sort algorithm \"{0}\" (expected merge or quick)")]
    Algorithm(String),
}

/// Sorts `products` in place by `field` and `order`.
///
/// Ascending uses a stable sort: products with equal keys keep their incoming
/// order. Descending is the exact reverse of the ascending order for the same
/// field, so equal-key runs appear mirrored rather than in incoming order.
///
/// `name` compares case-insensitively. Numeric fields use natural order;
/// `f64` keys compare via `total_cmp`, so NaN ratings sort after all finite
/// values instead of poisoning the ordering.
pub fn sort_products(products: &mut [Product], field: SortField, order: SortOrder) {
    match field {
        SortField::Id => products.sort_by_key(|p| p.id),
        SortField::Popularity => products.sort_by_key(|p| p.popularity),
        SortField::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortField::Rating => products.sort_by(|a, b| a.rating.total_cmp(&b.rating)),
        SortField::Name => products.sort_by(compare_names),
    }
    if order == SortOrder::Desc {
        products.reverse();
    }
}

/// Case-insensitive name comparison over lowercased char streams, without
/// building intermediate strings.
fn compare_names(a: &Product, b: &Product) -> Ordering {
    let left = a.name.chars().flat_map(char::to_lowercase);
    let right = b.name.chars().flat_map(char::to_lowercase);
    left.cmp(right)
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;
