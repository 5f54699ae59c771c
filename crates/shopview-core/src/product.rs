use serde::{Deserialize, Serialize};

/// Placeholder shown when a product carries no image URL, and used as the
/// client-side fallback when the real image fails to load.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/300x300?text=No+Image";

/// A catalog product as returned by the backend API, used unchanged as the
/// in-memory representation of the current result list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned numeric ID. The wire field is `product_id`.
    #[serde(rename = "product_id")]
    pub id: i64,
    pub name: String,
    /// Price in dollars. The backend emits a JSON float; this is a
    /// presentation-boundary `f64`, formatted to two decimals at render time.
    pub price: f64,
    /// Average rating on a 0–5 scale.
    pub rating: f64,
    /// Popularity score; higher means more purchased/viewed.
    pub popularity: i64,
    /// Image URL. `null` or absent for products without an image.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Category label, e.g. `"Laptops"`. `null` or absent means uncategorized.
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Returns the category, falling back to `"General"` for uncategorized
    /// products, matching the backend's own default.
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category.as_deref().unwrap_or("General")
    }

    /// Returns the image URL, or [`PLACEHOLDER_IMAGE_URL`] when absent.
    #[must_use]
    pub fn image_url_or_placeholder(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }

    /// Number of filled stars for display: `floor(rating)` clamped to 0–5.
    ///
    /// Out-of-range or non-finite ratings clamp rather than panic so a
    /// misbehaving backend cannot break rendering.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn star_count(&self) -> usize {
        if self.rating.is_nan() {
            return 0;
        }
        self.rating.clamp(0.0, 5.0).floor() as usize
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(id: i64, rating: f64) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            price: 19.99,
            rating,
            popularity: 100,
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn deserializes_wire_shape_with_product_id_field() {
        let json = r#"{
            "product_id": 7,
            "name": "Webcam HD",
            "price": 79.99,
            "rating": 4.3,
            "popularity": 700,
            "image_url": "https://example.com/webcam.jpg",
            "category": "Accessories"
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product JSON");
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Webcam HD");
        assert_eq!(product.category.as_deref(), Some("Accessories"));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"product_id": 1, "name": "X", "price": 1.0, "rating": 4.0, "popularity": 10}"#;
        let product: Product = serde_json::from_str(json).expect("valid product JSON");
        assert!(product.image_url.is_none());
        assert_eq!(product.category_label(), "General");
        assert_eq!(product.image_url_or_placeholder(), PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn star_count_floors_the_rating() {
        assert_eq!(make_product(1, 4.9).star_count(), 4);
        assert_eq!(make_product(1, 5.0).star_count(), 5);
        assert_eq!(make_product(1, 0.4).star_count(), 0);
    }

    #[test]
    fn star_count_clamps_out_of_range_ratings() {
        assert_eq!(make_product(1, -2.0).star_count(), 0);
        assert_eq!(make_product(1, 9.5).star_count(), 5);
        assert_eq!(make_product(1, f64::NAN).star_count(), 0);
    }

    #[test]
    fn equality_is_by_id_only() {
        let a = make_product(3, 4.0);
        let mut b = make_product(3, 1.0);
        b.name = "Different".to_string();
        assert_eq!(a, b);
        assert_ne!(a, make_product(4, 4.0));
    }
}
