//! Typed view models built from [`Product`], holding raw (unescaped) text.
//!
//! Formatting decisions (price to two decimals, star strings, category and
//! image fallbacks) happen here; escaping happens later in [`crate::html`].

use shopview_core::Product;

/// One product card in the grid, trending strip, or recommendations list.
#[derive(Debug, Clone)]
pub struct ProductCard {
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Price formatted as `$X.XX`.
    pub price_label: String,
    /// Filled/hollow star string, e.g. `"★★★★☆"`.
    pub stars: String,
    /// Rating to one decimal, e.g. `"4.2"`.
    pub rating_label: String,
    pub popularity: i64,
    pub image_url: String,
}

impl ProductCard {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        ProductCard {
            id: product.id,
            name: product.name.clone(),
            category: product.category_label().to_string(),
            price_label: format!("${:.2}", product.price),
            stars: star_string(product.star_count()),
            rating_label: format!("{:.1}", product.rating),
            popularity: product.popularity,
            image_url: product.image_url_or_placeholder().to_string(),
        }
    }
}

/// The expanded details view for a selected product.
#[derive(Debug, Clone)]
pub struct ProductDetails {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price_label: String,
    pub stars: String,
    /// Rating with the scale spelled out, e.g. `"4.2 / 5.0"`.
    pub rating_label: String,
    pub popularity: i64,
    pub image_url: String,
}

impl ProductDetails {
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        ProductDetails {
            id: product.id,
            name: product.name.clone(),
            category: product.category_label().to_string(),
            price_label: format!("${:.2}", product.price),
            stars: star_string(product.star_count()),
            rating_label: format!("{:.1} / 5.0", product.rating),
            popularity: product.popularity,
            image_url: product.image_url_or_placeholder().to_string(),
        }
    }
}

/// Details view plus its (possibly empty) recommendations list.
#[derive(Debug, Clone)]
pub struct DetailsSection {
    pub details: ProductDetails,
    pub recommendations: Vec<ProductCard>,
}

/// Everything one render pass needs: the browser state lowered to view models.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    /// Grid heading, e.g. `"All Products"` or `"Search Results (3)"`.
    pub section_title: String,
    /// Total catalog size from the stats endpoint, when known.
    pub total_products: Option<u64>,
    /// Visible error banner, if the last action failed.
    pub banner: Option<String>,
    pub cards: Vec<ProductCard>,
    /// Trending strip for the landing view; `None` hides the section.
    pub trending: Option<Vec<ProductCard>>,
    /// Details view for the selected product; `None` hides the section.
    pub details: Option<DetailsSection>,
}

/// Builds the star display: `count` filled stars padded to five with hollow
/// ones. `count` above five is clamped rather than overflowing the row.
fn star_string(count: usize) -> String {
    let filled = count.min(5);
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(5 - filled));
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: 10,
            name: "Noise Cancelling Headphones".to_string(),
            price: 299.991,
            rating: 4.9,
            popularity: 1800,
            image_url: Some("https://example.com/h.jpg".to_string()),
            category: Some("Audio".to_string()),
        }
    }

    #[test]
    fn card_formats_price_to_two_decimals() {
        let card = ProductCard::from_product(&make_product());
        assert_eq!(card.price_label, "$299.99");
    }

    #[test]
    fn card_builds_star_string_from_floored_rating() {
        let card = ProductCard::from_product(&make_product());
        assert_eq!(card.stars, "★★★★☆");
        assert_eq!(card.rating_label, "4.9");
    }

    #[test]
    fn card_falls_back_for_missing_category_and_image() {
        let mut product = make_product();
        product.category = None;
        product.image_url = None;
        let card = ProductCard::from_product(&product);
        assert_eq!(card.category, "General");
        assert_eq!(card.image_url, shopview_core::PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn details_spell_out_the_rating_scale() {
        let details = ProductDetails::from_product(&make_product());
        assert_eq!(details.rating_label, "4.9 / 5.0");
    }

    #[test]
    fn star_string_clamps_above_five() {
        assert_eq!(star_string(9), "★★★★★");
        assert_eq!(star_string(0), "☆☆☆☆☆");
    }
}
