//! HTML fragment renderers.
//!
//! Each function lowers view models to markup, escaping every text field at
//! the point of interpolation. Fragments compose into a full page via
//! [`render_page`].

use shopview_core::PLACEHOLDER_IMAGE_URL;

use crate::escape::escape_html;
use crate::view::{DetailsSection, PageView, ProductCard, ProductDetails};

/// Placeholder used by the details view's larger image slot.
const DETAILS_PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/500x500?text=No+Image";

/// Renders the product grid, or an empty-state block when there is nothing
/// to show.
#[must_use]
pub fn render_product_grid(cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return concat!(
            r#"<div class="empty-state">"#,
            "<h2>No products found</h2>",
            "<p>Try adjusting your search or filters</p>",
            "</div>"
        )
        .to_string();
    }
    let mut out = String::new();
    for card in cards {
        out.push_str(&render_product_card(card));
    }
    format!(r#"<div class="products-grid">{out}</div>"#)
}

/// Renders the recommendations list for the details view; an empty list gets
/// a placeholder message rather than the grid empty-state.
#[must_use]
pub fn render_recommendations(cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return r#"<div class="empty-state"><p>No recommendations available for this product</p></div>"#
            .to_string();
    }
    render_product_grid(cards)
}

/// Renders the trending strip; an empty list gets its own placeholder.
#[must_use]
pub fn render_trending(cards: &[ProductCard]) -> String {
    if cards.is_empty() {
        return "<p>No trending products available</p>".to_string();
    }
    render_product_grid(cards)
}

/// Renders the visible error banner.
#[must_use]
pub fn render_error_banner(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape_html(message))
}

/// Renders one product card.
fn render_product_card(card: &ProductCard) -> String {
    format!(
        concat!(
            r#"<div class="product-card" data-product-id="{id}">"#,
            r#"<div class="product-image-container">"#,
            r#"<img src="{image}" alt="{name}" class="product-image" "#,
            r#"onerror="this.src='{placeholder}'">"#,
            "</div>",
            r#"<div class="product-info">"#,
            r#"<div class="product-id">ID: {id}</div>"#,
            r#"<div class="product-category">{category}</div>"#,
            r#"<div class="product-name">{name}</div>"#,
            r#"<div class="product-details">"#,
            r#"<div class="product-price">{price}</div>"#,
            r#"<div class="product-rating"><span class="stars">{stars}</span> <span>{rating}</span></div>"#,
            r#"<div class="product-popularity">Popularity: {popularity}</div>"#,
            "</div></div></div>"
        ),
        id = card.id,
        image = escape_html(&card.image_url),
        name = escape_html(&card.name),
        placeholder = PLACEHOLDER_IMAGE_URL,
        category = escape_html(&card.category),
        price = escape_html(&card.price_label),
        stars = card.stars,
        rating = escape_html(&card.rating_label),
        popularity = card.popularity,
    )
}

/// Renders the details view plus its recommendations section.
#[must_use]
pub fn render_product_details(section: &DetailsSection) -> String {
    let details = render_details_header(&section.details);
    let recommendations = render_recommendations(&section.recommendations);
    format!(
        concat!(
            r#"<div class="product-details-container">{details}"#,
            r#"<div class="product-details-recommendations">"#,
            "<h2>You may also like</h2>{recommendations}</div></div>"
        ),
        details = details,
        recommendations = recommendations,
    )
}

fn render_details_header(details: &ProductDetails) -> String {
    format!(
        concat!(
            r#"<div class="product-details-header">"#,
            r#"<div><img src="{image}" alt="{name}" class="product-details-image" "#,
            r#"onerror="this.src='{placeholder}'"></div>"#,
            r#"<div class="product-details-info">"#,
            r#"<div class="product-details-category">{category}</div>"#,
            "<h1>{name}</h1>",
            r#"<div class="product-details-price">{price}</div>"#,
            r#"<div class="product-details-rating"><span class="stars">{stars}</span> <span>{rating}</span></div>"#,
            r#"<div class="product-details-popularity"><strong>Popularity Score:</strong> {popularity}</div>"#,
            r#"<div class="product-details-id">Product ID: {id}</div>"#,
            "</div></div>"
        ),
        image = escape_html(&details.image_url),
        name = escape_html(&details.name),
        placeholder = DETAILS_PLACEHOLDER_IMAGE_URL,
        category = escape_html(&details.category),
        price = escape_html(&details.price_label),
        stars = details.stars,
        rating = escape_html(&details.rating_label),
        popularity = details.popularity,
        id = details.id,
    )
}

/// Assembles the full page: header with catalog stats, optional error banner,
/// optional trending strip, the grid under its section title, and the
/// optional details view.
#[must_use]
pub fn render_page(page: &PageView) -> String {
    let mut body = String::new();

    let total = page
        .total_products
        .map_or_else(String::new, |n| format!(" — {n} products in catalog"));
    body.push_str(&format!(
        "<header><h1>Product Browser</h1><p>Showing {count} result{plural}{total}</p></header>",
        count = page.cards.len(),
        plural = if page.cards.len() == 1 { "" } else { "s" },
        total = total,
    ));

    if let Some(message) = &page.banner {
        body.push_str(&render_error_banner(message));
    }

    if let Some(trending) = &page.trending {
        body.push_str(&format!(
            r#"<section class="trending"><h2>Trending Now</h2>{}</section>"#,
            render_trending(trending)
        ));
    }

    body.push_str(&format!(
        r#"<section class="products"><h2>{}</h2>{}</section>"#,
        escape_html(&page.section_title),
        render_product_grid(&page.cards)
    ));

    if let Some(details) = &page.details {
        body.push_str(&format!(
            r#"<section class="details">{}</section>"#,
            render_product_details(details)
        ));
    }

    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>Product Browser</title></head>",
            "<body>{body}</body></html>\n"
        ),
        body = body,
    )
}

#[cfg(test)]
#[path = "html_test.rs"]
mod tests;
