pub mod escape;
pub mod html;
pub mod view;

pub use escape::escape_html;
pub use html::{
    render_error_banner, render_page, render_product_details, render_product_grid,
    render_recommendations, render_trending,
};
pub use view::{DetailsSection, PageView, ProductCard, ProductDetails};
