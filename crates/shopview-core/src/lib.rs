pub mod app_config;
pub mod config;
pub mod product;
pub mod sort;

pub use app_config::ClientConfig;
pub use config::{load_client_config, load_client_config_from_env, ConfigError};
pub use product::{Product, PLACEHOLDER_IMAGE_URL};
pub use sort::{sort_products, SortAlgorithm, SortField, SortOrder, SortParseError};
