/// Runtime configuration for the product browser client.
///
/// Loaded from environment variables by [`crate::config::load_client_config`];
/// every field has a default, so a bare environment points at the local demo
/// backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend catalog API, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    /// Whole-request timeout applied to every API call.
    pub request_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// Default log level for the tracing subscriber when `RUST_LOG` is unset.
    pub log_level: String,
    /// Number of trending products fetched for the landing view.
    pub trending_limit: u32,
    /// Maximum recommendations fetched for the details view.
    pub recommendations_limit: u32,
}
