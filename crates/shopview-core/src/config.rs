use thiserror::Error;

use crate::app_config::ClientConfig;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load client configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_client_config() -> Result<ClientConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_client_config_from_env()
}

/// Load client configuration from environment variables already in the process.
///
/// Unlike [`load_client_config`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set env var fails to parse.
pub fn load_client_config_from_env() -> Result<ClientConfig, ConfigError> {
    build_client_config(|key| std::env::var(key))
}

/// Build client configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_client_config<F>(lookup: F) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = or_default("SHOPVIEW_API_BASE_URL", "http://localhost:5000/api");
    let request_timeout_secs = parse_u64("SHOPVIEW_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SHOPVIEW_USER_AGENT", "shopview/0.1 (product-browser)");
    let log_level = or_default("SHOPVIEW_LOG_LEVEL", "info");
    let trending_limit = parse_u32("SHOPVIEW_TRENDING_LIMIT", "5")?;
    let recommendations_limit = parse_u32("SHOPVIEW_RECOMMENDATIONS_LIMIT", "12")?;

    Ok(ClientConfig {
        api_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
        trending_limit,
        recommendations_limit,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
