//! Endpoint configuration
//!
//! Resolution order: environment variable, then compiled default. The CLI
//! surface carries no flags, so there is no higher-priority tier.

/// Environment variable overriding the recommendation service base URL
pub const ENV_API_URL: &str = "NEXTTRACK_API_URL";

/// Default endpoint when no override is present
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Resolved client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve configuration from the process environment
    pub fn from_env() -> Self {
        Self {
            base_url: resolve_base_url(std::env::var(ENV_API_URL).ok()),
        }
    }
}

fn resolve_base_url(env_value: Option<String>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}
