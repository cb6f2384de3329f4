//! Configuration for the reservation dashboard
//!
//! The only tunable is the API base URL. It is resolved once at startup and
//! handed to views through context, never read from ambient global state.

use serde::{Deserialize, Serialize};

/// Default backend address when `RESERVAS_API_BASE` is not set at build time
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// API client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Build the configuration from the compile-time environment,
    /// falling back to [`DEFAULT_BASE_URL`]
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("RESERVAS_API_BASE").unwrap_or(DEFAULT_BASE_URL))
    }

    /// Build a configuration for an explicit base URL (trailing slashes stripped)
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a resource path, e.g. `endpoint("/reservas")`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL of the server-push event stream
    pub fn ws_url(&self) -> String {
        format!("{}/ws", self.base_url)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}
