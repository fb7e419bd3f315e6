//! Application configuration.
//!
//! The prediction API base URL is a single injected value used by every
//! request; it is never hardcoded at a call site.

use std::time::Duration;

/// Default base URL for the prediction backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for the prediction API client.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use factdash::config::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_base_url("http://localhost:5000")
///     .with_timeout_secs(5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the prediction backend, without a trailing slash.
    pub base_url: String,
    /// Bound on each outstanding request before it converts to a failure.
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Duration::from_secs(secs);
        self
    }

    /// Create config from environment variables.
    ///
    /// `FACTDASH_API_URL` overrides the base URL and
    /// `FACTDASH_TIMEOUT_SECS` overrides the request timeout.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var("FACTDASH_API_URL") {
            if !url.trim().is_empty() {
                config = config.with_base_url(url.trim());
            }
        }
        if let Ok(secs) = std::env::var("FACTDASH_TIMEOUT_SECS") {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                if secs > 0 {
                    config = config.with_timeout_secs(secs);
                }
            }
        }
        config
    }

    /// Build an endpoint URL by joining a path to the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
