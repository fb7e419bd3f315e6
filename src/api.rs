//! Client for the remote prediction API.
//!
//! Wraps an [`HttpClient`] implementation with the three backend
//! endpoints, the configured base URL, and a bounded per-request timeout.
//! Non-2xx statuses and unparseable bodies are mapped to [`ApiError`]
//! before they reach any screen state.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{Post, PredictionResponse, SentimentTotals};
use crate::traits::{HttpClient, HttpError, Response};

/// Client for the prediction backend.
///
/// Generic over the HTTP transport so tests can substitute a mock.
#[derive(Debug, Clone)]
pub struct ApiClient<C: HttpClient> {
    http: Arc<C>,
    config: ApiConfig,
}

impl<C: HttpClient> ApiClient<C> {
    /// Create a new client over the given transport and configuration.
    pub fn new(http: Arc<C>, config: ApiConfig) -> Self {
        Self { http, config }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Classify a piece of text via `POST /predict`.
    pub async fn predict(&self, text: &str) -> Result<PredictionResponse, ApiError> {
        let url = self.config.endpoint("predict");
        let body = serde_json::json!({ "text": text }).to_string();
        let response = self
            .bounded(self.http.post_json(&url, &body), "predict")
            .await?;
        Self::decode(response)
    }

    /// Fetch the classified post list via `GET /sentiment`.
    pub async fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>, ApiError> {
        let url = format!(
            "{}?subreddit={}",
            self.config.endpoint("sentiment"),
            urlencoding::encode(subreddit)
        );
        let response = self.bounded(self.http.get(&url), "sentiment").await?;
        Self::decode(response)
    }

    /// Fetch aggregated counts via `GET /analyze`.
    pub async fn fetch_totals(&self, subreddit: &str) -> Result<SentimentTotals, ApiError> {
        let url = format!(
            "{}?subreddit={}",
            self.config.endpoint("analyze"),
            urlencoding::encode(subreddit)
        );
        let response = self.bounded(self.http.get(&url), "analyze").await?;
        Self::decode(response)
    }

    /// Run a transport future under the configured timeout.
    async fn bounded<F>(&self, fut: F, operation: &str) -> Result<Response, ApiError>
    where
        F: std::future::Future<Output = Result<Response, HttpError>>,
    {
        let duration = self.config.request_timeout;
        match tokio::time::timeout(duration, fut).await {
            Ok(result) => {
                if let Err(ref e) = result {
                    tracing::warn!(operation, error = %e, "request failed");
                }
                result.map_err(|e| ApiError::from_transport(e, duration))
            }
            Err(_) => {
                tracing::warn!(operation, timeout_secs = duration.as_secs(), "request timed out");
                Err(ApiError::Timeout {
                    duration_secs: duration.as_secs(),
                })
            }
        }
    }

    /// Decode a 2xx response body, mapping failures to the error taxonomy.
    fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Server {
                status: response.status,
                message: response.text(),
            });
        }
        response.json().map_err(ApiError::from)
    }
}
