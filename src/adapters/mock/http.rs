//! Mock HTTP client for testing.
//!
//! Provides a configurable mock client that returns predefined responses
//! or errors and records every request for verification in tests.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// The client matches responses by exact URL, falling back to a default
/// response when no specific match exists.
///
/// # Example
///
/// ```ignore
/// use factdash::adapters::mock::{MockHttpClient, MockResponse};
/// use factdash::traits::{HttpClient, Response};
/// use bytes::Bytes;
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://127.0.0.1:5000/predict",
///     MockResponse::Success(Response::new(200, Bytes::from("{}"))),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by exact URL
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a specific URL. The URL is matched exactly.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// Convenience: configure a 200 JSON response for a URL.
    pub fn set_json_response(&self, url: &str, json: &str) {
        self.set_response(
            url,
            MockResponse::Success(Response::new(200, Bytes::from(json.to_string()))),
        );
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record(&self, method: &str, url: &str, body: Option<String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            body,
        });
    }

    fn lookup(&self, url: &str) -> Result<Response, HttpError> {
        let configured = self.responses.lock().unwrap().get(url).cloned();
        let response = match configured {
            Some(r) => r,
            None => match self.default_response.lock().unwrap().clone() {
                Some(r) => r,
                None => {
                    return Err(HttpError::Other(format!(
                        "no mock response configured for {}",
                        url
                    )))
                }
            },
        };
        match response {
            MockResponse::Success(r) => Ok(r),
            MockResponse::Error(e) => Err(e),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str) -> Result<Response, HttpError> {
        self.record("GET", url, None);
        self.lookup(url)
    }

    async fn post_json(&self, url: &str, body: &str) -> Result<Response, HttpError> {
        self.record("POST", url, Some(body.to_string()));
        self.lookup(url)
    }
}
