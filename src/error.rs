//! Error types for the request pipeline.
//!
//! Every failure a screen can hit maps to one of four user-facing
//! categories: validation (no network call issued), network, server
//! (non-2xx), and parse (malformed body), plus a bounded timeout. All of
//! them surface as a single visible message per screen; none are fatal.

use crate::traits::HttpError;
use thiserror::Error;

/// Errors produced by the prediction API pipeline.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Input rejected client-side before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Connection or transport failure.
    #[error("network error: {message}")]
    Network { message: String },

    /// The backend answered with a non-2xx status.
    #[error("server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("parse error: {message}")]
    Parse { message: String },

    /// The request exceeded the configured bound.
    #[error("request timed out after {duration_secs} seconds")]
    Timeout { duration_secs: u64 },
}

impl ApiError {
    /// Get a user-friendly message suitable for the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Network { .. } => {
                "Unable to reach the prediction server. Is the backend running?".to_string()
            }
            ApiError::Server { status, .. } => match *status {
                400 => "The server rejected the request. Please try again.".to_string(),
                404 => "The requested resource was not found on the server.".to_string(),
                500..=599 => {
                    "The prediction server is experiencing issues. Please try again later."
                        .to_string()
                }
                _ => format!("The server returned an error (HTTP {}).", status),
            },
            ApiError::Parse { .. } => {
                "Received an unreadable response from the server.".to_string()
            }
            ApiError::Timeout { duration_secs } => format!(
                "The server did not answer within {} seconds.",
                duration_secs
            ),
        }
    }

    /// Short code used in log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "E_VALIDATION",
            ApiError::Network { .. } => "E_NETWORK",
            ApiError::Server { .. } => "E_SERVER",
            ApiError::Parse { .. } => "E_PARSE",
            ApiError::Timeout { .. } => "E_TIMEOUT",
        }
    }
}

impl ApiError {
    /// Map a transport failure, given the configured request bound.
    ///
    /// A timeout raised inside the transport and one raised by the
    /// client's own bound both become [`ApiError::Timeout`], so the user
    /// sees the same message whichever layer trips first.
    pub fn from_transport(err: HttpError, bound: std::time::Duration) -> Self {
        match err {
            HttpError::Timeout(_) => ApiError::Timeout {
                duration_secs: bound.as_secs(),
            },
            HttpError::ConnectionFailed(msg)
            | HttpError::Io(msg)
            | HttpError::InvalidUrl(msg)
            | HttpError::Other(msg) => ApiError::Network { message: msg },
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Parse {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_user_message_passthrough() {
        let err = ApiError::Validation("Please enter some text.".to_string());
        assert_eq!(err.user_message(), "Please enter some text.");
        assert_eq!(err.error_code(), "E_VALIDATION");
    }

    #[test]
    fn test_server_user_message_by_status() {
        let err = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(err.user_message().contains("server"));

        let err = ApiError::Server {
            status: 404,
            message: String::new(),
        };
        assert!(err.user_message().contains("not found"));
    }

    #[test]
    fn test_timeout_user_message_names_duration() {
        let err = ApiError::Timeout { duration_secs: 10 };
        assert!(err.user_message().contains("10 seconds"));
        assert_eq!(err.error_code(), "E_TIMEOUT");
    }

    #[test]
    fn test_http_error_conversion() {
        let bound = std::time::Duration::from_secs(10);
        let err = ApiError::from_transport(HttpError::ConnectionFailed("refused".to_string()), bound);
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[test]
    fn test_transport_timeout_maps_to_timeout() {
        let bound = std::time::Duration::from_secs(10);
        let err = ApiError::from_transport(HttpError::Timeout("deadline".to_string()), bound);
        assert!(matches!(err, ApiError::Timeout { duration_secs: 10 }));
        assert_eq!(err.error_code(), "E_TIMEOUT");
        assert!(err.user_message().contains("10 seconds"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert!(matches!(err, ApiError::Parse { .. }));
        assert_eq!(err.error_code(), "E_PARSE");
    }

    #[test]
    fn test_display_format() {
        let err = ApiError::Server {
            status: 503,
            message: "unavailable".to_string(),
        };
        let display = format!("{}", err);
        assert!(display.contains("503"));
        assert!(display.contains("unavailable"));
    }
}
