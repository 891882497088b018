//! Client error types.

use thiserror::Error;

/// Client error type.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server returned a non-success status.
    ///
    /// `body` is the response body after normalization: parsed JSON when
    /// the body was valid JSON, the raw text otherwise, null when empty.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Normalized response body.
        body: serde_json::Value,
    },

    /// A successful response was missing an expected field.
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Check if this is an authentication error (401).
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Check if this is the premium gate (403).
    ///
    /// Gated endpoints reject free-tier accounts with a 403 regardless of
    /// the locally cached tier; callers branch on this for messaging.
    pub fn is_premium_required(&self) -> bool {
        matches!(self, Error::Api { status: 403, .. })
    }

    /// Check if this is a not-found error (404).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// Check if this is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { status, .. } if *status >= 500)
    }

    /// Server-provided `detail` message, when the error body carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => body.get("detail").and_then(|d| d.as_str()),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
