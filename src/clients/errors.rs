//! HTTP-specific error types for the DashX SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! The transport never retries, so there is no retry-exhaustion variant.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::clients::HttpError;
//!
//! match http_client.post_json(&body).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidJson { code, .. }) => println!("Non-JSON body ({code})"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the endpoint answers with a non-successful status.
///
/// `message` holds the raw response body so nothing the server said is lost.
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
    /// Reference ID for error reporting (from the `X-Request-Id` header).
    pub error_reference: Option<String>,
}

/// Unified error type for all transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx HTTP response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A successful response whose body was not valid JSON.
    #[error("Response body (HTTP {code}) is not valid JSON: {source}")]
    InvalidJson {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
