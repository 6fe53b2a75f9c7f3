//! Unified error type for the DashX client façade.
//!
//! Synchronous failures (configuration, malformed locators, token key
//! problems) are detected before any request is sent. Asynchronous failures
//! (transport, remote `errors`) are passed through as received.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::ClientError;
//!
//! match client.fetch_content("blog", Default::default()).await {
//!     Err(ClientError::Locator(e)) => println!("Bad locator: {e}"),
//!     Err(e) if e.remote_errors().is_some() => println!("Rejected: {e}"),
//!     Err(e) => println!("Failed: {e}"),
//!     Ok(content) => println!("{content}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::IdentityTokenError;
use crate::clients::{GraphqlError, HttpError};
use crate::error::ConfigError;
use crate::locator::LocatorError;

/// Error type for all [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration is missing or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A resource locator lacked its `/` separator.
    #[error(transparent)]
    Locator(#[from] LocatorError),

    /// Dispatch failed, either in transport or with remote `errors`.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),

    /// The HTTP client could not be created.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// An identity token could not be derived.
    #[error(transparent)]
    IdentityToken(#[from] IdentityTokenError),

    /// Request parameters could not be serialized.
    #[error("Failed to serialize request parameters: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns the remote `errors` value, if the API rejected the call.
    #[must_use]
    pub const fn remote_errors(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Graphql(error) => error.remote_errors(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locator_error_converts_transparently() {
        let error: ClientError = LocatorError {
            locator: "blog".to_string(),
            expected: "{contentType}/{content}",
        }
        .into();
        assert!(matches!(error, ClientError::Locator(_)));
        assert!(error.to_string().starts_with("Locator 'blog'"));
    }

    #[test]
    fn test_remote_errors_reachable_through_client_error() {
        let error: ClientError = GraphqlError::Remote {
            errors: json!([{ "message": "bad" }]),
        }
        .into();
        assert_eq!(error.remote_errors(), Some(&json!([{ "message": "bad" }])));
    }

    #[test]
    fn test_config_errors_have_no_remote_errors() {
        let error: ClientError = ConfigError::EmptyPublicKey.into();
        assert!(error.remote_errors().is_none());
    }

    #[test]
    fn test_client_error_implements_std_error() {
        let error: ClientError = IdentityTokenError::Encryption.into();
        let _: &dyn std::error::Error = &error;
    }
}
