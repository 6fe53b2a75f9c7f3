//! Configuration error types for the DashX SDK.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! client with missing credentials fails before any request is made.
//!
//! # Example
//!
//! ```rust
//! use dashx::{ConfigError, PublicKey};
//!
//! let result = PublicKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyPublicKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`DashxConfig`](crate::DashxConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Public key cannot be empty.
    #[error("Public key cannot be empty. Please provide a valid DashX public key.")]
    EmptyPublicKey,

    /// Private key cannot be empty.
    #[error("Private key cannot be empty. Please provide a valid DashX private key.")]
    EmptyPrivateKey,

    /// Target environment cannot be empty.
    #[error("Target environment cannot be empty.")]
    EmptyTargetEnvironment,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. Set it explicitly or through the {env_var} environment variable.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
        /// The environment variable the field can be read from.
        env_var: &'static str,
    },

    /// Base URI is invalid.
    #[error("Invalid base URI '{uri}'. Expected an http(s) URL such as 'https://api.dashx.com/graphql'.")]
    InvalidBaseUri {
        /// The invalid URI that was provided.
        uri: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_public_key_error_message() {
        let message = ConfigError::EmptyPublicKey.to_string();
        assert!(message.contains("Public key cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_names_env_var() {
        let error = ConfigError::MissingRequiredField {
            field: "private_key",
            env_var: "DASHX_PRIVATE_KEY",
        };
        let message = error.to_string();
        assert!(message.contains("private_key"));
        assert!(message.contains("DASHX_PRIVATE_KEY"));
    }

    #[test]
    fn test_invalid_base_uri_error_message() {
        let error = ConfigError::InvalidBaseUri {
            uri: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyPrivateKey;
        let _: &dyn std::error::Error = &error;
    }
}
