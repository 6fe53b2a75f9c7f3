//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated DashX public key, sent as the `X-Public-Key` header.
///
/// # Example
///
/// ```rust
/// use dashx::PublicKey;
///
/// let key = PublicKey::new("pk_live_123").unwrap();
/// assert_eq!(key.as_ref(), "pk_live_123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey(String);

impl PublicKey {
    /// Creates a new validated public key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPublicKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPublicKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for PublicKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated DashX private key.
///
/// The private key is sent as the `X-Private-Key` header and is also the
/// symmetric key used to derive identity tokens.
///
/// # Security
///
/// The `Debug` implementation masks the value, displaying only
/// `PrivateKey(*****)`.
///
/// # Example
///
/// ```rust
/// use dashx::PrivateKey;
///
/// let key = PrivateKey::new("sk_live_456").unwrap();
/// assert_eq!(format!("{:?}", key), "PrivateKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(String);

impl PrivateKey {
    /// Creates a new validated private key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPrivateKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyPrivateKey);
        }
        Ok(Self(key))
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl AsRef<str> for PrivateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(*****)")
    }
}

/// A validated target environment identifier (e.g. `production`, `staging`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetEnvironment(String);

impl TargetEnvironment {
    /// Creates a new validated target environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTargetEnvironment`] if the value is empty.
    pub fn new(environment: impl Into<String>) -> Result<Self, ConfigError> {
        let environment = environment.into();
        if environment.trim().is_empty() {
            return Err(ConfigError::EmptyTargetEnvironment);
        }
        Ok(Self(environment))
    }
}

impl AsRef<str> for TargetEnvironment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated GraphQL endpoint URI.
///
/// Only `http` and `https` schemes with a non-empty host are accepted.
///
/// # Example
///
/// ```rust
/// use dashx::BaseUri;
///
/// let uri = BaseUri::new("https://api.dashx.com/graphql").unwrap();
/// assert_eq!(uri.scheme(), "https");
/// assert_eq!(uri.host_name(), "api.dashx.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUri {
    uri: String,
    scheme_end: usize,
    host_end: usize,
}

impl BaseUri {
    /// The production DashX endpoint.
    pub const DEFAULT: &'static str = "https://api.dashx.com/graphql";

    /// Creates a new validated base URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUri`] if the URI has no `http`/`https`
    /// scheme or no host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri = uri.into().trim().to_string();

        let scheme_end = uri
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUri { uri: uri.clone() })?;

        let scheme = &uri[..scheme_end];
        if scheme != "http" && scheme != "https" {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        // Host ends at port, path, query, or end of string
        let host_start = scheme_end + 3;
        let host_end = uri[host_start..]
            .find([':', '/', '?', '#'])
            .map_or(uri.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidBaseUri { uri });
        }

        Ok(Self {
            uri,
            scheme_end,
            host_end,
        })
    }

    /// Returns the URI scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.uri[..self.scheme_end]
    }

    /// Returns the host name portion of the URI.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.uri[self.scheme_end + 3..self.host_end]
    }
}

impl Default for BaseUri {
    fn default() -> Self {
        Self {
            uri: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_end: 21,
        }
    }
}

impl AsRef<str> for BaseUri {
    fn as_ref(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_key_rejects_empty_string() {
        assert!(matches!(PublicKey::new(""), Err(ConfigError::EmptyPublicKey)));
    }

    #[test]
    fn test_private_key_masks_value_in_debug() {
        let key = PrivateKey::new("super-secret-key").unwrap();
        let debug_output = format!("{:?}", key);
        assert_eq!(debug_output, "PrivateKey(*****)");
        assert!(!debug_output.contains("super-secret-key"));
    }

    #[test]
    fn test_target_environment_rejects_blank() {
        assert!(matches!(
            TargetEnvironment::new("   "),
            Err(ConfigError::EmptyTargetEnvironment)
        ));
        assert_eq!(TargetEnvironment::new("staging").unwrap().as_ref(), "staging");
    }

    #[test]
    fn test_base_uri_default_matches_parsed_default() {
        let parsed = BaseUri::new(BaseUri::DEFAULT).unwrap();
        assert_eq!(BaseUri::default(), parsed);
        assert_eq!(parsed.host_name(), "api.dashx.com");
    }

    #[test]
    fn test_base_uri_accepts_local_endpoints() {
        let uri = BaseUri::new("http://127.0.0.1:4000/graphql").unwrap();
        assert_eq!(uri.scheme(), "http");
        assert_eq!(uri.host_name(), "127.0.0.1");
        assert_eq!(uri.as_ref(), "http://127.0.0.1:4000/graphql");
    }

    #[test]
    fn test_base_uri_rejects_invalid() {
        assert!(BaseUri::new("api.dashx.com/graphql").is_err());
        assert!(BaseUri::new("https://").is_err());
        assert!(BaseUri::new("ftp://api.dashx.com").is_err());
    }
}
