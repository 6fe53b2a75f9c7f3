//! Configuration types for the DashX SDK.
//!
//! # Overview
//!
//! - [`DashxConfig`]: The configuration struct holding credentials and endpoint
//! - [`DashxConfigBuilder`]: A builder for constructing [`DashxConfig`] instances
//! - [`PublicKey`], [`PrivateKey`], [`TargetEnvironment`], [`BaseUri`]: validated newtypes
//!
//! # Environment Defaults
//!
//! [`DashxConfigBuilder::from_env`] seeds every field from the process
//! environment once, at construction. Explicit setters override those values.
//!
//! | Field | Variable |
//! |---|---|
//! | `base_uri` | `DASHX_BASE_URI` |
//! | `public_key` | `DASHX_PUBLIC_KEY` |
//! | `private_key` | `DASHX_PRIVATE_KEY` |
//! | `target_environment` | `DASHX_TARGET_ENVIRONMENT` |
//! | `target_installation` | `DASHX_TARGET_INSTALLATION` |
//!
//! # Example
//!
//! ```rust
//! use dashx::{DashxConfig, PrivateKey, PublicKey, TargetEnvironment};
//!
//! let config = DashxConfig::builder()
//!     .public_key(PublicKey::new("pk").unwrap())
//!     .private_key(PrivateKey::new("sk").unwrap())
//!     .target_environment(TargetEnvironment::new("staging").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://api.dashx.com/graphql");
//! ```

mod newtypes;

pub use newtypes::{BaseUri, PrivateKey, PublicKey, TargetEnvironment};

use crate::error::ConfigError;

pub const BASE_URI_ENV: &str = "DASHX_BASE_URI";
pub const PUBLIC_KEY_ENV: &str = "DASHX_PUBLIC_KEY";
pub const PRIVATE_KEY_ENV: &str = "DASHX_PRIVATE_KEY";
pub const TARGET_ENVIRONMENT_ENV: &str = "DASHX_TARGET_ENVIRONMENT";
pub const TARGET_INSTALLATION_ENV: &str = "DASHX_TARGET_INSTALLATION";

/// Configuration for the DashX SDK.
///
/// `DashxConfig` is `Clone`, `Send`, and `Sync`. It is immutable once built.
#[derive(Clone, Debug)]
pub struct DashxConfig {
    base_uri: BaseUri,
    public_key: PublicKey,
    private_key: PrivateKey,
    target_environment: TargetEnvironment,
    target_installation: Option<String>,
}

impl DashxConfig {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn builder() -> DashxConfigBuilder {
        DashxConfigBuilder::new()
    }

    /// Builds a configuration purely from `DASHX_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        DashxConfigBuilder::from_env()?.build()
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn base_uri(&self) -> &BaseUri {
        &self.base_uri
    }

    /// Returns the public key.
    #[must_use]
    pub const fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Returns the private key.
    #[must_use]
    pub const fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Returns the target environment.
    #[must_use]
    pub const fn target_environment(&self) -> &TargetEnvironment {
        &self.target_environment
    }

    /// Returns the target installation, if configured.
    #[must_use]
    pub fn target_installation(&self) -> Option<&str> {
        self.target_installation.as_deref()
    }
}

// Verify DashxConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DashxConfig>();
};

/// Builder for constructing [`DashxConfig`] instances.
///
/// Required fields are `public_key`, `private_key`, and `target_environment`.
/// `base_uri` defaults to [`BaseUri::DEFAULT`].
#[derive(Debug, Default)]
pub struct DashxConfigBuilder {
    base_uri: Option<BaseUri>,
    public_key: Option<PublicKey>,
    private_key: Option<PrivateKey>,
    target_environment: Option<TargetEnvironment>,
    target_installation: Option<String>,
}

impl DashxConfigBuilder {
    /// Creates a new builder with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from the `DASHX_*` environment variables.
    ///
    /// Unset or non-unicode variables leave the field empty. An empty
    /// `DASHX_BASE_URI` falls back to the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set but fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Creates a builder seeded from an arbitrary key-value lookup.
    ///
    /// Each `DASHX_*` name is queried exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a returned value fails validation.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            base_uri: lookup(BASE_URI_ENV)
                .filter(|v| !v.is_empty())
                .map(BaseUri::new)
                .transpose()?,
            public_key: lookup(PUBLIC_KEY_ENV).map(PublicKey::new).transpose()?,
            private_key: lookup(PRIVATE_KEY_ENV).map(PrivateKey::new).transpose()?,
            target_environment: lookup(TARGET_ENVIRONMENT_ENV)
                .map(TargetEnvironment::new)
                .transpose()?,
            target_installation: lookup(TARGET_INSTALLATION_ENV).filter(|v| !v.is_empty()),
        })
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn base_uri(mut self, uri: BaseUri) -> Self {
        self.base_uri = Some(uri);
        self
    }

    /// Sets the public key (required).
    #[must_use]
    pub fn public_key(mut self, key: PublicKey) -> Self {
        self.public_key = Some(key);
        self
    }

    /// Sets the private key (required).
    #[must_use]
    pub fn private_key(mut self, key: PrivateKey) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Sets the target environment (required).
    #[must_use]
    pub fn target_environment(mut self, environment: TargetEnvironment) -> Self {
        self.target_environment = Some(environment);
        self
    }

    /// Sets the target installation.
    #[must_use]
    pub fn target_installation(mut self, installation: impl Into<String>) -> Self {
        self.target_installation = Some(installation.into());
        self
    }

    /// Builds the [`DashxConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `public_key`,
    /// `private_key`, or `target_environment` are not set.
    pub fn build(self) -> Result<DashxConfig, ConfigError> {
        let public_key = self.public_key.ok_or(ConfigError::MissingRequiredField {
            field: "public_key",
            env_var: PUBLIC_KEY_ENV,
        })?;
        let private_key = self.private_key.ok_or(ConfigError::MissingRequiredField {
            field: "private_key",
            env_var: PRIVATE_KEY_ENV,
        })?;
        let target_environment =
            self.target_environment
                .ok_or(ConfigError::MissingRequiredField {
                    field: "target_environment",
                    env_var: TARGET_ENVIRONMENT_ENV,
                })?;

        Ok(DashxConfig {
            base_uri: self.base_uri.unwrap_or_default(),
            public_key,
            private_key,
            target_environment,
            target_installation: self.target_installation,
        })
    }
}
