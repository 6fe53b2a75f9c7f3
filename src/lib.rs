//! # DashX Rust SDK
//!
//! A Rust client for the DashX GraphQL API: content management, event
//! tracking, identity, carts and checkout, assets, and stored preferences.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`DashxConfig`] and [`DashxConfigBuilder`]
//! - Validated newtypes for credentials, with masked `Debug` for secrets
//! - A [`Client`] with one async method per remote operation
//! - Lazily resolved, chainable content and record searches via
//!   [`ContentOptionsBuilder`] and [`RecordOptionsBuilder`]
//! - Shorthand filter normalization via [`normalize_filter`]
//! - Identity token derivation via [`generate_identity_token`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dashx::{DashxConfig, PrivateKey, PublicKey, TargetEnvironment};
//!
//! let config = DashxConfig::builder()
//!     .public_key(PublicKey::new("your-public-key").unwrap())
//!     .private_key(PrivateKey::new("your-private-key").unwrap())
//!     .target_environment(TargetEnvironment::new("production").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_uri().as_ref(), "https://api.dashx.com/graphql");
//! ```
//!
//! Configuration can also be read from the `DASHX_BASE_URI`,
//! `DASHX_PUBLIC_KEY`, `DASHX_PRIVATE_KEY`, `DASHX_TARGET_ENVIRONMENT`, and
//! `DASHX_TARGET_INSTALLATION` environment variables with
//! [`DashxConfig::from_env`].
//!
//! ## Searching Content
//!
//! ```rust,ignore
//! use dashx::{Client, Order};
//! use serde_json::json;
//!
//! let client = Client::from_env()?;
//!
//! let latest = client
//!     .search_content("blog")
//!     .filter(json!({ "_status": "published", "featured": true }).as_object().unwrap().clone())
//!     .order(Order::new().desc("publishedAt"))
//!     .limit(5)
//!     .all(None)
//!     .await?;
//! ```
//!
//! The builder sends nothing until `one` or `all` is awaited. Shorthand
//! filter keys prefixed with `_` become top-level filter fields; all other
//! keys are nested under `data`.
//!
//! ## Handling Errors
//!
//! ```rust,ignore
//! use dashx::ClientError;
//!
//! match client.fetch_content("blog", Default::default()).await {
//!     Err(ClientError::Locator(error)) => eprintln!("{error}"),
//!     Err(error) => eprintln!("request failed: {error}"),
//!     Ok(post) => println!("{post}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is read once and passed explicitly
//! - **Fail-fast validation**: Newtypes and locators validate before any request
//! - **Thread-safe**: [`Client`] is `Send + Sync`
//! - **One request per call**: No retries, batching, or caching

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod locator;
pub mod search;

// Re-export public types at crate root for convenience
pub use api::{
    AccountUid, AddItemToCartParams, CapturePaymentParams, CheckoutCartParams, Client,
    ClientError, CouponParams, FetchCartParams, ListAssetsOptions,
};
pub use auth::{generate_identity_token, IdentityTokenError};
pub use config::{
    BaseUri, DashxConfig, DashxConfigBuilder, PrivateKey, PublicKey, TargetEnvironment,
};
pub use error::ConfigError;
pub use locator::{LocatorError, ResourceLocator};

// Re-export search types
pub use search::{
    normalize_filter, ContentOptions, ContentOptionsBuilder, FetchContentOptions,
    FetchRecordOptions, Order, RecordOptionsBuilder, ReturnType, SearchRecordsOptions,
    SortDirection,
};

// Re-export transport types
pub use clients::{GraphqlError, HttpError, HttpResponseError};
