//! The DashX client façade.
//!
//! [`Client`] exposes one method per remote operation. Each method shapes a
//! camelCase parameter object, wraps it as `{ "input": params }`, dispatches
//! it through a [`GraphqlClient`], and unwraps the single field of `data`
//! that the operation names.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::{Client, DashxConfig};
//! use serde_json::{json, Map};
//!
//! let client = Client::new(DashxConfig::from_env()?)?;
//!
//! client.identify("42", Map::new()).await?;
//! client.track("Signed Up", "42", json!({ "plan": "pro" }).as_object().unwrap().clone()).await?;
//!
//! let posts = client
//!     .search_content("blog")
//!     .limit(10)
//!     .all(None)
//!     .await?;
//! ```

mod assets;
mod commerce;
mod content;
mod delivery;
mod errors;
mod identity;
mod preferences;
mod records;

use serde::Serialize;
use serde_json::Value;

use crate::clients::graphql::Operation;
use crate::clients::GraphqlClient;
use crate::config::DashxConfig;

pub use assets::ListAssetsOptions;
pub use commerce::{
    AddItemToCartParams, CapturePaymentParams, CheckoutCartParams, CouponParams, FetchCartParams,
};
pub use errors::ClientError;
pub use identity::AccountUid;

/// Client for the DashX GraphQL API.
///
/// A `Client` owns its configuration and an HTTP connection pool. It holds
/// no mutable state, so one instance can serve concurrent calls.
#[derive(Debug)]
pub struct Client {
    config: DashxConfig,
    graphql: GraphqlClient,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: DashxConfig) -> Result<Self, ClientError> {
        let graphql = GraphqlClient::new(&config)?;
        tracing::debug!(
            "Created DashX client for {} ({})",
            config.base_uri().as_ref(),
            config.target_environment().as_ref()
        );
        Ok(Self { config, graphql })
    }

    /// Creates a client configured from the `DASHX_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] when a required variable is missing or
    /// invalid.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(DashxConfig::from_env()?)
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &DashxConfig {
        &self.config
    }

    /// Dispatches `operation` with raw `variables` and returns `data`.
    async fn request(&self, operation: &Operation, variables: Value) -> Result<Value, ClientError> {
        Ok(self.graphql.send(operation, variables).await?)
    }

    /// Dispatches `operation` with `params` wrapped as `input`, then unwraps
    /// `field` from `data`.
    async fn request_input<P>(
        &self,
        operation: &Operation,
        params: &P,
        field: &str,
    ) -> Result<Value, ClientError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let variables = serde_json::json!({ "input": serde_json::to_value(params)? });
        let data = self.request(operation, variables).await?;
        Ok(take_field(data, field))
    }
}

/// Moves `field` out of `data`, yielding `Null` when it is absent.
fn take_field(mut data: Value, field: &str) -> Value {
    data.get_mut(field).map(Value::take).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrivateKey, PublicKey, TargetEnvironment};
    use serde_json::json;

    fn test_config() -> DashxConfig {
        DashxConfig::builder()
            .public_key(PublicKey::new("public").unwrap())
            .private_key(PrivateKey::new("private").unwrap())
            .target_environment(TargetEnvironment::new("test").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_take_field_moves_named_member() {
        let data = json!({ "fetchItem": { "id": "i1" }, "other": 1 });
        assert_eq!(take_field(data, "fetchItem"), json!({ "id": "i1" }));
    }

    #[test]
    fn test_take_field_missing_member_is_null() {
        assert_eq!(take_field(json!({}), "fetchItem"), Value::Null);
        assert_eq!(take_field(json!("scalar"), "fetchItem"), Value::Null);
    }

    #[test]
    fn test_client_keeps_its_config() {
        let client = Client::new(test_config()).unwrap();
        assert_eq!(client.config().target_environment().as_ref(), "test");
    }

    #[test]
    fn test_client_debug_does_not_leak_private_key() {
        let client = Client::new(test_config()).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("\"private\""));
    }
}
