//! GraphQL dispatcher implementation for the DashX API.

use serde::Deserialize;

use crate::clients::graphql::{GraphqlError, Operation};
use crate::clients::{HttpClient, HttpError};
use crate::config::DashxConfig;

/// GraphQL response envelope.
///
/// A `null` `data` member counts as absent.
#[derive(Debug, Default, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    errors: Option<serde_json::Value>,
}

/// GraphQL dispatcher for the DashX API.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be created.
    pub fn new(config: &DashxConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends `operation` with `variables` and unwraps the envelope.
    ///
    /// The request body is `{ "query": <document>, "variables": <variables> }`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for transport failures
    /// - [`GraphqlError::Remote`] when the envelope carries `errors`
    /// - [`GraphqlError::EmptyEnvelope`] when it carries neither member
    pub async fn send(
        &self,
        operation: &Operation,
        variables: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        let body = serde_json::json!({
            "query": operation.document,
            "variables": variables,
        });

        tracing::debug!("Dispatching DashX operation {}", operation.name);
        let response = self.http_client.post_json(&body).await?;

        Self::unwrap_envelope(operation, response.body)
    }

    fn unwrap_envelope(
        operation: &Operation,
        body: serde_json::Value,
    ) -> Result<serde_json::Value, GraphqlError> {
        let envelope: Envelope = serde_json::from_value(body).unwrap_or_default();

        if let Some(data) = envelope.data {
            return Ok(data);
        }

        match envelope.errors {
            Some(errors) => {
                tracing::warn!(
                    "DashX operation {} was rejected: {}",
                    operation.name,
                    errors
                );
                Err(GraphqlError::Remote { errors })
            }
            None => Err(GraphqlError::EmptyEnvelope),
        }
    }
}
