//! HTTP client for DashX API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! JSON `POST` per call against the configured GraphQL endpoint.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::DashxConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Client identification string sent as the `User-Agent` header.
pub const CLIENT_IDENTIFIER: &str = concat!("dashx-rust/", env!("CARGO_PKG_VERSION"));

/// HTTP client for making requests to the DashX endpoint.
///
/// The client handles:
/// - Fixed authentication headers derived from [`DashxConfig`]
/// - JSON body serialization and parsing
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// There is no retry, timeout, or batching policy at this layer.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URI (e.g., `https://api.dashx.com/graphql`).
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl fmt::Debug for HttpClient {
    // Header values carry credentials, so only their names are shown
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header_names: Vec<&str> = self.default_headers.keys().map(String::as_str).collect();
        header_names.sort_unstable();
        f.debug_struct("HttpClient")
            .field("endpoint", &self.endpoint)
            .field("default_headers", &header_names)
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    pub fn new(config: &DashxConfig) -> Result<Self, HttpError> {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), CLIENT_IDENTIFIER.to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Public-Key".to_string(),
            config.public_key().as_ref().to_string(),
        );
        default_headers.insert(
            "X-Private-Key".to_string(),
            config.private_key().as_ref().to_string(),
        );
        default_headers.insert(
            "X-Target-Environment".to_string(),
            config.target_environment().as_ref().to_string(),
        );

        if let Some(installation) = config.target_installation() {
            default_headers.insert(
                "X-Target-Installation".to_string(),
                installation.to_string(),
            );
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint: config.base_uri().as_ref().to_string(),
            default_headers,
        })
    }

    /// Returns the endpoint URI for this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends `body` as a JSON `POST` to the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    /// - A 2xx body is not valid JSON (`InvalidJson`)
    pub async fn post_json(&self, body: &serde_json::Value) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.body(body.to_string()).send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        if !(200..=299).contains(&code) {
            let request_id = res_headers
                .get("x-request-id")
                .and_then(|values| values.first())
                .cloned();
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: body_text,
                error_reference: request_id,
            }));
        }

        let body = serde_json::from_str(&body_text)
            .map_err(|source| HttpError::InvalidJson { code, source })?;

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PrivateKey, PublicKey, TargetEnvironment};

    fn create_test_config(installation: Option<&str>) -> DashxConfig {
        let mut builder = DashxConfig::builder()
            .public_key(PublicKey::new("test-public").unwrap())
            .private_key(PrivateKey::new("test-private").unwrap())
            .target_environment(TargetEnvironment::new("staging").unwrap());
        if let Some(installation) = installation {
            builder = builder.target_installation(installation);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_client_uses_configured_endpoint() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        assert_eq!(client.endpoint(), "https://api.dashx.com/graphql");
    }

    #[test]
    fn test_auth_headers_are_injected() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let headers = client.default_headers();

        assert_eq!(headers.get("X-Public-Key"), Some(&"test-public".to_string()));
        assert_eq!(headers.get("X-Private-Key"), Some(&"test-private".to_string()));
        assert_eq!(headers.get("X-Target-Environment"), Some(&"staging".to_string()));
        assert_eq!(
            headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_installation_header_only_when_configured() {
        let without = HttpClient::new(&create_test_config(None)).unwrap();
        assert!(without.default_headers().get("X-Target-Installation").is_none());

        let with = HttpClient::new(&create_test_config(Some("inst-9"))).unwrap();
        assert_eq!(
            with.default_headers().get("X-Target-Installation"),
            Some(&"inst-9".to_string())
        );
    }

    #[test]
    fn test_user_agent_identifies_sdk() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("dashx-rust/"));
        assert!(user_agent.ends_with(SDK_VERSION));
    }

    #[test]
    fn test_debug_omits_header_values() {
        let client = HttpClient::new(&create_test_config(None)).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("X-Private-Key"));
        assert!(!debug.contains("test-private"));
    }
}
