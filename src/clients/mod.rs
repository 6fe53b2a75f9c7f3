//! Transport layer for DashX API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: Sends one JSON `POST` per call with the fixed DashX headers
//! - [`HttpResponse`]: A parsed response from the endpoint
//! - [`graphql::GraphqlClient`]: Wraps operations in a GraphQL body and unwraps the envelope
//! - [`graphql::GraphqlError`]: Dispatch errors, including remote `errors` pass-through
//!
//! # Headers
//!
//! Every request carries `X-Public-Key`, `X-Private-Key`,
//! `X-Target-Environment`, `X-Target-Installation` (when configured),
//! `Content-Type: application/json`, and a `dashx-rust/<version>` user agent.
//!
//! # Retry Behavior
//!
//! None. Each call issues exactly one request, and any failure is returned
//! to the caller unchanged.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, CLIENT_IDENTIFIER, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError};
