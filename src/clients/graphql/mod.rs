//! GraphQL dispatch for the DashX API.
//!
//! This module provides the [`GraphqlClient`] built on top of the
//! [`HttpClient`](crate::clients::HttpClient). It sends one request per call
//! and unwraps the response envelope:
//!
//! - `data` present: the call resolves with that value
//! - `errors` present: the call fails with [`GraphqlError::Remote`]
//!
//! The request documents live in [`operations`].
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::clients::graphql::{operations, GraphqlClient};
//! use serde_json::json;
//!
//! let client = GraphqlClient::new(&config)?;
//! let data = client
//!     .send(&operations::FETCH_ITEM, json!({ "input": { "identifier": "gold" } }))
//!     .await?;
//! println!("Item: {}", data["fetchItem"]);
//! ```

mod client;
mod errors;
pub mod operations;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use operations::Operation;
