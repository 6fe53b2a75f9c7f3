//! Authentication helpers for the DashX SDK.
//!
//! Request authentication is header based and handled by
//! [`HttpClient`](crate::clients::HttpClient). This module holds the one
//! cryptographic operation the SDK performs locally: deriving identity
//! tokens for client-side use.

pub mod identity_token;

pub use identity_token::{generate_identity_token, IdentityTokenError};
