//! GraphQL-specific error types for the DashX SDK.
//!
//! Unlike a generic GraphQL transport, the DashX dispatcher treats the
//! envelope's `errors` member as a failed call: the value is surfaced to the
//! caller verbatim, without classification.
//!
//! - [`GraphqlError::Http`]: Wraps underlying transport errors
//! - [`GraphqlError::Remote`]: The envelope carried `errors` instead of `data`
//! - [`GraphqlError::EmptyEnvelope`]: The envelope carried neither
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::clients::graphql::GraphqlError;
//!
//! match client.send(&operation, variables).await {
//!     Ok(data) => println!("Data: {data}"),
//!     Err(GraphqlError::Remote { errors }) => println!("Rejected: {errors}"),
//!     Err(other) => println!("Transport failure: {other}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL dispatch.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response envelope contained `errors`, preserved exactly as received.
    #[error("DashX API returned errors: {errors}")]
    Remote {
        /// The envelope's `errors` member.
        errors: serde_json::Value,
    },

    /// The response envelope contained neither `data` nor `errors`.
    #[error("DashX API response contained neither data nor errors")]
    EmptyEnvelope,
}

impl GraphqlError {
    /// Returns the remote `errors` value, if this is a remote rejection.
    #[must_use]
    pub const fn remote_errors(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Remote { errors } => Some(errors),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;
    use serde_json::json;

    #[test]
    fn test_graphql_error_http_variant_wraps_http_error() {
        let http_error = HttpError::Response(HttpResponseError {
            code: 404,
            message: "Not Found".to_string(),
            error_reference: Some("abc-123".to_string()),
        });

        let graphql_error: GraphqlError = http_error.into();

        assert!(matches!(graphql_error, GraphqlError::Http(_)));
        assert!(graphql_error.to_string().contains("Not Found"));
    }

    #[test]
    fn test_remote_errors_are_exposed_verbatim() {
        let errors = json!([{ "message": "bad" }]);
        let error = GraphqlError::Remote {
            errors: errors.clone(),
        };

        assert_eq!(error.remote_errors(), Some(&errors));
        assert!(error.to_string().contains("bad"));
    }

    #[test]
    fn test_non_remote_variants_have_no_remote_errors() {
        assert!(GraphqlError::EmptyEnvelope.remote_errors().is_none());
    }
}
