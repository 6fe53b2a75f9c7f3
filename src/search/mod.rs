//! Search option builders and filter normalization.
//!
//! # Overview
//!
//! - [`ContentOptionsBuilder`]: Fluent, lazily resolved content search
//! - [`RecordOptionsBuilder`]: Fluent, lazily resolved record search for one resource
//! - [`normalize_filter`]: Shorthand → canonical filter transform
//! - [`ContentOptions`], [`SearchRecordsOptions`]: The accumulated option sets
//! - [`Order`], [`SortDirection`], [`ReturnType`]: Option value types
//!
//! Builders never talk to the network themselves. They are constructed with
//! a resolver callback (normally supplied by [`Client`](crate::Client)) and
//! only invoke it when [`one`](ContentOptionsBuilder::one) or
//! [`all`](ContentOptionsBuilder::all) is awaited.
//!
//! # Filter Normalization
//!
//! Only the content flavor normalizes filters passed to its `filter` setter.
//! The record flavor sends its filter exactly as given.

mod content;
mod filter;
mod options;
mod records;

use futures::future::BoxFuture;

use crate::api::ClientError;

pub use content::{ContentOptions, ContentOptionsBuilder, FetchContentOptions};
pub use filter::{normalize_filter, OPERATOR_PREFIX};
pub use options::{first_or_null, Order, ReturnType, SortDirection};
pub use records::{FetchRecordOptions, RecordOptionsBuilder, SearchRecordsInput, SearchRecordsOptions};

/// Future returned by a builder's resolver.
pub type ResolveFuture<'a> = BoxFuture<'a, Result<serde_json::Value, ClientError>>;
