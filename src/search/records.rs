//! Record search options and their fluent builder.
//!
//! Records differ from content in two ways: the resource name is bound when
//! the builder is created, and the filter is stored exactly as given (no
//! shorthand normalization).

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::ClientError;
use crate::search::options::{first_or_null, overlay, Order};
use crate::search::ResolveFuture;

/// Options accepted by a record search.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecordsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl SearchRecordsOptions {
    /// Overlays every field set in `other` onto `self`.
    pub fn merge(&mut self, other: Self) {
        overlay(&mut self.filter, other.filter);
        overlay(&mut self.order, other.order);
        overlay(&mut self.limit, other.limit);
        overlay(&mut self.page, other.page);
        overlay(&mut self.preview, other.preview);
        overlay(&mut self.language, other.language);
        overlay(&mut self.fields, other.fields);
        overlay(&mut self.include, other.include);
        overlay(&mut self.exclude, other.exclude);
    }
}

/// The complete input of a record search: the bound resource plus options.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchRecordsInput {
    pub resource: String,
    #[serde(flatten)]
    pub options: SearchRecordsOptions,
}

/// Options accepted by a single-record fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchRecordOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<bool>,
}

type RecordResolver<'a> = Box<dyn Fn(SearchRecordsInput) -> ResolveFuture<'a> + Send + Sync + 'a>;

/// Lazily accumulates record search options for one resource.
///
/// Behaves like [`ContentOptionsBuilder`](crate::search::ContentOptionsBuilder)
/// except that no return type is sent and [`filter`](Self::filter) stores its
/// argument verbatim.
pub struct RecordOptionsBuilder<'a> {
    resource: String,
    options: SearchRecordsOptions,
    resolver: RecordResolver<'a>,
}

impl<'a> RecordOptionsBuilder<'a> {
    /// Creates a builder for `resource` that resolves through `resolver`.
    pub fn new<F>(resource: impl Into<String>, resolver: F) -> Self
    where
        F: Fn(SearchRecordsInput) -> ResolveFuture<'a> + Send + Sync + 'a,
    {
        Self {
            resource: resource.into(),
            options: SearchRecordsOptions::default(),
            resolver: Box::new(resolver),
        }
    }

    /// Returns the bound resource name.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns the options accumulated so far.
    #[must_use]
    pub const fn options(&self) -> &SearchRecordsOptions {
        &self.options
    }

    pub fn limit(&mut self, by: u32) -> &mut Self {
        self.options.limit = Some(by);
        self
    }

    pub fn page(&mut self, number: u32) -> &mut Self {
        self.options.page = Some(number);
        self
    }

    /// Sets the filter. The map is stored as given.
    pub fn filter(&mut self, by: Map<String, Value>) -> &mut Self {
        self.options.filter = Some(by);
        self
    }

    pub fn order(&mut self, by: Order) -> &mut Self {
        self.options.order = Some(by);
        self
    }

    pub fn language(&mut self, to: impl Into<String>) -> &mut Self {
        self.options.language = Some(to.into());
        self
    }

    pub fn fields<I, S>(&mut self, identifiers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.fields = Some(identifiers.into_iter().map(Into::into).collect());
        self
    }

    pub fn include<I, S>(&mut self, identifiers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.include = Some(identifiers.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(&mut self, identifiers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude = Some(identifiers.into_iter().map(Into::into).collect());
        self
    }

    pub fn preview(&mut self, value: bool) -> &mut Self {
        self.options.preview = Some(value);
        self
    }

    /// Resolves every matching record.
    ///
    /// # Errors
    ///
    /// Returns whatever the resolver returns.
    pub async fn all(
        &mut self,
        with_options: Option<SearchRecordsOptions>,
    ) -> Result<Value, ClientError> {
        let input = self.absorb(with_options);
        (self.resolver)(input).await
    }

    /// Resolves the first matching record, or `Null` when none match.
    ///
    /// # Errors
    ///
    /// Returns whatever the resolver returns.
    pub async fn one(
        &mut self,
        with_options: Option<SearchRecordsOptions>,
    ) -> Result<Value, ClientError> {
        let input = self.absorb(with_options);
        let data = (self.resolver)(input).await?;
        Ok(first_or_null(data))
    }

    fn absorb(&mut self, with_options: Option<SearchRecordsOptions>) -> SearchRecordsInput {
        if let Some(extra) = with_options {
            self.options.merge(extra);
        }
        SearchRecordsInput {
            resource: self.resource.clone(),
            options: self.options.clone(),
        }
    }
}

impl fmt::Debug for RecordOptionsBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordOptionsBuilder")
            .field("resource", &self.resource)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn recording_builder(
        response: Value,
    ) -> (RecordOptionsBuilder<'static>, Arc<Mutex<Vec<Value>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);
        let builder = RecordOptionsBuilder::new("orders", move |input| {
            recorded
                .lock()
                .unwrap()
                .push(serde_json::to_value(&input).unwrap());
            let response = response.clone();
            async move { Ok(response) }.boxed()
        });
        (builder, calls)
    }

    #[test]
    fn test_filter_is_stored_verbatim() {
        let (mut builder, calls) = recording_builder(json!([]));

        tokio_test::block_on(
            builder
                .filter(object(json!({ "_status": "open", "total": { "gt": 10 } })))
                .all(None),
        )
        .unwrap();

        assert_eq!(
            calls.lock().unwrap()[0],
            json!({
                "resource": "orders",
                "filter": { "_status": "open", "total": { "gt": 10 } }
            })
        );
    }

    #[test]
    fn test_resource_is_merged_and_no_return_type_is_sent() {
        let (mut builder, calls) = recording_builder(json!([]));

        tokio_test::block_on(builder.limit(5).one(Some(SearchRecordsOptions {
            page: Some(2),
            ..SearchRecordsOptions::default()
        })))
        .unwrap();

        let sent = &calls.lock().unwrap()[0];
        assert_eq!(sent, &json!({ "resource": "orders", "limit": 5, "page": 2 }));
        assert!(sent.get("returnType").is_none());
    }

    #[tokio::test]
    async fn test_repeated_all_keeps_prior_setters() {
        let (mut builder, calls) = recording_builder(json!([]));
        builder.order(Order::new().desc("createdAt")).preview(true);

        builder.all(None).await.unwrap();
        builder
            .all(Some(SearchRecordsOptions {
                limit: Some(20),
                ..SearchRecordsOptions::default()
            }))
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(
            calls[0],
            json!({ "resource": "orders", "order": { "createdAt": "DESC" }, "preview": true })
        );
        assert_eq!(
            calls[1],
            json!({
                "resource": "orders",
                "order": { "createdAt": "DESC" },
                "limit": 20,
                "preview": true
            })
        );
    }

    #[tokio::test]
    async fn test_one_narrows_results() {
        let (mut builder, _) = recording_builder(json!([{ "id": "r1" }]));
        assert_eq!(builder.one(None).await.unwrap(), json!({ "id": "r1" }));

        let (mut builder, _) = recording_builder(json!([]));
        assert_eq!(builder.one(None).await.unwrap(), Value::Null);

        let (mut builder, _) = recording_builder(json!({ "id": "r2" }));
        assert_eq!(builder.one(None).await.unwrap(), json!({ "id": "r2" }));
    }

    #[test]
    fn test_debug_shows_resource_and_options() {
        let (mut builder, _) = recording_builder(json!([]));
        builder.language("en").fields(["name"]);
        let debug = format!("{builder:?}");
        assert!(debug.contains("orders"));
        assert!(debug.contains("\"en\""));
        assert_eq!(builder.resource(), "orders");
    }
}
