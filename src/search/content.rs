//! Content search options and their fluent builder.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::ClientError;
use crate::search::filter::normalize_filter;
use crate::search::options::{first_or_null, overlay, Order, ReturnType};
use crate::search::ResolveFuture;

/// Options accepted by a content search.
///
/// Unset fields are omitted from the request.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<ReturnType>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ContentOptions {
    /// Overlays every field set in `other` onto `self`.
    pub fn merge(&mut self, other: Self) {
        overlay(&mut self.return_type, other.return_type);
        overlay(&mut self.language, other.language);
        overlay(&mut self.include, other.include);
        overlay(&mut self.exclude, other.exclude);
        overlay(&mut self.fields, other.fields);
        overlay(&mut self.preview, other.preview);
        overlay(&mut self.filter, other.filter);
        overlay(&mut self.order, other.order);
        overlay(&mut self.limit, other.limit);
        overlay(&mut self.page, other.page);
    }
}

/// Options accepted by a single-content fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchContentOptions {
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

type ContentResolver<'a> = Box<dyn Fn(ContentOptions) -> ResolveFuture<'a> + Send + Sync + 'a>;

/// Lazily accumulates content search options until [`one`](Self::one) or
/// [`all`](Self::all) is awaited.
///
/// Setters overwrite a single field and return the same builder, so calls
/// chain. Terminal calls merge their extra options into the accumulated
/// state, keep the merged state, and hand a snapshot to the resolver. The
/// builder can be resolved any number of times.
///
/// Chained mutation needs `&mut self`; a builder has exactly one owner.
///
/// # Example
///
/// ```rust,ignore
/// use dashx::search::{ContentOptions, Order};
/// use serde_json::json;
///
/// let posts = client
///     .search_content("blog")
///     .filter(json!({ "_status": "published" }).as_object().unwrap().clone())
///     .order(Order::new().desc("publishedAt"))
///     .limit(10)
///     .all(None)
///     .await?;
/// ```
pub struct ContentOptionsBuilder<'a> {
    options: ContentOptions,
    resolver: ContentResolver<'a>,
}

impl<'a> ContentOptionsBuilder<'a> {
    /// Creates a builder with empty options that resolves through `resolver`.
    pub fn new<F>(resolver: F) -> Self
    where
        F: Fn(ContentOptions) -> ResolveFuture<'a> + Send + Sync + 'a,
    {
        Self {
            options: ContentOptions::default(),
            resolver: Box::new(resolver),
        }
    }

    /// Returns the options accumulated so far.
    #[must_use]
    pub const fn options(&self) -> &ContentOptions {
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

    /// Sets the filter from its shorthand form.
    ///
    /// The shorthand is normalized before it is stored; see
    /// [`normalize_filter`](crate::search::normalize_filter).
    pub fn filter(&mut self, by: Map<String, Value>) -> &mut Self {
        self.options.filter = Some(normalize_filter(&by));
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

    /// Resolves the whole result collection.
    ///
    /// `with_options` wins over chained values; its filter is used as given.
    ///
    /// # Errors
    ///
    /// Returns whatever the resolver returns.
    pub async fn all(&mut self, with_options: Option<ContentOptions>) -> Result<Value, ClientError> {
        self.absorb(with_options, ReturnType::All);
        (self.resolver)(self.options.clone()).await
    }

    /// Resolves a single result.
    ///
    /// An array result is narrowed to its first element, or `Null` when it is
    /// empty; any other result is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns whatever the resolver returns.
    pub async fn one(&mut self, with_options: Option<ContentOptions>) -> Result<Value, ClientError> {
        self.absorb(with_options, ReturnType::One);
        let data = (self.resolver)(self.options.clone()).await?;
        Ok(first_or_null(data))
    }

    fn absorb(&mut self, with_options: Option<ContentOptions>, return_type: ReturnType) {
        if let Some(extra) = with_options {
            self.options.merge(extra);
        }
        self.options.return_type = Some(return_type);
    }
}

impl fmt::Debug for ContentOptionsBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentOptionsBuilder")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::GraphqlError;
    use crate::search::SortDirection;
    use futures::FutureExt;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    /// Builds a builder whose resolver records every snapshot it receives.
    fn recording_builder(
        response: Value,
    ) -> (ContentOptionsBuilder<'static>, Arc<Mutex<Vec<ContentOptions>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&calls);
        let builder = ContentOptionsBuilder::new(move |options| {
            recorded.lock().unwrap().push(options);
            let response = response.clone();
            async move { Ok(response) }.boxed()
        });
        (builder, calls)
    }

    #[tokio::test]
    async fn test_chained_setters_reach_resolver_with_return_type_all() {
        let (mut builder, calls) = recording_builder(json!([]));

        builder
            .filter(object(json!({ "_status": "x" })))
            .limit(5)
            .all(Some(ContentOptions {
                page: Some(2),
                ..ContentOptions::default()
            }))
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            serde_json::to_value(&calls[0]).unwrap(),
            json!({ "returnType": "all", "filter": { "status": "x" }, "limit": 5, "page": 2 })
        );
    }

    #[tokio::test]
    async fn test_setters_overwrite_previous_values() {
        let (mut builder, calls) = recording_builder(json!([]));

        builder
            .language("en")
            .language("fr")
            .fields(["title"])
            .fields(vec!["body".to_string()])
            .preview(true)
            .preview(false)
            .all(None)
            .await
            .unwrap();

        let snapshot = &calls.lock().unwrap()[0];
        assert_eq!(snapshot.language.as_deref(), Some("fr"));
        assert_eq!(snapshot.fields, Some(vec!["body".to_string()]));
        assert_eq!(snapshot.preview, Some(false));
    }

    #[tokio::test]
    async fn test_terminal_options_override_chained_values() {
        let (mut builder, calls) = recording_builder(json!([]));

        builder
            .limit(5)
            .order(Order::new().asc("title"))
            .all(Some(ContentOptions {
                limit: Some(50),
                ..ContentOptions::default()
            }))
            .await
            .unwrap();

        let snapshot = &calls.lock().unwrap()[0];
        assert_eq!(snapshot.limit, Some(50));
        assert_eq!(
            snapshot.order.as_ref().unwrap().fields(),
            &[("title".to_string(), SortDirection::Asc)]
        );
    }

    #[tokio::test]
    async fn test_terminal_filter_is_not_normalized() {
        let (mut builder, calls) = recording_builder(json!([]));

        builder
            .all(Some(ContentOptions {
                filter: Some(object(json!({ "_status": "x" }))),
                ..ContentOptions::default()
            }))
            .await
            .unwrap();

        let snapshot = &calls.lock().unwrap()[0];
        assert_eq!(snapshot.filter, Some(object(json!({ "_status": "x" }))));
    }

    #[tokio::test]
    async fn test_builder_is_reusable_across_terminal_calls() {
        let (mut builder, calls) = recording_builder(json!([]));
        builder.limit(3);

        builder
            .all(Some(ContentOptions {
                page: Some(1),
                ..ContentOptions::default()
            }))
            .await
            .unwrap();
        builder
            .all(Some(ContentOptions {
                language: Some("de".to_string()),
                ..ContentOptions::default()
            }))
            .await
            .unwrap();

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].limit, Some(3));
        assert_eq!(calls[0].language, None);
        // merged state is kept between terminal calls
        assert_eq!(calls[1].limit, Some(3));
        assert_eq!(calls[1].page, Some(1));
        assert_eq!(calls[1].language.as_deref(), Some("de"));
        assert_eq!(builder.options().return_type, Some(ReturnType::All));
    }

    #[tokio::test]
    async fn test_one_tags_return_type_and_narrows_arrays() {
        let (mut builder, calls) = recording_builder(json!([{ "id": 1 }, { "id": 2 }]));

        let result = builder.one(None).await.unwrap();

        assert_eq!(result, json!({ "id": 1 }));
        assert_eq!(calls.lock().unwrap()[0].return_type, Some(ReturnType::One));
    }

    #[tokio::test]
    async fn test_one_on_empty_array_is_null() {
        let (mut builder, _) = recording_builder(json!([]));
        assert_eq!(builder.one(None).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_one_passes_single_values_through() {
        let (mut builder, _) = recording_builder(json!({ "id": "solo" }));
        assert_eq!(builder.one(None).await.unwrap(), json!({ "id": "solo" }));
    }

    #[tokio::test]
    async fn test_all_returns_collection_unmodified() {
        let (mut builder, _) = recording_builder(json!([{ "id": 1 }, { "id": 2 }]));
        assert_eq!(
            builder.all(None).await.unwrap(),
            json!([{ "id": 1 }, { "id": 2 }])
        );
    }

    #[tokio::test]
    async fn test_resolver_errors_propagate_unchanged() {
        let mut builder = ContentOptionsBuilder::new(|_| {
            async {
                Err(ClientError::Graphql(GraphqlError::Remote {
                    errors: json!([{ "message": "bad" }]),
                }))
            }
            .boxed()
        });

        let error = builder.one(None).await.unwrap_err();
        assert_eq!(error.remote_errors(), Some(&json!([{ "message": "bad" }])));
    }

    #[test]
    fn test_nothing_resolves_before_a_terminal_call() {
        let (mut builder, calls) = recording_builder(json!([]));
        builder.limit(1).page(2).include(["author"]).exclude(["body"]);
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(builder.options().include, Some(vec!["author".to_string()]));
    }

    #[test]
    fn test_unset_options_are_omitted_from_json() {
        assert_eq!(
            serde_json::to_value(ContentOptions::default()).unwrap(),
            json!({})
        );
    }
}
