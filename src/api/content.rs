use futures::FutureExt;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{Client, ClientError};
use crate::clients::graphql::operations;
use crate::locator::ResourceLocator;
use crate::search::{
    first_or_null, normalize_filter, ContentOptions, ContentOptionsBuilder, FetchContentOptions,
    ReturnType,
};

const CONTENT_LOCATOR_FORM: &str = "{contentType}/{content}";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentMutationInput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    content_type: &'a str,
    data: Map<String, Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchContentInput {
    content_type: String,
    #[serde(flatten)]
    options: ContentOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchContentInput<'a> {
    content: &'a str,
    content_type: &'a str,
    #[serde(flatten)]
    options: FetchContentOptions,
}

impl Client {
    /// Creates a content entry.
    ///
    /// `urn` is either a bare content type (`"blog"`) or a content type with
    /// an identifier (`"blog/hello-world"`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn add_content(
        &self,
        urn: &str,
        data: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let locator = ResourceLocator::parse(urn);
        let input = ContentMutationInput {
            content: locator.id(),
            content_type: locator.kind(),
            data,
        };
        self.request_input(&operations::ADD_CONTENT, &input, "addContent")
            .await
    }

    /// Updates a content entry. Locators are read as in
    /// [`add_content`](Self::add_content).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn edit_content(
        &self,
        urn: &str,
        data: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let locator = ResourceLocator::parse(urn);
        let input = ContentMutationInput {
            content: locator.id(),
            content_type: locator.kind(),
            data,
        };
        self.request_input(&operations::EDIT_CONTENT, &input, "editContent")
            .await
    }

    /// Starts a lazily resolved content search.
    ///
    /// Nothing is sent until [`one`](ContentOptionsBuilder::one) or
    /// [`all`](ContentOptionsBuilder::all) is awaited. Each terminal call
    /// dispatches one `SearchContent` request carrying the accumulated options
    /// and `content_type`.
    pub fn search_content(&self, content_type: impl Into<String>) -> ContentOptionsBuilder<'_> {
        let content_type = content_type.into();
        ContentOptionsBuilder::new(move |options| {
            self.resolve_content_search(content_type.clone(), options)
                .boxed()
        })
    }

    /// Searches content immediately with a complete option set.
    ///
    /// The filter is always normalized (an absent filter is sent as `{}`).
    /// The result is narrowed like [`ContentOptionsBuilder::one`] unless
    /// `options.return_type` is [`ReturnType::All`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn search_content_with(
        &self,
        content_type: impl Into<String>,
        mut options: ContentOptions,
    ) -> Result<Value, ClientError> {
        let shorthand = options.filter.take().unwrap_or_default();
        options.filter = Some(normalize_filter(&shorthand));
        let return_type = options.return_type;

        let data = self
            .resolve_content_search(content_type.into(), options)
            .await?;

        if return_type == Some(ReturnType::All) {
            Ok(data)
        } else {
            Ok(first_or_null(data))
        }
    }

    /// Fetches a single content entry by `"{contentType}/{content}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Locator`] without sending anything if `urn`
    /// has no `/`, or [`ClientError::Graphql`] if dispatch fails.
    pub async fn fetch_content(
        &self,
        urn: &str,
        options: FetchContentOptions,
    ) -> Result<Value, ClientError> {
        let (content_type, content) = ResourceLocator::parse_required(urn, CONTENT_LOCATOR_FORM)?;
        let input = FetchContentInput {
            content,
            content_type,
            options,
        };
        self.request_input(&operations::FETCH_CONTENT, &input, "fetchContent")
            .await
    }

    async fn resolve_content_search(
        &self,
        content_type: String,
        options: ContentOptions,
    ) -> Result<Value, ClientError> {
        let input = SearchContentInput {
            content_type,
            options,
        };
        self.request_input(&operations::SEARCH_CONTENT, &input, "searchContent")
            .await
    }
}
