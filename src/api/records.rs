use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;

use crate::api::{Client, ClientError};
use crate::clients::graphql::operations;
use crate::locator::ResourceLocator;
use crate::search::{FetchRecordOptions, RecordOptionsBuilder, SearchRecordsInput, SearchRecordsOptions};

const RECORD_LOCATOR_FORM: &str = "{resource}/{recordId}";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchRecordInput<'a> {
    resource: &'a str,
    record_id: &'a str,
    #[serde(flatten)]
    options: FetchRecordOptions,
}

impl Client {
    /// Starts a lazily resolved search over the records of `resource`.
    ///
    /// Unlike [`search_content`](Self::search_content), the builder's filter
    /// is sent exactly as given.
    pub fn search_records(&self, resource: impl Into<String>) -> RecordOptionsBuilder<'_> {
        RecordOptionsBuilder::new(resource, move |input| {
            self.resolve_record_search(input).boxed()
        })
    }

    /// Searches records immediately and returns the whole collection.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn search_records_with(
        &self,
        resource: impl Into<String>,
        options: SearchRecordsOptions,
    ) -> Result<Value, ClientError> {
        let input = SearchRecordsInput {
            resource: resource.into(),
            options,
        };
        self.resolve_record_search(input).await
    }

    /// Fetches a single record by `"{resource}/{recordId}"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Locator`] without sending anything if `urn`
    /// has no `/`, or [`ClientError::Graphql`] if dispatch fails.
    pub async fn fetch_record(
        &self,
        urn: &str,
        options: FetchRecordOptions,
    ) -> Result<Value, ClientError> {
        let (resource, record_id) = ResourceLocator::parse_required(urn, RECORD_LOCATOR_FORM)?;
        let input = FetchRecordInput {
            resource,
            record_id,
            options,
        };
        self.request_input(&operations::FETCH_RECORD, &input, "fetchRecord")
            .await
    }

    async fn resolve_record_search(&self, input: SearchRecordsInput) -> Result<Value, ClientError> {
        self.request_input(&operations::SEARCH_RECORDS, &input, "searchRecords")
            .await
    }
}
