use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{Client, ClientError};
use crate::clients::graphql::operations;

/// Filtering and paging for [`Client::list_assets`].
///
/// These are sent as top-level variables, not wrapped in `input`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListAssetsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<Map<String, Value>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl Client {
    /// Fetches an uploaded asset by its UUID.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn fetch_asset(&self, id: &str) -> Result<Value, ClientError> {
        let data = self
            .request(&operations::FETCH_ASSET, serde_json::json!({ "id": id }))
            .await?;
        Ok(super::take_field(data, "asset"))
    }

    /// Lists uploaded assets.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn list_assets(&self, options: ListAssetsOptions) -> Result<Value, ClientError> {
        let variables = serde_json::to_value(&options)?;
        let data = self.request(&operations::LIST_ASSETS, variables).await?;
        Ok(super::take_field(data, "assetsList"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_serialize_as_flat_variables() {
        let options = ListAssetsOptions {
            filter: json!({ "status": { "eq": "uploaded" } }).as_object().cloned(),
            limit: Some(10),
            ..ListAssetsOptions::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "filter": { "status": { "eq": "uploaded" } }, "limit": 10 })
        );
    }
}
