use serde::Serialize;
use serde_json::{Map, Value};

use crate::api::{AccountUid, Client, ClientError};
use crate::clients::graphql::operations;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FetchStoredPreferencesInput {
    account_uid: AccountUid,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveStoredPreferencesInput {
    account_uid: AccountUid,
    preference_data: Map<String, Value>,
}

impl Client {
    /// Fetches an account's stored notification preferences.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn fetch_stored_preferences(
        &self,
        uid: impl Into<AccountUid>,
    ) -> Result<Value, ClientError> {
        let input = FetchStoredPreferencesInput {
            account_uid: uid.into(),
        };
        self.request_input(
            &operations::FETCH_STORED_PREFERENCES,
            &input,
            "fetchStoredPreferences",
        )
        .await
    }

    /// Replaces an account's stored notification preferences.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn save_stored_preferences(
        &self,
        uid: impl Into<AccountUid>,
        preference_data: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let input = SaveStoredPreferencesInput {
            account_uid: uid.into(),
            preference_data,
        };
        self.request_input(
            &operations::SAVE_STORED_PREFERENCES,
            &input,
            "saveStoredPreferences",
        )
        .await
    }
}
