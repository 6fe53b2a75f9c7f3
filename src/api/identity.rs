use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::api::{Client, ClientError};
use crate::auth;
use crate::clients::graphql::operations;

/// An account identifier.
///
/// DashX identifies accounts by string. Numeric identifiers are accepted and
/// stringified, so `AccountUid::from(42)` and `AccountUid::from("42")` are
/// equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountUid(String);

impl AccountUid {
    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountUid {
    fn from(uid: &str) -> Self {
        Self(uid.to_string())
    }
}

impl From<String> for AccountUid {
    fn from(uid: String) -> Self {
        Self(uid)
    }
}

macro_rules! account_uid_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AccountUid {
                fn from(uid: $ty) -> Self {
                    Self(uid.to_string())
                }
            }
        )*
    };
}

account_uid_from_integer!(i32, i64, u32, u64);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TrackEventInput<'a> {
    event: &'a str,
    account_uid: AccountUid,
    data: Map<String, Value>,
}

impl Client {
    /// Identifies a known account.
    ///
    /// `options` (name, email, phone and so on) are sent alongside `uid`; a
    /// `uid` key inside `options` takes precedence.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn identify(
        &self,
        uid: impl Into<AccountUid>,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let uid: AccountUid = uid.into();
        let mut input = Map::new();
        input.insert("uid".to_string(), Value::String(uid.0));
        input.extend(options);
        self.request_input(&operations::IDENTIFY_ACCOUNT, &input, "identifyAccount")
            .await
    }

    /// Identifies an anonymous visitor under a freshly generated UUID v4.
    ///
    /// An `anonymousUid` key inside `options` replaces the generated one.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn identify_anonymous(
        &self,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let mut input = Map::new();
        input.insert(
            "anonymousUid".to_string(),
            Value::String(Uuid::new_v4().to_string()),
        );
        input.extend(options);
        self.request_input(&operations::IDENTIFY_ACCOUNT, &input, "identifyAccount")
            .await
    }

    /// Derives an identity token for `uid` from this client's private key.
    ///
    /// `kind` defaults to `"regular"`. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::IdentityToken`] if the private key is not a
    /// 32-byte AES-256 key.
    pub fn generate_identity_token(
        &self,
        uid: impl Into<AccountUid>,
        kind: Option<&str>,
    ) -> Result<String, ClientError> {
        let uid = uid.into();
        Ok(auth::generate_identity_token(
            self.config().private_key(),
            uid.as_str(),
            kind,
        )?)
    }

    /// Records `event` for an account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn track(
        &self,
        event: &str,
        account_uid: impl Into<AccountUid>,
        data: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let input = TrackEventInput {
            event,
            account_uid: account_uid.into(),
            data,
        };
        self.request_input(&operations::TRACK_EVENT, &input, "trackEvent")
            .await
    }
}
