use serde_json::{Map, Value};

use crate::api::{Client, ClientError};
use crate::clients::graphql::operations;
use crate::locator::ResourceLocator;

/// Recipient fields that are always sent as lists inside `content`.
const RECIPIENT_FIELDS: [&str; 3] = ["to", "cc", "bcc"];

impl Client {
    /// Creates a delivery (an email, SMS, push notification and so on).
    ///
    /// `urn` is a bare content type identifier or
    /// `"{contentType}/{content}"`. Top-level `to`, `cc`, and `bcc` options
    /// are moved into `content`, where every recipient field is sent as a
    /// list. A recipient already present in `content` wins over the
    /// top-level option unless it is `null`, `false`, or `""`. Remaining
    /// options are sent alongside.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Graphql`] if dispatch fails or is rejected.
    pub async fn deliver(
        &self,
        urn: &str,
        options: Map<String, Value>,
    ) -> Result<Value, ClientError> {
        let locator = ResourceLocator::parse(urn);
        let input = delivery_input(&locator, options);
        self.request_input(&operations::CREATE_DELIVERY, &input, "createDelivery")
            .await
    }
}

fn delivery_input(locator: &ResourceLocator<'_>, options: Map<String, Value>) -> Map<String, Value> {
    let mut content = Map::new();
    let mut recipients = Map::new();
    let mut rest = Map::new();

    for (key, value) in options {
        match key.as_str() {
            "content" => {
                if let Value::Object(map) = value {
                    content = map;
                }
            }
            field if RECIPIENT_FIELDS.contains(&field) => {
                recipients.insert(key, value);
            }
            _ => {
                rest.insert(key, value);
            }
        }
    }

    for field in RECIPIENT_FIELDS {
        let inner = content.get(field).filter(|value| is_present(value)).cloned();
        let outer = recipients.remove(field).filter(is_present);
        if let Some(value) = inner.or(outer) {
            content.insert(field.to_string(), as_list(value));
        }
    }

    let mut input = Map::new();
    input.insert(
        "contentTypeIdentifier".to_string(),
        Value::String(locator.kind().to_string()),
    );
    if let Some(id) = locator.id() {
        input.insert("contentIdentifier".to_string(), Value::String(id.to_string()));
    }
    input.insert("content".to_string(), Value::Object(content));
    input.extend(rest);
    input
}

/// `null`, `false`, and `""` count as an unset recipient.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(text) => !text.is_empty(),
        _ => true,
    }
}

fn as_list(value: Value) -> Value {
    match value {
        Value::Array(_) => value,
        single => Value::Array(vec![single]),
    }
}
