//! Shorthand filter normalization.
//!
//! Search calls accept a flat shorthand filter. Keys starting with `_` name
//! operator fields of the canonical filter; every other key is a predicate on
//! the stored content's own data and is nested under `data`:
//!
//! ```rust
//! use dashx::search::normalize_filter;
//! use serde_json::json;
//!
//! let shorthand = json!({ "_status": "active", "title": "Hi" });
//! let canonical = normalize_filter(shorthand.as_object().unwrap());
//!
//! assert_eq!(
//!     serde_json::Value::Object(canonical),
//!     json!({ "status": "active", "data": { "title": "Hi" } })
//! );
//! ```

use serde_json::{Map, Value};

/// Marks a shorthand key as a top-level operator field.
pub const OPERATOR_PREFIX: char = '_';

/// Converts a shorthand filter into the canonical shape.
///
/// Keys are visited in the input's order. Each unprefixed key is inserted
/// *ahead of* the `data` entries accumulated so far, so `data` ends up in
/// reverse input order. An empty input yields an empty map, and `data` is
/// only created when at least one unprefixed key is present.
#[must_use]
pub fn normalize_filter(shorthand: &Map<String, Value>) -> Map<String, Value> {
    let mut canonical = Map::new();

    for (key, value) in shorthand {
        if let Some(operator) = key.strip_prefix(OPERATOR_PREFIX) {
            canonical.insert(operator.to_string(), value.clone());
            continue;
        }

        let mut data = Map::new();
        data.insert(key.clone(), value.clone());
        // `insert` on an existing key keeps its position; `remove` would not
        if let Some(Value::Object(previous)) = canonical.get_mut("data").map(Value::take) {
            for (previous_key, previous_value) in previous {
                data.insert(previous_key, previous_value);
            }
        }
        canonical.insert("data".to_string(), Value::Object(data));
    }

    canonical
}
