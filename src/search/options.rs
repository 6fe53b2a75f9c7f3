//! Option value types shared by the content and record search flavors.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Sort direction for a single ordered field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    /// Ascending (`ASC`).
    Asc,
    /// Descending (`DESC`).
    Desc,
}

/// Ordered list of sort fields, serialized as a JSON object.
///
/// Field order is significant: the first field is the primary sort key.
///
/// # Example
///
/// ```rust
/// use dashx::search::{Order, SortDirection};
///
/// let order = Order::new().desc("publishedAt").asc("title");
/// assert_eq!(
///     serde_json::to_string(&order).unwrap(),
///     r#"{"publishedAt":"DESC","title":"ASC"}"#
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Order(Vec<(String, SortDirection)>);

impl Order {
    /// Creates an empty order.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `field` in ascending order.
    #[must_use]
    pub fn asc(self, field: impl Into<String>) -> Self {
        self.by(field, SortDirection::Asc)
    }

    /// Appends `field` in descending order.
    #[must_use]
    pub fn desc(self, field: impl Into<String>) -> Self {
        self.by(field, SortDirection::Desc)
    }

    /// Appends `field` in the given direction, replacing an earlier entry for
    /// the same field in place.
    #[must_use]
    pub fn by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        let field = field.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == field) {
            Some(entry) => entry.1 = direction,
            None => self.0.push((field, direction)),
        }
        self
    }

    /// Returns the sort fields in order.
    #[must_use]
    pub fn fields(&self) -> &[(String, SortDirection)] {
        &self.0
    }

    /// Returns `true` if no fields are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, SortDirection)> for Order {
    fn from_iter<I: IntoIterator<Item = (K, SortDirection)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |order, (field, direction)| {
                order.by(field, direction)
            })
    }
}

impl Serialize for Order {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, direction) in &self.0 {
            map.serialize_entry(field, direction)?;
        }
        map.end()
    }
}

/// How many results a content search should return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReturnType {
    /// A single result.
    One,
    /// The whole collection.
    All,
}

/// Narrows a resolved result to a single value.
///
/// An array yields its first element (or `Null` when empty); any other value
/// is returned unchanged.
#[must_use]
pub fn first_or_null(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(items) => items.into_iter().next().unwrap_or_default(),
        other => other,
    }
}

/// Replaces `target` with `value` when `value` is set.
pub(crate) fn overlay<T>(target: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *target = value;
    }
}
