//! Compound `"{type}/{id}"` resource locators.
//!
//! Content, records, and deliveries are addressed by a single string holding
//! the type (or resource) and, optionally, the identifier. The string is
//! split on the first `/` only, so identifiers may themselves contain `/`.
//!
//! # Example
//!
//! ```rust
//! use dashx::ResourceLocator;
//!
//! let locator = ResourceLocator::parse("blog/hello-world");
//! assert_eq!(locator.kind(), "blog");
//! assert_eq!(locator.id(), Some("hello-world"));
//!
//! let bare = ResourceLocator::parse("blog");
//! assert_eq!(bare.id(), None);
//! ```

use thiserror::Error;

/// Error returned when a locator lacks the `/` separator an operation needs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Locator '{locator}' must be of form: {expected}")]
pub struct LocatorError {
    /// The locator that was provided.
    pub locator: String,
    /// The form the operation expects, e.g. `{contentType}/{content}`.
    pub expected: &'static str,
}

/// A parsed resource locator borrowing from its source string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceLocator<'a> {
    kind: &'a str,
    id: Option<&'a str>,
}

impl<'a> ResourceLocator<'a> {
    /// Parses a locator whose identifier is optional.
    #[must_use]
    pub fn parse(locator: &'a str) -> Self {
        match locator.split_once('/') {
            Some((kind, id)) => Self { kind, id: Some(id) },
            None => Self {
                kind: locator,
                id: None,
            },
        }
    }

    /// Parses a locator that must carry an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`LocatorError`] naming `expected` if `locator` has no `/`.
    pub fn parse_required(
        locator: &'a str,
        expected: &'static str,
    ) -> Result<(&'a str, &'a str), LocatorError> {
        locator.split_once('/').ok_or_else(|| LocatorError {
            locator: locator.to_string(),
            expected,
        })
    }

    /// Returns the type or resource part.
    #[must_use]
    pub const fn kind(&self) -> &'a str {
        self.kind
    }

    /// Returns the identifier part, if present.
    #[must_use]
    pub const fn id(&self) -> Option<&'a str> {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_on_first_separator_only() {
        let locator = ResourceLocator::parse("files/2024/report.pdf");
        assert_eq!(locator.kind(), "files");
        assert_eq!(locator.id(), Some("2024/report.pdf"));
    }

    #[test]
    fn test_parse_without_separator_has_no_id() {
        let locator = ResourceLocator::parse("email");
        assert_eq!(locator.kind(), "email");
        assert_eq!(locator.id(), None);
    }

    #[test]
    fn test_parse_keeps_empty_segments() {
        let locator = ResourceLocator::parse("blog/");
        assert_eq!(locator.kind(), "blog");
        assert_eq!(locator.id(), Some(""));
    }

    #[test]
    fn test_parse_required_rejects_missing_separator() {
        let error = ResourceLocator::parse_required("blog", "{contentType}/{content}").unwrap_err();
        assert_eq!(error.locator, "blog");
        assert_eq!(
            error.to_string(),
            "Locator 'blog' must be of form: {contentType}/{content}"
        );
    }

    #[test]
    fn test_parse_required_returns_both_parts() {
        assert_eq!(
            ResourceLocator::parse_required("users/42", "{resource}/{recordId}"),
            Ok(("users", "42"))
        );
    }
}
