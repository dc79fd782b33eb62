//! Locale tag newtype for locale-scoped index fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A locale tag such as `en`, `fr` or `fr_CA`.
///
/// The tag is embedded verbatim into locale-scoped index field names
/// (`productName_fr_CA`), so it must round-trip exactly as supplied by the
/// catalog configuration. No normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Creates a locale tag from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_core::LocaleTag;
    ///
    /// let tag = LocaleTag::new("fr_CA");
    /// assert_eq!(tag.as_str(), "fr_CA");
    /// ```
    pub fn new<S: Into<String>>(tag: S) -> Self {
        Self(tag.into())
    }

    /// Returns the locale tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LocaleTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for LocaleTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for LocaleTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
