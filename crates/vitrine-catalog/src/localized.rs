//! Locale-keyed display strings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vitrine_core::LocaleTag;

/// A display string carried per locale.
///
/// Backed by an ordered map so that iterating the available locales is
/// deterministic across builds of the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedString(BTreeMap<LocaleTag, String>);

impl LocalizedString {
    /// Creates an empty localized string.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a locale variant, builder style.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrine_catalog::LocalizedString;
    /// use vitrine_core::LocaleTag;
    ///
    /// let name = LocalizedString::new()
    ///     .with("en", "Canoe")
    ///     .with("fr", "Canoë");
    /// assert_eq!(name.get(&LocaleTag::new("fr")), Some("Canoë"));
    /// ```
    pub fn with<L: Into<LocaleTag>, S: Into<String>>(mut self, locale: L, value: S) -> Self {
        self.insert(locale.into(), value.into());
        self
    }

    /// Inserts a locale variant.
    pub fn insert(&mut self, locale: LocaleTag, value: String) {
        self.0.insert(locale, value);
    }

    /// Returns the variant for the given locale, if present.
    pub fn get(&self, locale: &LocaleTag) -> Option<&str> {
        self.0.get(locale).map(String::as_str)
    }

    /// Iterates the locales with a variant, in stable order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleTag> {
        self.0.keys()
    }

    /// Returns `true` if no variant is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_locale() {
        let name = LocalizedString::new().with("en", "Paddle");
        assert_eq!(name.get(&LocaleTag::new("de")), None);
    }

    #[test]
    fn test_locales_are_ordered() {
        let name = LocalizedString::new()
            .with("fr", "c")
            .with("de", "b")
            .with("en", "a");
        let tags: Vec<&str> = name.locales().map(LocaleTag::as_str).collect();
        assert_eq!(tags, vec!["de", "en", "fr"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(LocalizedString::new().is_empty());
        assert!(!LocalizedString::new().with("en", "x").is_empty());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let name = LocalizedString::new().with("en", "Canoe").with("fr", "Canoë");
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, r#"{"en":"Canoe","fr":"Canoë"}"#);
        let restored: LocalizedString = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(name, restored);
    }
}
