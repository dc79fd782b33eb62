//! Catalogs and brands.

use serde::{Deserialize, Serialize};
use vitrine_core::LocaleTag;

use crate::localized::LocalizedString;

/// A catalog: the scoping unit for categories, locales and price lists.
///
/// A master catalog owns its categories; a virtual catalog links to
/// categories of one or more masters. Locale support is configured per
/// catalog, and a storefront may fall back to any catalog an entity
/// participates in, which is why document assembly expands locales over the
/// union of all containing catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Persistent uid.
    pub uid: u64,
    /// Stable catalog code, embedded into catalog-scoped field names.
    pub code: String,
    /// Whether this is a master catalog.
    pub master: bool,
    /// The catalog's default locale.
    pub default_locale: LocaleTag,
    /// All locales this catalog supports.
    pub supported_locales: Vec<LocaleTag>,
}

/// A product brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Stable brand code.
    pub code: String,
    /// Localized brand display names.
    pub display_names: LocalizedString,
}

impl Brand {
    /// Returns the brand display name for the given locale, if present.
    pub fn display_name(&self, locale: &LocaleTag) -> Option<&str> {
        self.display_names.get(locale)
    }
}
