//! Categories and their ancestor links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_core::LocaleTag;

use crate::catalog::Catalog;
use crate::localized::LocalizedString;

/// A category within a catalog's browse hierarchy.
///
/// Ancestor traversal goes through [`crate::lookup::CategoryLookup`] rather
/// than embedded parent snapshots, so a category snapshot only carries the
/// parent's uid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Persistent uid.
    pub uid: u64,
    /// Stable category code.
    pub code: String,
    /// The catalog this category belongs to.
    pub catalog: Catalog,
    /// Parent category uid; `None` for a root category.
    pub parent_uid: Option<u64>,
    /// Whether the category itself is available (visible and in date range).
    pub available: bool,
    /// Whether this is a linked (virtual-catalog) category.
    pub linked: bool,
    /// Start of the category's visibility window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the category's visibility window.
    pub end_date: Option<DateTime<Utc>>,
    /// Localized display names.
    pub display_names: LocalizedString,
}

impl Category {
    /// Returns the display name for the given locale, if present.
    pub fn display_name(&self, locale: &LocaleTag) -> Option<&str> {
        self.display_names.get(locale)
    }

    /// Availability of this category on its own, ignoring ancestors.
    pub fn is_available(&self) -> bool {
        self.available
    }
}
