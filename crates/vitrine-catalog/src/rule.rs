//! Promotion rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::localized::LocalizedString;

/// A promotion rule, scoped to either a store or a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Persistent uid.
    pub uid: u64,
    /// Stable rule code.
    pub code: String,
    /// Administrative rule name.
    pub name: String,
    /// Localized shopper-facing promotion names.
    pub display_names: LocalizedString,
    /// Store scope; `None` for catalog-scoped rules.
    pub store_code: Option<String>,
    /// Catalog scope; `None` for store-scoped rules.
    pub catalog_code: Option<String>,
    /// Start of the promotion window.
    pub start_date: Option<DateTime<Utc>>,
    /// End of the promotion window.
    pub end_date: Option<DateTime<Utc>>,
    /// Whether the rule is enabled.
    pub enabled: bool,
}
