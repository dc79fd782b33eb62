//! Product SKUs and SKU options.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitrine_core::LocaleTag;

use crate::attribute::AttributeBinding;
use crate::localized::LocalizedString;

/// A selected value of a SKU option (e.g. colour = "red").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuOptionValue {
    /// The owning option's key, embedded into SKU option field names.
    pub option_key: String,
    /// Localized display names of the value.
    pub display_names: LocalizedString,
}

impl SkuOptionValue {
    /// Returns the value's display name for the given locale, if present.
    pub fn display_name(&self, locale: &LocaleTag) -> Option<&str> {
        self.display_names.get(locale)
    }
}

/// A concrete, orderable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSku {
    /// Persistent uid.
    pub uid: u64,
    /// Stable SKU code.
    pub code: String,
    /// Effective start of the SKU's availability window.
    pub start_date: Option<DateTime<Utc>>,
    /// Effective end of the SKU's availability window.
    pub end_date: Option<DateTime<Utc>>,
    /// Localized SKU configuration display names ("Red, Large").
    pub display_names: LocalizedString,
    /// SKU-level attribute values.
    pub attributes: Vec<AttributeBinding>,
    /// Selected option values that make up this SKU's configuration.
    pub option_values: Vec<SkuOptionValue>,
}

impl ProductSku {
    /// Returns the SKU configuration display name for the given locale.
    pub fn display_name(&self, locale: &LocaleTag) -> Option<&str> {
        self.display_names.get(locale)
    }
}
