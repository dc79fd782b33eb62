//! Shipping service levels.

use serde::{Deserialize, Serialize};

use crate::localized::LocalizedString;

/// A shipping service level offered by a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingServiceLevel {
    /// Persistent uid.
    pub uid: u64,
    /// Stable service level code.
    pub code: String,
    /// Carrier name, when recorded.
    pub carrier: Option<String>,
    /// Code of the store offering the level.
    pub store_code: String,
    /// Whether the level is currently offered.
    pub active: bool,
    /// Localized shopper-facing names.
    pub display_names: LocalizedString,
}
