//! Stores.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// A storefront, tied to exactly one catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    /// Persistent uid.
    pub uid: u64,
    /// Stable store code, embedded into store-scoped field names.
    pub code: String,
    /// The catalog the store sells from.
    pub catalog: Catalog,
}
