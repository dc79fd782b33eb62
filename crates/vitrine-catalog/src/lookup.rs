//! Collaborator interfaces at the persistence boundary.
//!
//! These traits are implemented by the host application over its ORM or
//! repository layer. Entities are indexed in parallel across task instances,
//! so every implementation must be safe under concurrent invocation; the
//! engine itself takes no locks.
//!
//! Returning `None`/empty from any of these is never an error: optional
//! relations simply produce no index field.

use crate::catalog::{Brand, Catalog};
use crate::category::Category;
use crate::pricing::{Price, PriceDataSource, PriceListAssignment, PriceListStack};
use crate::product::Product;
use crate::store::Store;

/// Category retrieval and ancestor traversal.
pub trait CategoryLookup: Send + Sync {
    /// Fetches a category by uid.
    fn find_by_uid(&self, uid: u64) -> Option<Category>;

    /// Fetches the parent of the given category; `None` at a root.
    fn find_parent(&self, category: &Category) -> Option<Category>;
}

/// Store listing.
pub trait StoreService: Send + Sync {
    /// All fully configured stores in the system.
    fn find_all_complete_stores(&self) -> Vec<Store>;

    /// Stores whose catalog is one of the given catalog uids.
    fn find_stores_with_catalog_uids(&self, catalog_uids: &[u64]) -> Vec<Store>;
}

/// Price list assignment listing.
pub trait PriceListAssignmentService: Send + Sync {
    /// Price list assignments for the given catalog.
    ///
    /// With `active_only`, assignments outside their activity window are
    /// filtered out.
    fn list_by_catalog(&self, catalog: &Catalog, active_only: bool) -> Vec<PriceListAssignment>;
}

/// Promoted price resolution.
pub trait PriceLookupService: Send + Sync {
    /// Resolves the product's lowest price under the given price list stack
    /// and store, reading through the supplied batch data source.
    ///
    /// `None` when no price is resolvable for the combination.
    fn product_price(
        &self,
        product: &Product,
        stack: &PriceListStack,
        store: &Store,
        data_source: &PriceDataSource,
    ) -> Option<Price>;
}

/// Brand retrieval.
pub trait BrandLookup: Send + Sync {
    /// Fetches a brand by code.
    fn find_by_code(&self, code: &str) -> Option<Brand>;
}
