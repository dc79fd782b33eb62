//! Batched lowest-price resolution per catalog and price list.
//!
//! Naive per-store, per-price-list point lookups would issue one query per
//! (store × price list) pair per entity, which does not hold up at catalog
//! scale. Instead, one batch [`PriceDataSource`] is built per document,
//! covering the entity and every price list assignment across the candidate
//! stores, and every lookup reads through it.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use vitrine_catalog::{
    Price, PriceDataSource, PriceListAssignmentService, PriceListDescriptor, PriceListStack,
    PriceLookupService, Product, Store,
};

use crate::context::IndexingPass;
use crate::fields;

/// Identity of one price field: catalog plus price list.
///
/// Two stores selling from the same catalog under the same price list
/// produce the same key; the first resolved price wins.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriceFieldKey {
    /// Code of the store's catalog.
    pub catalog_code: String,
    /// Guid of the assigned price list.
    pub price_list_guid: String,
}

impl PriceFieldKey {
    /// The index field name for this key.
    pub fn field_name(&self) -> String {
        fields::price_field(&self.catalog_code, &self.price_list_guid)
    }
}

/// Resolves the lowest price per (catalog, price list) pair across stores.
pub struct PriceFieldAssembler<'a> {
    prices: &'a dyn PriceLookupService,
}

impl<'a> PriceFieldAssembler<'a> {
    /// Creates an assembler over the given price lookup.
    pub fn new(prices: &'a dyn PriceLookupService) -> Self {
        Self { prices }
    }

    /// Resolves every price field for the product across the given stores.
    ///
    /// Assignments per store come from the pass cache, so repeated stores
    /// of the same catalog cost one assignment query; prices resolve
    /// through one batch data source built here and reused for every
    /// lookup. Assignments with no resolvable price contribute nothing.
    pub fn assemble(
        &self,
        product: &Product,
        stores: &[Store],
        pass: &mut IndexingPass,
        assignments: &dyn PriceListAssignmentService,
    ) -> BTreeMap<PriceFieldKey, Price> {
        let data_source = self.build_data_source(product, stores, pass, assignments);

        let mut resolved = BTreeMap::new();
        for store in stores {
            let store_assignments = pass.assignments_for(store, assignments).to_vec();
            for assignment in &store_assignments {
                self.resolve_into(
                    &mut resolved,
                    product,
                    &assignment.price_list,
                    store,
                    &data_source,
                );
            }
        }

        log::trace!(
            "Resolved {} price field(s) for {}",
            resolved.len(),
            product.code
        );
        resolved
    }

    /// Builds the batch data source covering the product and every price
    /// list assignment across the candidate stores.
    fn build_data_source(
        &self,
        product: &Product,
        stores: &[Store],
        pass: &mut IndexingPass,
        assignments: &dyn PriceListAssignmentService,
    ) -> PriceDataSource {
        let mut builder = PriceDataSource::builder().product(product);
        for store in stores {
            builder = builder.assignments(pass.assignments_for(store, assignments));
        }
        builder.build()
    }

    /// Looks up the lowest price for one (store, price list) pair and
    /// records it under its field key unless the key is already taken.
    fn resolve_into(
        &self,
        resolved: &mut BTreeMap<PriceFieldKey, Price>,
        product: &Product,
        price_list: &PriceListDescriptor,
        store: &Store,
        data_source: &PriceDataSource,
    ) {
        let key = PriceFieldKey {
            catalog_code: store.catalog.code.clone(),
            price_list_guid: price_list.guid.clone(),
        };
        if let Entry::Vacant(slot) = resolved.entry(key) {
            let stack = PriceListStack::single(price_list);
            if let Some(price) = self.prices.product_price(product, &stack, store, data_source) {
                slot.insert(price);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
