//! Document assembly orchestration.
//!
//! One generic [`DocumentAssembler`] drives every entity type; the
//! per-entity [`DocumentSource`] strategies differ only in which identity
//! fields they emit and which of the shared components they invoke
//! (availability, pricing, locale expansion, constituent flattening).
//!
//! A build either returns a finished document, skips defensively
//! (`Ok(None)`: absent entity, blank customer shared id), or fails for that
//! entity alone (`Err`: required structural data missing). Failures never
//! leak state into another entity's build; everything except the per-pass
//! caches dies with the call.

mod category;
mod cm_user;
mod customer;
mod product;
mod rule;
mod shipping;
mod sku;

pub use category::CategoryDocuments;
pub use cm_user::CmUserDocuments;
pub use customer::CustomerDocuments;
pub use product::{ProductDocuments, FEATURED_RANK_BOOST};
pub use rule::RuleDocuments;
pub use shipping::ShippingServiceLevelDocuments;
pub use sku::{SkuDocuments, SkuEntity};

use vitrine_catalog::{
    BrandLookup, CategoryLookup, PriceListAssignmentService, PriceLookupService, Product, Store,
    StoreService,
};
use vitrine_core::Result;

use crate::analyzer::ValueAnalyzer;
use crate::availability::AvailabilityReport;
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// The collaborators a document build reads from.
///
/// All of them are shared across concurrently running task instances and
/// must be safe under concurrent invocation.
#[derive(Clone, Copy)]
pub struct Services<'a> {
    /// Category retrieval and ancestor traversal.
    pub categories: &'a dyn CategoryLookup,
    /// Store listing.
    pub stores: &'a dyn StoreService,
    /// Price list assignment listing.
    pub price_list_assignments: &'a dyn PriceListAssignmentService,
    /// Promoted price resolution.
    pub prices: &'a dyn PriceLookupService,
    /// Brand retrieval.
    pub brands: &'a dyn BrandLookup,
    /// Value-to-token analysis.
    pub analyzer: &'a dyn ValueAnalyzer,
}

/// An entity-specific document building strategy.
pub trait DocumentSource<E: ?Sized> {
    /// Name of the index this source feeds, for logging.
    fn index_name(&self) -> &'static str;

    /// Builds the document for one entity.
    ///
    /// `Ok(None)` is a defensive skip, not an error; `Err` is a failure
    /// local to this entity.
    fn build(
        &self,
        entity: &E,
        services: &Services<'_>,
        pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>>;
}

/// Drives [`DocumentSource`] strategies and keeps the pass telemetry.
pub struct DocumentAssembler<'a> {
    services: Services<'a>,
}

impl<'a> DocumentAssembler<'a> {
    /// Creates an assembler over the given collaborators.
    pub fn new(services: Services<'a>) -> Self {
        Self { services }
    }

    /// Assembles one document.
    ///
    /// An absent entity returns `Ok(None)` without touching the counters.
    /// Otherwise `docs_in` is incremented exactly once, and `docs_out`
    /// exactly once more if a document comes back.
    pub fn assemble<E: ?Sized>(
        &self,
        source: &impl DocumentSource<E>,
        entity: Option<&E>,
        pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let Some(entity) = entity else {
            return Ok(None);
        };
        pass.metrics_mut().record_in();

        let document = source.build(entity, &self.services, pass)?;
        if let Some(document) = &document {
            pass.metrics_mut().record_out();
            log::trace!(
                "Assembled {} document with {} field(s)",
                source.index_name(),
                document.len()
            );
        }
        Ok(document)
    }

    /// The collaborators this assembler builds with.
    pub fn services(&self) -> &Services<'a> {
        &self.services
    }
}

/// Shared displayability rule for product-backed documents.
///
/// Displayable in a store when the snapshot says so, the product may be
/// sold separately, and the store's catalog (when the entity participates
/// in it) resolved as available.
pub(crate) fn displayable_in_store(
    product: &Product,
    store: &Store,
    report: &AvailabilityReport,
) -> bool {
    let mut displayable = product.is_displayable(&store.code);
    displayable &= !product.not_sold_separately;
    if let Some(available) = report.is_available(store.catalog.uid) {
        displayable &= available;
    }
    displayable
}

/// Writes one displayability flag per store.
pub(crate) fn write_displayable_fields(
    doc: &mut IndexDocument,
    product: &Product,
    report: &AvailabilityReport,
    stores: &[Store],
) {
    for store in stores {
        doc.set_field(
            fields::store_field(fields::DISPLAYABLE, &store.code),
            displayable_in_store(product, store, report).to_string(),
        );
    }
}

/// Writes the codes of every store containing one of the report's catalogs.
pub(crate) fn write_containing_store_codes(
    doc: &mut IndexDocument,
    report: &AvailabilityReport,
    services: &Services<'_>,
    pass: &mut IndexingPass,
) {
    let containing = pass.stores_with_catalogs(report.catalog_uids(), services.stores);
    let codes: Vec<String> = containing.iter().map(|store| store.code.clone()).collect();
    doc.add_field_values(fields::STORE_CODE, codes);
}

// ============================================================================
// Test fakes shared by the strategy modules
// ============================================================================


// ============================================================================
// Tests
// ============================================================================
