//! Per-pass context: lookup caches and throughput telemetry.
//!
//! An [`IndexingPass`] belongs to exactly one indexing task instance. Its
//! caches exist to avoid redundant queries while that task builds its batch
//! of documents; they are never shared across task instances and die with
//! the pass. Cache keys are plain values (store code, sorted catalog uids)
//! so equal inputs always hit, regardless of snapshot identity.

use std::collections::BTreeMap;
use std::sync::Arc;
use vitrine_catalog::{PriceListAssignment, PriceListAssignmentService, Store, StoreService};

/// Entity-count telemetry for one pass.
///
/// The outer pipeline reads these after (or during) a pass to report
/// throughput; a failed build shows up as `docs_in > docs_out`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassMetrics {
    docs_in: u64,
    docs_out: u64,
}

impl PassMetrics {
    /// Records an entity entering the assembler.
    pub fn record_in(&mut self) {
        self.docs_in += 1;
    }

    /// Records a finished document leaving the assembler.
    pub fn record_out(&mut self) {
        self.docs_out += 1;
    }

    /// Number of entities that entered the assembler.
    pub fn docs_in(&self) -> u64 {
        self.docs_in
    }

    /// Number of documents handed back.
    pub fn docs_out(&self) -> u64 {
        self.docs_out
    }
}

/// Caches and telemetry scoped to one indexing pass.
#[derive(Default)]
pub struct IndexingPass {
    stores: Option<Arc<Vec<Store>>>,
    assignments_by_store: BTreeMap<String, Vec<PriceListAssignment>>,
    stores_by_catalog_uids: BTreeMap<Vec<u64>, Vec<Store>>,
    metrics: PassMetrics,
}

impl IndexingPass {
    /// Creates a fresh pass context.
    pub fn new() -> Self {
        Self::default()
    }

    /// All complete stores, fetched once per pass.
    pub fn stores(&mut self, service: &dyn StoreService) -> Arc<Vec<Store>> {
        self.stores
            .get_or_insert_with(|| Arc::new(service.find_all_complete_stores()))
            .clone()
    }

    /// Active price list assignments for the store's catalog, cached by
    /// store code.
    pub fn assignments_for(
        &mut self,
        store: &Store,
        service: &dyn PriceListAssignmentService,
    ) -> &[PriceListAssignment] {
        self.assignments_by_store
            .entry(store.code.clone())
            .or_insert_with(|| service.list_by_catalog(&store.catalog, true))
    }

    /// Stores whose catalog is among the given uids, cached by the sorted,
    /// deduplicated uid list.
    pub fn stores_with_catalogs(
        &mut self,
        mut catalog_uids: Vec<u64>,
        service: &dyn StoreService,
    ) -> &[Store] {
        catalog_uids.sort_unstable();
        catalog_uids.dedup();
        self.stores_by_catalog_uids
            .entry(catalog_uids)
            .or_insert_with_key(|uids| service.find_stores_with_catalog_uids(uids))
    }

    /// The pass's telemetry.
    pub fn metrics(&self) -> &PassMetrics {
        &self.metrics
    }

    /// Mutable access to the pass's telemetry.
    pub fn metrics_mut(&mut self) -> &mut PassMetrics {
        &mut self.metrics
    }
}

// ============================================================================
// Tests
// ============================================================================
