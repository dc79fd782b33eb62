//! Catalog availability over category ancestor chains.
//!
//! An entity is available in a catalog when at least one of its category
//! memberships in that catalog sits on a fully available path to the root:
//! availability is ANDed along a path and ORed across paths. Every ancestor
//! code is recorded regardless of availability so that browse-path search
//! can still navigate to unavailable branches.

use std::collections::{BTreeMap, BTreeSet};
use vitrine_catalog::{Category, CategoryLookup};
use vitrine_core::LocaleTag;

/// Per-catalog result of an availability resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Catalog uid.
    pub catalog_uid: u64,
    /// Catalog code.
    pub catalog_code: String,
    /// Whether any membership path in this catalog is fully available.
    pub available: bool,
    /// Whether the catalog is a master catalog.
    pub master: bool,
    /// The catalog's default locale.
    pub default_locale: LocaleTag,
    /// The catalog's supported locales.
    pub supported_locales: Vec<LocaleTag>,
}

/// Everything one availability resolution discovers.
///
/// Downstream components read the resolved categories and catalogs from
/// here instead of repeating lookups: the locale expander takes the catalog
/// union, the displayability fields cross-reference the per-catalog flags,
/// and the store-code fields use the catalog uids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityReport {
    /// Per-catalog availability, keyed by catalog uid.
    pub catalogs: BTreeMap<u64, CatalogEntry>,
    /// Codes of every ancestor of every membership, available or not.
    pub parent_category_codes: BTreeSet<String>,
    /// Codes of every membership category, regardless of catalog.
    pub category_codes: BTreeSet<String>,
    /// Membership category codes per catalog code.
    pub category_codes_by_catalog: BTreeMap<String, BTreeSet<String>>,
    /// Non-linked membership category codes per catalog code.
    pub master_category_codes_by_catalog: BTreeMap<String, BTreeSet<String>>,
    /// The resolved membership categories, in membership order.
    pub categories: Vec<Category>,
}

impl AvailabilityReport {
    /// Whether the resolution found no memberships at all.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Availability in the given catalog; `None` when the entity has no
    /// membership there.
    pub fn is_available(&self, catalog_uid: u64) -> Option<bool> {
        self.catalogs.get(&catalog_uid).map(|entry| entry.available)
    }

    /// Codes of every catalog the entity participates in, in stable order.
    pub fn catalog_codes(&self) -> BTreeSet<String> {
        self.catalogs
            .values()
            .map(|entry| entry.catalog_code.clone())
            .collect()
    }

    /// Uids of every catalog the entity participates in, ascending.
    pub fn catalog_uids(&self) -> Vec<u64> {
        self.catalogs.keys().copied().collect()
    }

    /// Union of supported locales over every participating catalog.
    pub fn all_locales(&self) -> BTreeSet<LocaleTag> {
        self.catalogs
            .values()
            .flat_map(|entry| entry.supported_locales.iter().cloned())
            .collect()
    }

    /// Default locale of the first master catalog among the participating
    /// catalogs (by uid order), if any.
    pub fn master_default_locale(&self) -> Option<&LocaleTag> {
        self.catalogs
            .values()
            .find(|entry| entry.master)
            .map(|entry| &entry.default_locale)
    }
}

/// Computes per-catalog availability by walking category ancestor chains.
pub struct AvailabilityResolver<'a> {
    categories: &'a dyn CategoryLookup,
}

impl<'a> AvailabilityResolver<'a> {
    /// Creates a resolver over the given category lookup.
    pub fn new(categories: &'a dyn CategoryLookup) -> Self {
        Self { categories }
    }

    /// Resolves availability for the given category memberships.
    ///
    /// Memberships that no longer resolve are skipped with a warning; a
    /// report with no resolved membership is the caller's signal that the
    /// entity has no usable category data.
    pub fn resolve(&self, category_uids: &[u64]) -> AvailabilityReport {
        let mut report = AvailabilityReport::default();

        for &uid in category_uids {
            let Some(category) = self.categories.find_by_uid(uid) else {
                log::warn!("Category {uid} no longer resolves; membership skipped");
                continue;
            };

            let catalog = &category.catalog;
            report
                .category_codes_by_catalog
                .entry(catalog.code.clone())
                .or_default()
                .insert(category.code.clone());
            report.category_codes.insert(category.code.clone());
            if !category.linked {
                report
                    .master_category_codes_by_catalog
                    .entry(catalog.code.clone())
                    .or_default()
                    .insert(category.code.clone());
            }

            // A path is available only if the category and every ancestor
            // up to the root are available.
            let mut available = category.is_available();
            available &= self.walk_ancestors(&category, &mut report.parent_category_codes);

            // One available route to the root makes the catalog available.
            report
                .catalogs
                .entry(catalog.uid)
                .and_modify(|entry| entry.available |= available)
                .or_insert_with(|| CatalogEntry {
                    catalog_uid: catalog.uid,
                    catalog_code: catalog.code.clone(),
                    available,
                    master: catalog.master,
                    default_locale: catalog.default_locale.clone(),
                    supported_locales: catalog.supported_locales.clone(),
                });

            report.categories.push(category);
        }

        log::trace!(
            "Resolved availability across {} catalog(s)",
            report.catalogs.len()
        );
        report
    }

    /// Fetches category snapshots without ancestor traversal.
    ///
    /// Used when only the categories themselves are needed, e.g. for a
    /// bundle constituent's locale expansion.
    pub fn resolve_categories(&self, category_uids: &[u64]) -> Vec<Category> {
        category_uids
            .iter()
            .filter_map(|&uid| self.categories.find_by_uid(uid))
            .collect()
    }

    /// Walks the ancestor chain, recording every ancestor's code and
    /// returning whether all ancestors are available.
    pub fn walk_ancestors(&self, category: &Category, parent_codes: &mut BTreeSet<String>) -> bool {
        let mut available = true;
        let mut current = self.categories.find_parent(category);
        while let Some(parent) = current {
            parent_codes.insert(parent.code.clone());
            available &= parent.is_available();
            current = self.categories.find_parent(&parent);
        }
        available
    }
}

// ============================================================================
// Tests
// ============================================================================
