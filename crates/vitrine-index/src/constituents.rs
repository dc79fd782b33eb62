//! Bundle constituent flattening.
//!
//! A bundle's document must be discoverable by its children's brands, SKU
//! codes and names, so flattening writes every constituent's fields into
//! the same shared document as the top-level entity, pre-order and
//! depth-first through nested bundles. The constituent relation is a
//! tree/DAG by construction upstream, but the traversal still carries a
//! visited set: a cycle in bad data gets pruned with a warning instead of
//! recursing forever.

use std::collections::BTreeSet;
use vitrine_catalog::{
    Brand, BrandLookup, Bundle, CategoryLookup, ConstituentItem, Product,
};

use crate::analyzer::ValueAnalyzer;
use crate::availability::AvailabilityResolver;
use crate::document::IndexDocument;
use crate::fields;
use crate::locales::LocaleFieldExpander;

/// Flattens bundle constituent trees into the shared document.
pub struct ConstituentFlattener<'a> {
    expander: &'a LocaleFieldExpander<'a>,
    brands: &'a dyn BrandLookup,
    categories: &'a dyn CategoryLookup,
    analyzer: &'a dyn ValueAnalyzer,
}

impl<'a> ConstituentFlattener<'a> {
    /// Creates a flattener over the given collaborators.
    pub fn new(
        expander: &'a LocaleFieldExpander<'a>,
        brands: &'a dyn BrandLookup,
        categories: &'a dyn CategoryLookup,
        analyzer: &'a dyn ValueAnalyzer,
    ) -> Self {
        Self {
            expander,
            brands,
            categories,
            analyzer,
        }
    }

    /// Flattens the bundle into the document and writes the total
    /// constituent count (nested constituents included, the top-level
    /// bundle itself not counted). Returns the count.
    pub fn flatten(&self, doc: &mut IndexDocument, bundle: &Bundle, top: &Product) -> usize {
        let mut visited = BTreeSet::new();
        visited.insert(top.uid);
        let count = self.flatten_into(doc, bundle, &mut visited);
        doc.set_field(
            fields::CONSTITUENT_COUNT,
            self.analyzer.analyze_integer(count as i64),
        );
        count
    }

    fn flatten_into(
        &self,
        doc: &mut IndexDocument,
        bundle: &Bundle,
        visited: &mut BTreeSet<u64>,
    ) -> usize {
        let mut count = 0;
        for constituent in &bundle.constituents {
            let item = &constituent.item;
            self.constituent_fields(doc, item);
            count += 1;

            if item.is_bundle() {
                let product = item.product();
                if !visited.insert(product.uid) {
                    log::warn!(
                        "Constituent cycle at bundle {} ({}); pruning branch",
                        product.uid,
                        product.code
                    );
                    continue;
                }
                if let Some(nested) = &product.bundle {
                    count += self.flatten_into(doc, nested, visited);
                }
            }
        }
        count
    }

    /// Writes one constituent's contribution into the shared document.
    ///
    /// All of these are accumulating multi-value fields: the document keeps
    /// the top-level entity's values and gains the constituent's.
    fn constituent_fields(&self, doc: &mut IndexDocument, item: &ConstituentItem) {
        let product = item.product();
        let brand = self.product_brand(product);

        match item {
            ConstituentItem::Product(_) => {
                self.brand_code_field(doc, product);
                self.expander
                    .default_locale_name_fields(doc, product, brand.as_ref());
                let sku_codes: Vec<String> =
                    product.skus.iter().map(|sku| sku.code.clone()).collect();
                doc.add_field_values(fields::PRODUCT_SKU_CODE, sku_codes);
            }
            ConstituentItem::Sku { sku_code, .. } => {
                doc.add_field_values(fields::PRODUCT_SKU_CODE, [sku_code.clone()]);
                self.brand_code_field(doc, product);
                self.expander
                    .default_locale_name_fields(doc, product, brand.as_ref());
            }
        }

        let categories = AvailabilityResolver::new(self.categories)
            .resolve_categories(&product.category_uids);
        let locales = categories
            .iter()
            .flat_map(|category| category.catalog.supported_locales.iter().cloned())
            .collect();
        self.expander
            .product_locale_fields(doc, product, brand.as_ref(), &categories, &locales);
    }

    fn brand_code_field(&self, doc: &mut IndexDocument, product: &Product) {
        if let Some(code) = &product.brand_code {
            doc.add_field_values(fields::BRAND_CODE, [self.analyzer.analyze_text(code)]);
        }
    }

    fn product_brand(&self, product: &Product) -> Option<Brand> {
        product
            .brand_code
            .as_deref()
            .and_then(|code| self.brands.find_by_code(code))
    }
}

// ============================================================================
// Tests
// ============================================================================
