//! SKU document assembly.

use vitrine_catalog::{Brand, Product, ProductSku};
use vitrine_core::{LocaleTag, Result};

use crate::assembler::{
    write_containing_store_codes, write_displayable_fields, DocumentSource, Services,
};
use crate::availability::AvailabilityResolver;
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;
use crate::locales::LocaleFieldExpander;

/// What a SKU document stands for, for result grouping in SKU search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkuResultKind {
    /// The single SKU of a single-SKU product.
    Product,
    /// One SKU of a multi-SKU product.
    ProductSku,
    /// The SKU of a bundle.
    ProductBundle,
}

impl SkuResultKind {
    fn of(product: &Product) -> Self {
        if product.has_multiple_skus() {
            SkuResultKind::ProductSku
        } else if product.is_bundle() {
            SkuResultKind::ProductBundle
        } else {
            SkuResultKind::Product
        }
    }

    /// Stable ordering marker written to the index.
    fn sort_order(self) -> i64 {
        match self {
            SkuResultKind::Product => 0,
            SkuResultKind::ProductSku => 1,
            SkuResultKind::ProductBundle => 2,
        }
    }
}

/// A SKU together with its owning product.
///
/// SKU documents need both: identity and option data come from the SKU,
/// names, brand and category membership from the product.
#[derive(Debug, Clone, Copy)]
pub struct SkuEntity<'e> {
    /// The SKU being indexed.
    pub sku: &'e ProductSku,
    /// The product the SKU belongs to.
    pub product: &'e Product,
}

/// Builds SKU documents.
///
/// SKUs derive from an already-validated product, so zero category
/// memberships are tolerated here: the document simply carries no
/// catalog-derived fields.
pub struct SkuDocuments;

impl<'e> DocumentSource<SkuEntity<'e>> for SkuDocuments {
    fn index_name(&self) -> &'static str {
        "sku"
    }

    fn build(
        &self,
        entity: &SkuEntity<'e>,
        services: &Services<'_>,
        pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let SkuEntity { sku, product } = *entity;
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        // Identity: the SKU's own uid, codes and effective dates
        doc.set_field(fields::OBJECT_UID, sku.uid.to_string());
        doc.set_field(fields::PRODUCT_SKU_CODE, analyzer.analyze_text(&sku.code));
        if let Some(start_date) = sku.start_date {
            doc.set_field(fields::START_DATE, analyzer.analyze_date(start_date));
        }
        if let Some(end_date) = sku.end_date {
            doc.set_field(fields::END_DATE, analyzer.analyze_date(end_date));
        }

        let resolver = AvailabilityResolver::new(services.categories);
        let report = resolver.resolve(&product.category_uids);
        doc.add_field_values(fields::CATALOG_CODE, report.catalog_codes());

        let default_locale = report
            .master_default_locale()
            .unwrap_or(&product.master_catalog.default_locale)
            .clone();

        let brand = self.product_brand(product, services);
        self.brand_fields(&mut doc, brand.as_ref(), &default_locale, services);

        doc.set_field(fields::PRODUCT_CODE, analyzer.analyze_text(&product.code));
        if let Some(name) = sku.display_name(&default_locale) {
            doc.set_field(
                fields::SKU_CONFIGURATION_DEFAULT,
                analyzer.analyze_text(name),
            );
        }
        if let Some(name) = product.display_name(&default_locale) {
            doc.merge_sort_field(fields::PRODUCT_NAME_SORT, analyzer.analyze_text(name));
        }

        write_containing_store_codes(&mut doc, &report, services, pass);
        let stores = pass.stores(services.stores);
        write_displayable_fields(&mut doc, product, &report, &stores);

        let expander = LocaleFieldExpander::new(analyzer);
        expander.sku_locale_fields(&mut doc, sku, product, brand.as_ref(), &report.all_locales());

        doc.set_field(
            fields::SKU_RESULT_TYPE,
            analyzer.analyze_integer(SkuResultKind::of(product).sort_order()),
        );

        Ok(Some(doc))
    }
}

impl SkuDocuments {
    fn brand_fields(
        &self,
        doc: &mut IndexDocument,
        brand: Option<&Brand>,
        default_locale: &LocaleTag,
        services: &Services<'_>,
    ) {
        let Some(brand) = brand else {
            return;
        };
        let analyzer = services.analyzer;
        doc.set_field(fields::BRAND_CODE, analyzer.analyze_text(&brand.code));
        if let Some(name) = brand.display_name(default_locale) {
            let token = analyzer.analyze_text(name);
            doc.add_field_values(fields::BRAND_NAME, [token.clone()]);
            doc.merge_sort_field(fields::SORT_BRAND_NAME, token);
        }
    }

    fn product_brand(&self, product: &Product, services: &Services<'_>) -> Option<Brand> {
        product
            .brand_code
            .as_deref()
            .and_then(|code| services.brands.find_by_code(code))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::analyzer::TokenAnalyzer;
    use crate::assembler::fakes::{
        FixedAssignments, FixedBrands, FixedCategories, FixedStores, NoPrices,
    };
    use crate::assembler::DocumentAssembler;
    use chrono::{TimeZone, Utc};
    use std::collections::{BTreeMap, BTreeSet};
    use vitrine_catalog::{
        Brand, Bundle, Catalog, Category, LocalizedString, SkuOptionValue, Store,
    };

    fn catalog(uid: u64, code: &str, locales: &[&str]) -> Catalog {
        Catalog {
            uid,
            code: code.to_string(),
            master: true,
            default_locale: LocaleTag::new(locales[0]),
            supported_locales: locales.iter().map(|l| LocaleTag::new(*l)).collect(),
        }
    }

    fn category(uid: u64, code: &str, catalog: Catalog) -> Category {
        Category {
            uid,
            code: code.to_string(),
            catalog,
            parent_uid: None,
            available: true,
            linked: false,
            start_date: None,
            end_date: None,
            display_names: LocalizedString::new(),
        }
    }

    fn sku() -> ProductSku {
        ProductSku {
            uid: 55,
            code: "SKU-55".to_string(),
            start_date: Some(Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap()),
            end_date: None,
            display_names: LocalizedString::new()
                .with("en", "Red, Large")
                .with("fr", "Rouge, Grand"),
            attributes: Vec::new(),
            option_values: vec![SkuOptionValue {
                option_key: "colour".to_string(),
                display_names: LocalizedString::new().with("en", "Red").with("fr", "Rouge"),
            }],
        }
    }

    fn product(skus: Vec<ProductSku>) -> Product {
        let main = catalog(1, "MAIN", &["en", "fr"]);
        Product {
            uid: 100,
            code: "P100".to_string(),
            product_type: "Gear".to_string(),
            start_date: Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap(),
            end_date: None,
            last_modified: Utc.with_ymd_and_hms(2016, 2, 1, 0, 0, 0).unwrap(),
            sales_count: 0,
            brand_code: Some("ACME".to_string()),
            display_names: LocalizedString::new()
                .with("en", "Canoe")
                .with("fr", "Canoë"),
            master_catalog: main.clone(),
            default_category: category(10, "ROOT", main),
            category_uids: vec![10],
            featured_ranks: BTreeMap::new(),
            skus,
            attributes: Vec::new(),
            not_sold_separately: false,
            displayable_in: BTreeSet::from(["S1".to_string()]),
            bundle: None,
        }
    }

    fn build(entity: SkuEntity<'_>) -> IndexDocument {
        let analyzer = TokenAnalyzer;
        let main = catalog(1, "MAIN", &["en", "fr"]);
        let categories = FixedCategories::new(vec![category(10, "ROOT", main.clone())]);
        let stores = FixedStores(vec![Store {
            uid: 1,
            code: "S1".to_string(),
            catalog: main,
        }]);
        let assignments = FixedAssignments(BTreeMap::new());
        let brands = FixedBrands(
            [(
                "ACME".to_string(),
                Brand {
                    code: "ACME".to_string(),
                    display_names: LocalizedString::new().with("en", "Acme"),
                },
            )]
            .into_iter()
            .collect(),
        );
        let services = Services {
            categories: &categories,
            stores: &stores,
            price_list_assignments: &assignments,
            prices: &NoPrices,
            brands: &brands,
            analyzer: &analyzer,
        };
        let assembler = DocumentAssembler::new(services);
        let mut pass = IndexingPass::new();
        assembler
            .assemble(&SkuDocuments, Some(&entity), &mut pass)
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_sku_identity_fields() {
        let product = product(vec![sku()]);
        let doc = build(SkuEntity {
            sku: &product.skus[0],
            product: &product,
        });
        assert_eq!(doc.first_value("objectUid"), Some("55"));
        assert_eq!(doc.first_value("productSkuCode"), Some("SKU-55"));
        assert_eq!(doc.first_value("productCode"), Some("P100"));
        assert_eq!(doc.first_value("startDate"), Some("2016-01-01T00:00:00Z"));
        assert!(!doc.contains_field("endDate"));
    }

    #[test]
    fn test_default_locale_fields() {
        let product = product(vec![sku()]);
        let doc = build(SkuEntity {
            sku: &product.skus[0],
            product: &product,
        });
        // Master catalog default locale is en
        assert_eq!(
            doc.first_value("skuConfigurationDefault"),
            Some("Red, Large")
        );
        assert_eq!(doc.first_value("productNameSort"), Some("Canoe"));
        assert_eq!(doc.first_value("brandCode"), Some("ACME"));
        assert_eq!(doc.first_value("sortBrandName"), Some("Acme"));
    }

    #[test]
    fn test_locale_expansion_covers_catalog_union() {
        let product = product(vec![sku()]);
        let doc = build(SkuEntity {
            sku: &product.skus[0],
            product: &product,
        });
        assert_eq!(doc.first_value("skuConfiguration_en"), Some("Red, Large"));
        assert_eq!(doc.first_value("skuConfiguration_fr"), Some("Rouge, Grand"));
        assert_eq!(doc.first_value("skuOption_colour_fr"), Some("Rouge"));
        assert_eq!(doc.first_value("productName_fr"), Some("Canoë"));
    }

    #[test]
    fn test_store_fields() {
        let product = product(vec![sku()]);
        let doc = build(SkuEntity {
            sku: &product.skus[0],
            product: &product,
        });
        assert_eq!(doc.first_value("storeCode"), Some("S1"));
        assert_eq!(doc.first_value("displayable_S1"), Some("true"));
        assert_eq!(doc.first_value("catalogCode"), Some("MAIN"));
    }

    #[test]
    fn test_result_type_markers() {
        let single = product(vec![sku()]);
        let doc = build(SkuEntity {
            sku: &single.skus[0],
            product: &single,
        });
        assert_eq!(doc.first_value("skuResultType"), Some("0"));

        let mut multi = product(vec![sku(), ProductSku { uid: 56, code: "SKU-56".to_string(), ..sku() }]);
        let doc = build(SkuEntity {
            sku: &multi.skus[0],
            product: &multi,
        });
        assert_eq!(doc.first_value("skuResultType"), Some("1"));

        multi.skus.truncate(1);
        multi.bundle = Some(Bundle::default());
        let doc = build(SkuEntity {
            sku: &multi.skus[0],
            product: &multi,
        });
        assert_eq!(doc.first_value("skuResultType"), Some("2"));
    }

    #[test]
    fn test_zero_category_memberships_tolerated() {
        let mut orphan = product(vec![sku()]);
        orphan.category_uids.clear();
        let doc = build(SkuEntity {
            sku: &orphan.skus[0],
            product: &orphan,
        });
        // Falls back to the master catalog's default locale; no catalog
        // or store fields.
        assert_eq!(doc.first_value("skuConfigurationDefault"), Some("Red, Large"));
        assert!(!doc.contains_field("catalogCode"));
        assert!(!doc.contains_field("storeCode"));
    }
}
