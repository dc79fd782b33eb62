//! End-to-end document assembly over in-memory collaborators.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use vitrine_catalog::{
    Brand, BrandLookup, Catalog, Category, CategoryLookup, LocalizedString, Money, Price,
    PriceDataSource, PriceListAssignment, PriceListAssignmentService, PriceListDescriptor,
    PriceListStack, PriceLookupService, Product, ProductSku, Store, StoreService,
};
use vitrine_core::LocaleTag;
use vitrine_index::{
    DocumentAssembler, IndexingPass, ProductDocuments, Services, SkuDocuments, SkuEntity,
    TokenAnalyzer,
};

// ----------------------------------------------------------------------------
// In-memory collaborators
// ----------------------------------------------------------------------------

struct MemoryCategories(BTreeMap<u64, Category>);

impl CategoryLookup for MemoryCategories {
    fn find_by_uid(&self, uid: u64) -> Option<Category> {
        self.0.get(&uid).cloned()
    }

    fn find_parent(&self, category: &Category) -> Option<Category> {
        category.parent_uid.and_then(|uid| self.find_by_uid(uid))
    }
}

struct MemoryStores(Vec<Store>);

impl StoreService for MemoryStores {
    fn find_all_complete_stores(&self) -> Vec<Store> {
        self.0.clone()
    }

    fn find_stores_with_catalog_uids(&self, catalog_uids: &[u64]) -> Vec<Store> {
        self.0
            .iter()
            .filter(|store| catalog_uids.contains(&store.catalog.uid))
            .cloned()
            .collect()
    }
}

struct MemoryAssignments {
    by_catalog_code: BTreeMap<String, Vec<PriceListAssignment>>,
    calls: AtomicUsize,
}

impl PriceListAssignmentService for MemoryAssignments {
    fn list_by_catalog(&self, catalog: &Catalog, active_only: bool) -> Vec<PriceListAssignment> {
        assert!(active_only, "document assembly wants active assignments");
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.by_catalog_code
            .get(&catalog.code)
            .cloned()
            .unwrap_or_default()
    }
}

struct MemoryPrices {
    lowest_by_guid: BTreeMap<String, Decimal>,
    lookups: AtomicUsize,
}

impl PriceLookupService for MemoryPrices {
    fn product_price(
        &self,
        product: &Product,
        stack: &PriceListStack,
        _store: &Store,
        data_source: &PriceDataSource,
    ) -> Option<Price> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        // The batch data source must cover everything it is asked about.
        assert!(data_source.covers_product(&product.code));
        let guid = stack.price_list_guids.first()?;
        assert!(data_source.covers_price_list(guid));
        self.lowest_by_guid.get(guid).map(|amount| {
            Price::new(Money {
                amount: *amount,
                currency_code: stack.currency_code.clone(),
            })
        })
    }
}

struct MemoryBrands(BTreeMap<String, Brand>);

impl BrandLookup for MemoryBrands {
    fn find_by_code(&self, code: &str) -> Option<Brand> {
        self.0.get(code).cloned()
    }
}

// ----------------------------------------------------------------------------
// Fixture data
// ----------------------------------------------------------------------------

fn catalog(uid: u64, code: &str, locales: &[&str]) -> Catalog {
    Catalog {
        uid,
        code: code.to_string(),
        master: true,
        default_locale: LocaleTag::new(locales[0]),
        supported_locales: locales.iter().map(|l| LocaleTag::new(*l)).collect(),
    }
}

fn category(
    uid: u64,
    code: &str,
    catalog: Catalog,
    parent_uid: Option<u64>,
    available: bool,
) -> Category {
    Category {
        uid,
        code: code.to_string(),
        catalog,
        parent_uid,
        available,
        linked: false,
        start_date: None,
        end_date: None,
        display_names: LocalizedString::new().with("en", format!("{code} name")),
    }
}

fn sku(uid: u64, code: &str) -> ProductSku {
    ProductSku {
        uid,
        code: code.to_string(),
        start_date: None,
        end_date: None,
        display_names: LocalizedString::new().with("en", "Default config"),
        attributes: Vec::new(),
        option_values: Vec::new(),
    }
}

/// Category `C1` (available) under unavailable ancestor `C0` in `CAT_A`
/// (en, fr); second membership via available `B1` in `CAT_B` (en only).
fn scenario() -> (MemoryCategories, Product) {
    let cat_a = catalog(1, "CAT_A", &["en", "fr"]);
    let cat_b = catalog(2, "CAT_B", &["en"]);

    let categories = MemoryCategories(
        [
            (10, category(10, "C0", cat_a.clone(), None, false)),
            (11, category(11, "CAT1", cat_a.clone(), Some(10), true)),
            (20, category(20, "B1", cat_b.clone(), None, true)),
        ]
        .into_iter()
        .collect(),
    );

    let product = Product {
        uid: 100,
        code: "P100".to_string(),
        product_type: "Gear".to_string(),
        start_date: Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap(),
        end_date: None,
        last_modified: Utc.with_ymd_and_hms(2016, 3, 1, 0, 0, 0).unwrap(),
        sales_count: 3,
        brand_code: Some("ACME".to_string()),
        display_names: LocalizedString::new()
            .with("en", "Canoe")
            .with("fr", "Canoë"),
        master_catalog: cat_a.clone(),
        default_category: category(11, "CAT1", cat_a, Some(10), true),
        category_uids: vec![11, 20],
        featured_ranks: BTreeMap::new(),
        skus: vec![sku(1, "SKU-1")],
        attributes: Vec::new(),
        not_sold_separately: false,
        displayable_in: BTreeSet::from(["STORE_A".to_string(), "STORE_B".to_string()]),
        bundle: None,
    };

    (categories, product)
}

fn stores() -> MemoryStores {
    MemoryStores(vec![
        Store {
            uid: 1,
            code: "STORE_A".to_string(),
            catalog: catalog(1, "CAT_A", &["en", "fr"]),
        },
        Store {
            uid: 2,
            code: "STORE_B".to_string(),
            catalog: catalog(2, "CAT_B", &["en"]),
        },
        // A second store on CAT_B: same catalog, same price list keys
        Store {
            uid: 3,
            code: "STORE_B2".to_string(),
            catalog: catalog(2, "CAT_B", &["en"]),
        },
    ])
}

fn assignment(guid: &str, currency: &str) -> PriceListAssignment {
    PriceListAssignment {
        price_list: PriceListDescriptor {
            guid: guid.to_string(),
            currency_code: currency.to_string(),
        },
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[test]
fn product_document_end_to_end() {
    let (categories, product) = scenario();
    let stores = stores();
    let assignments = MemoryAssignments {
        by_catalog_code: [
            ("CAT_A".to_string(), vec![assignment("PL-CAD", "CAD")]),
            (
                "CAT_B".to_string(),
                vec![assignment("PL-USD", "USD"), assignment("PL-EUR", "EUR")],
            ),
        ]
        .into_iter()
        .collect(),
        calls: AtomicUsize::new(0),
    };
    let prices = MemoryPrices {
        lowest_by_guid: [
            ("PL-CAD".to_string(), Decimal::new(1999, 2)),
            ("PL-USD".to_string(), Decimal::new(1500, 2)),
        ]
        .into_iter()
        .collect(),
        lookups: AtomicUsize::new(0),
    };
    let brands = MemoryBrands(
        [(
            "ACME".to_string(),
            Brand {
                code: "ACME".to_string(),
                display_names: LocalizedString::new().with("en", "Acme").with("fr", "Acmé"),
            },
        )]
        .into_iter()
        .collect(),
    );
    let analyzer = TokenAnalyzer;
    let services = Services {
        categories: &categories,
        stores: &stores,
        price_list_assignments: &assignments,
        prices: &prices,
        brands: &brands,
        analyzer: &analyzer,
    };

    let assembler = DocumentAssembler::new(services);
    let mut pass = IndexingPass::new();
    let doc = assembler
        .assemble(&ProductDocuments, Some(&product), &mut pass)
        .expect("build succeeds")
        .expect("document produced");

    // Availability: CAT_A blocked by C0, CAT_B clear
    assert_eq!(doc.first_value("displayable_STORE_A"), Some("false"));
    assert_eq!(doc.first_value("displayable_STORE_B"), Some("true"));

    // Ancestor codes recorded despite unavailability
    assert_eq!(
        doc.values("parentCategoryCodes").unwrap(),
        &["C0".to_string()]
    );

    // Catalog and category code fields
    let catalog_codes = doc.values("catalogCode").unwrap();
    assert!(catalog_codes.contains(&"CAT_A".to_string()));
    assert!(catalog_codes.contains(&"CAT_B".to_string()));
    assert_eq!(
        doc.values("productCategory_CAT_A").unwrap(),
        &["CAT1".to_string()]
    );
    assert_eq!(
        doc.values("productCategory_CAT_B").unwrap(),
        &["B1".to_string()]
    );

    // Locale fields cover the union {en, fr}, nothing else
    assert_eq!(doc.first_value("productName_en"), Some("Canoe"));
    assert_eq!(doc.first_value("productName_fr"), Some("Canoë"));
    assert!(doc.field_names().all(|name| !name.starts_with("productName_de")));

    // One locale-agnostic sort field seeded from CAT_A's default locale
    assert_eq!(doc.first_value("productNameSort"), Some("Canoe"));

    // Price fields: one per (catalog, price list) with a resolvable price.
    // STORE_B and STORE_B2 share every key; PL-EUR has no price.
    assert_eq!(doc.first_value("price_CAT_A_PL-CAD"), Some("19.99"));
    assert_eq!(doc.first_value("price_CAT_B_PL-USD"), Some("15.00"));
    assert!(!doc.contains_field("price_CAT_B_PL-EUR"));
    // Resolved keys looked up once; the unresolvable PL-EUR key stays
    // vacant and is retried per store (2 stores on CAT_B)
    assert_eq!(prices.lookups.load(Ordering::SeqCst), 4);
    // Assignment queries hit the per-pass cache: one per store
    assert_eq!(assignments.calls.load(Ordering::SeqCst), 3);

    // Store codes for every store on a containing catalog
    let store_codes = doc.values("storeCode").unwrap();
    assert_eq!(store_codes.len(), 3);

    // Telemetry
    assert_eq!(pass.metrics().docs_in(), 1);
    assert_eq!(pass.metrics().docs_out(), 1);
}

#[test]
fn product_document_is_idempotent() {
    let build = || {
        let (categories, product) = scenario();
        let stores = stores();
        let assignments = MemoryAssignments {
            by_catalog_code: BTreeMap::new(),
            calls: AtomicUsize::new(0),
        };
        let prices = MemoryPrices {
            lowest_by_guid: BTreeMap::new(),
            lookups: AtomicUsize::new(0),
        };
        let brands = MemoryBrands(BTreeMap::new());
        let analyzer = TokenAnalyzer;
        let services = Services {
            categories: &categories,
            stores: &stores,
            price_list_assignments: &assignments,
            prices: &prices,
            brands: &brands,
            analyzer: &analyzer,
        };
        let assembler = DocumentAssembler::new(services);
        let mut pass = IndexingPass::new();
        assembler
            .assemble(&ProductDocuments, Some(&product), &mut pass)
            .unwrap()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn sku_document_end_to_end() {
    let (categories, product) = scenario();
    let stores = stores();
    let assignments = MemoryAssignments {
        by_catalog_code: BTreeMap::new(),
        calls: AtomicUsize::new(0),
    };
    let prices = MemoryPrices {
        lowest_by_guid: BTreeMap::new(),
        lookups: AtomicUsize::new(0),
    };
    let brands = MemoryBrands(BTreeMap::new());
    let analyzer = TokenAnalyzer;
    let services = Services {
        categories: &categories,
        stores: &stores,
        price_list_assignments: &assignments,
        prices: &prices,
        brands: &brands,
        analyzer: &analyzer,
    };

    let assembler = DocumentAssembler::new(services);
    let mut pass = IndexingPass::new();
    let entity = SkuEntity {
        sku: &product.skus[0],
        product: &product,
    };
    let doc = assembler
        .assemble(&SkuDocuments, Some(&entity), &mut pass)
        .expect("build succeeds")
        .expect("document produced");

    assert_eq!(doc.first_value("productSkuCode"), Some("SKU-1"));
    assert_eq!(doc.first_value("productCode"), Some("P100"));
    // Locale union from both catalogs
    assert_eq!(doc.first_value("productName_fr"), Some("Canoë"));
    // Default locale comes from the master catalog entry (CAT_A → en)
    assert_eq!(doc.first_value("skuConfigurationDefault"), Some("Default config"));
    // Displayability mirrors the product's availability per store
    assert_eq!(doc.first_value("displayable_STORE_A"), Some("false"));
    assert_eq!(doc.first_value("displayable_STORE_B"), Some("true"));
}
