//! Products, bundles and constituents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use vitrine_core::LocaleTag;

use crate::attribute::AttributeBinding;
use crate::catalog::Catalog;
use crate::category::Category;
use crate::localized::LocalizedString;
use crate::sku::ProductSku;

/// A product snapshot as handed to the indexing engine.
///
/// Store displayability is resolved upstream and carried on the snapshot, so
/// document assembly never has to consult storefront state. Category
/// membership is carried as uids; the engine refetches the categories
/// through [`crate::lookup::CategoryLookup`] so that availability is
/// computed against current hierarchy data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Persistent uid.
    pub uid: u64,
    /// Stable product code.
    pub code: String,
    /// Name of the product's type (e.g. "Apparel").
    pub product_type: String,
    /// Start of the product's visibility window.
    pub start_date: DateTime<Utc>,
    /// End of the product's visibility window.
    pub end_date: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    pub last_modified: DateTime<Utc>,
    /// Lifetime sales count, used for popularity sorting.
    pub sales_count: u32,
    /// Brand code; `None` for unbranded products.
    pub brand_code: Option<String>,
    /// Localized product display names.
    pub display_names: LocalizedString,
    /// The master catalog the product was created in.
    pub master_catalog: Catalog,
    /// The product's default category within the master catalog.
    pub default_category: Category,
    /// Uids of every category the product belongs to, across all catalogs.
    pub category_uids: Vec<u64>,
    /// Featured rank per category uid; 0 or absent means not featured.
    pub featured_ranks: BTreeMap<u64, u32>,
    /// The product's SKUs.
    pub skus: Vec<ProductSku>,
    /// Product-level attribute values.
    pub attributes: Vec<AttributeBinding>,
    /// Products flagged not-sold-separately never surface in store search.
    pub not_sold_separately: bool,
    /// Codes of the stores in which the product is displayable.
    pub displayable_in: BTreeSet<String>,
    /// Bundle definition, when the product is a bundle.
    pub bundle: Option<Bundle>,
}

impl Product {
    /// Returns the display name for the given locale, if present.
    pub fn display_name(&self, locale: &LocaleTag) -> Option<&str> {
        self.display_names.get(locale)
    }

    /// Whether the product has more than one SKU.
    pub fn has_multiple_skus(&self) -> bool {
        self.skus.len() > 1
    }

    /// The product's default SKU, if it has any.
    pub fn default_sku(&self) -> Option<&ProductSku> {
        self.skus.first()
    }

    /// Featured rank of the product within the given category (0 = not featured).
    pub fn featured_rank(&self, category_uid: u64) -> u32 {
        self.featured_ranks.get(&category_uid).copied().unwrap_or(0)
    }

    /// Whether the product is displayable in the given store.
    pub fn is_displayable(&self, store_code: &str) -> bool {
        self.displayable_in.contains(store_code)
    }

    /// Whether the product is a bundle.
    pub fn is_bundle(&self) -> bool {
        self.bundle.is_some()
    }
}

/// The constituent list of a bundle product.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Bundle {
    /// The bundle's direct constituents, in display order.
    pub constituents: Vec<BundleConstituent>,
}

/// One entry in a bundle's constituent list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleConstituent {
    /// How many of the item the bundle contains.
    pub quantity: u32,
    /// The contained item.
    pub item: ConstituentItem,
}

/// An item contained in a bundle: a whole product or a specific SKU.
///
/// A constituent product that itself carries a bundle definition is a nested
/// bundle; flattening recurses into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstituentItem {
    /// A whole product.
    Product(Box<Product>),
    /// A specific SKU of a product.
    Sku {
        /// The selected SKU's code.
        sku_code: String,
        /// The product the SKU belongs to.
        product: Box<Product>,
    },
}

impl ConstituentItem {
    /// The underlying product, regardless of constituent kind.
    pub fn product(&self) -> &Product {
        match self {
            ConstituentItem::Product(product) => product,
            ConstituentItem::Sku { product, .. } => product,
        }
    }

    /// Whether the constituent is itself a bundle.
    pub fn is_bundle(&self) -> bool {
        self.product().is_bundle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_catalog() -> Catalog {
        Catalog {
            uid: 1,
            code: "MAIN".to_string(),
            master: true,
            default_locale: LocaleTag::new("en"),
            supported_locales: vec![LocaleTag::new("en")],
        }
    }

    fn minimal_category(catalog: Catalog) -> Category {
        Category {
            uid: 10,
            code: "ROOT".to_string(),
            catalog,
            parent_uid: None,
            available: true,
            linked: false,
            start_date: None,
            end_date: None,
            display_names: LocalizedString::new().with("en", "Root"),
        }
    }

    fn minimal_product() -> Product {
        let catalog = minimal_catalog();
        Product {
            uid: 100,
            code: "P100".to_string(),
            product_type: "Gear".to_string(),
            start_date: Utc::now(),
            end_date: None,
            last_modified: Utc::now(),
            sales_count: 0,
            brand_code: None,
            display_names: LocalizedString::new().with("en", "Widget"),
            master_catalog: catalog.clone(),
            default_category: minimal_category(catalog),
            category_uids: vec![10],
            featured_ranks: BTreeMap::new(),
            skus: Vec::new(),
            attributes: Vec::new(),
            not_sold_separately: false,
            displayable_in: BTreeSet::new(),
            bundle: None,
        }
    }

    #[test]
    fn test_featured_rank_defaults_to_zero() {
        let product = minimal_product();
        assert_eq!(product.featured_rank(42), 0);
    }

    #[test]
    fn test_has_multiple_skus() {
        let mut product = minimal_product();
        assert!(!product.has_multiple_skus());
        for code in ["S1", "S2"] {
            product.skus.push(ProductSku {
                uid: 1,
                code: code.to_string(),
                start_date: None,
                end_date: None,
                display_names: LocalizedString::new(),
                attributes: Vec::new(),
                option_values: Vec::new(),
            });
        }
        assert!(product.has_multiple_skus());
        assert_eq!(product.default_sku().map(|s| s.code.as_str()), Some("S1"));
    }

    #[test]
    fn test_constituent_item_product_access() {
        let inner = minimal_product();
        let item = ConstituentItem::Sku {
            sku_code: "S9".to_string(),
            product: Box::new(inner),
        };
        assert_eq!(item.product().code, "P100");
        assert!(!item.is_bundle());
    }

    #[test]
    fn test_nested_bundle_detection() {
        let mut inner = minimal_product();
        inner.bundle = Some(Bundle::default());
        let item = ConstituentItem::Product(Box::new(inner));
        assert!(item.is_bundle());
    }
}
