//! Field names and scoped-name composition.
//!
//! The full-text engine's schema declares dynamic field patterns against
//! these names, so every composition here must be deterministic and stable:
//! the same base name and qualifiers always produce the same field name,
//! bit for bit. Scoping qualifiers are appended with `_`.
//!
//! # Field name shapes
//!
//! | Shape | Example | Used for |
//! |-------|---------|----------|
//! | `<field>` | `productCode` | global/default values |
//! | `<field>_<locale>` | `productName_fr` | locale-scoped values |
//! | `<field>_<storeCode>` | `displayable_STORE1` | store-scoped flags |
//! | `<field>_<catalogCode>` | `productCategory_MAIN` | catalog-scoped lists |
//! | `price_<catalogCode>_<plGuid>` | `price_MAIN_PL1` | price fields |
//! | `featured_<categoryUid>` | `featured_42` | featured-rank boosts |
//! | `attr_<key>[_<locale>]` | `attr_fabric_en` | attribute values |
//! | `skuOption_<key>_<locale>` | `skuOption_colour_en` | SKU option values |

use vitrine_catalog::Attribute;
use vitrine_core::LocaleTag;

// ============================================================================
// Shared identity fields
// ============================================================================

/// Persistent uid of the indexed entity.
pub const OBJECT_UID: &str = "objectUid";
/// Start of the entity's visibility window.
pub const START_DATE: &str = "startDate";
/// End of the entity's visibility window.
pub const END_DATE: &str = "endDate";
/// Last modification timestamp.
pub const LAST_MODIFIED_DATE: &str = "lastModifiedDate";

// ============================================================================
// Product / SKU fields
// ============================================================================

/// Product code.
pub const PRODUCT_CODE: &str = "productCode";
/// Lifetime sales count.
pub const SALES_COUNT: &str = "salesCount";
/// Product type name.
pub const PRODUCT_TYPE_NAME: &str = "productTypeName";
/// Brand code (accumulates bundle constituents' brands).
pub const BRAND_CODE: &str = "brandCode";
/// Brand display name.
pub const BRAND_NAME: &str = "brandName";
/// Product display name.
pub const PRODUCT_NAME: &str = "productName";
/// SKU codes of the product (or the one SKU of a SKU document).
pub const PRODUCT_SKU_CODE: &str = "productSkuCode";
/// SKU code shown when sorting by SKU: product code for multi-SKU products.
pub const DISPLAY_SKU_CODE: &str = "displaySkuCode";
/// Whether the product is featured in any of its categories.
pub const FEATURED: &str = "featured";
/// Store displayability flag, store-scoped.
pub const DISPLAYABLE: &str = "displayable";
/// Price field base, catalog- and price-list-scoped.
pub const PRICE: &str = "price";
/// Total number of constituents of a bundle, nested included.
pub const CONSTITUENT_COUNT: &str = "constituentCount";
/// SKU configuration display name, locale-scoped.
pub const SKU_CONFIGURATION: &str = "skuConfiguration";
/// SKU configuration display name at the default locale.
pub const SKU_CONFIGURATION_DEFAULT: &str = "skuConfigurationDefault";
/// Kind of entity a SKU document stands for (product / SKU / bundle).
pub const SKU_RESULT_TYPE: &str = "skuResultType";

// ============================================================================
// Category / catalog fields
// ============================================================================

/// Codes of catalogs containing the entity.
pub const CATALOG_CODE: &str = "catalogCode";
/// Category codes regardless of catalog (catalog-agnostic search).
pub const CATEGORY_CODE: &str = "categoryCode";
/// Category display name.
pub const CATEGORY_NAME: &str = "categoryName";
/// Category codes per catalog, catalog-scoped.
pub const PRODUCT_CATEGORY: &str = "productCategory";
/// Non-linked (master) category codes per catalog, catalog-scoped.
pub const MASTER_PRODUCT_CATEGORY: &str = "masterProductCategory";
/// Codes of every ancestor category, available or not.
pub const PARENT_CATEGORY_CODES: &str = "parentCategoryCodes";
/// Display name of the product's default category.
pub const DEFAULT_CATEGORY_NAME: &str = "defaultCategoryName";
/// Whether a category is a linked (virtual-catalog) category.
pub const CATEGORY_LINKED: &str = "categoryLinked";

// ============================================================================
// Sort fields
// ============================================================================

/// Locale-agnostic consolidated product name for cross-locale sorting.
pub const PRODUCT_NAME_SORT: &str = "productNameSort";
/// Product name sort field (also emitted per locale).
pub const SORT_PRODUCT_NAME: &str = "sortProductName";
/// Brand name sort field (also emitted per locale).
pub const SORT_BRAND_NAME: &str = "sortBrandName";
/// Default category name sort field (also emitted per locale).
pub const SORT_DEFAULT_CATEGORY_NAME: &str = "sortDefaultCategoryName";
/// Category name sort field for category documents.
pub const SORT_CATEGORY_NAME: &str = "sortCategoryName";
/// Service level name sort field.
pub const SORT_SERVICE_LEVEL_NAME: &str = "sortServiceLevelName";

// ============================================================================
// Store / rule / user / customer / shipping fields
// ============================================================================

/// Codes of stores containing the entity.
pub const STORE_CODE: &str = "storeCode";
/// Promotion rule code.
pub const RULE_CODE: &str = "ruleCode";
/// Administrative promotion name.
pub const PROMOTION_NAME: &str = "promotionName";
/// Shopper-facing promotion name, locale-scoped.
pub const PROMOTION_DISPLAY_NAME: &str = "promotionDisplayName";
/// Whether a promotion rule is enabled.
pub const ENABLED: &str = "enabled";
/// CM user login name.
pub const USER_NAME: &str = "userName";
/// First name.
pub const FIRST_NAME: &str = "firstName";
/// Last name.
pub const LAST_NAME: &str = "lastName";
/// Email address.
pub const EMAIL: &str = "email";
/// Account status.
pub const STATUS: &str = "status";
/// Role names of a CM user.
pub const USER_ROLE: &str = "userRole";
/// Whether a CM user may access every catalog.
pub const ALL_CATALOGS_ACCESS: &str = "allCatalogsAccess";
/// Whether a CM user may access every store.
pub const ALL_STORES_ACCESS: &str = "allStoresAccess";
/// Customer shared identifier.
pub const SHARED_ID: &str = "sharedId";
/// Phone number.
pub const PHONE_NUMBER: &str = "phoneNumber";
/// Preferred billing address, flattened.
pub const PREFERRED_BILLING_ADDRESS: &str = "preferredBillingAddress";
/// Account creation timestamp.
pub const CREATED_DATE: &str = "createdDate";
/// Shipping service level code.
pub const SERVICE_LEVEL_CODE: &str = "serviceLevelCode";
/// Shipping service level display name, locale-scoped.
pub const SERVICE_LEVEL_NAME: &str = "serviceLevelName";
/// Shipping carrier name.
pub const CARRIER: &str = "carrier";
/// Whether a shipping service level is active.
pub const ACTIVE: &str = "active";

// ============================================================================
// Scoped-name composition
// ============================================================================

/// Locale-scoped variant of a field: `<base>_<locale>`.
pub fn locale_field(base: &str, locale: &LocaleTag) -> String {
    format!("{base}_{locale}")
}

/// Store-scoped variant of a field: `<base>_<storeCode>`.
pub fn store_field(base: &str, store_code: &str) -> String {
    format!("{base}_{store_code}")
}

/// Catalog-scoped variant of a field: `<base>_<catalogCode>`.
pub fn catalog_field(base: &str, catalog_code: &str) -> String {
    format!("{base}_{catalog_code}")
}

/// Price field for a catalog and price list: `price_<catalogCode>_<plGuid>`.
pub fn price_field(catalog_code: &str, price_list_guid: &str) -> String {
    format!("{PRICE}_{catalog_code}_{price_list_guid}")
}

/// Featured-rank field for a category: `featured_<categoryUid>`.
pub fn featured_field(category_uid: u64) -> String {
    format!("{FEATURED}_{category_uid}")
}

/// Attribute field: `attr_<key>`, locale-suffixed when the attribute is
/// locale-dependent.
pub fn attribute_field(attribute: &Attribute, locale: &LocaleTag) -> String {
    if attribute.localized {
        format!("attr_{}_{locale}", attribute.key)
    } else {
        format!("attr_{}", attribute.key)
    }
}

/// SKU option field: `skuOption_<optionKey>_<locale>`.
pub fn sku_option_field(option_key: &str, locale: &LocaleTag) -> String {
    format!("skuOption_{option_key}_{locale}")
}

// ============================================================================
// Tests
// ============================================================================
