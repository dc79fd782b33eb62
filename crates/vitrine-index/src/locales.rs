//! Per-locale and sortable field fan-out.
//!
//! The set of locales relevant to an entity is the union of supported
//! locales across every catalog the entity's categories belong to, not just
//! its master catalog: a storefront may fall back to another containing
//! catalog's locale list, so the index must carry every locale any of them
//! could request.
//!
//! Name fields are accumulating multi-value writes so that a bundle's
//! constituents can merge their names into the same fields as the top-level
//! entity. Sort fields go through [`IndexDocument::merge_sort_field`] and
//! stay single-valued.

use std::collections::BTreeSet;
use vitrine_catalog::{
    AttributeBinding, AttributeData, AttributeKind, AttributeValue, Brand, Category, Product,
    ProductSku, SkuOptionValue,
};
use vitrine_core::LocaleTag;

use crate::analyzer::ValueAnalyzer;
use crate::document::IndexDocument;
use crate::fields;

/// Emits locale-scoped and sortable field variants.
pub struct LocaleFieldExpander<'a> {
    analyzer: &'a dyn ValueAnalyzer,
}

impl<'a> LocaleFieldExpander<'a> {
    /// Creates an expander over the given analyzer.
    pub fn new(analyzer: &'a dyn ValueAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Locale-scoped name, brand, category and attribute fields for a
    /// product (the top-level entity or a bundle constituent).
    pub fn product_locale_fields(
        &self,
        doc: &mut IndexDocument,
        product: &Product,
        brand: Option<&Brand>,
        categories: &[Category],
        locales: &BTreeSet<LocaleTag>,
    ) {
        for locale in locales {
            if let Some(name) = product.display_name(locale) {
                doc.add_field_values(
                    fields::locale_field(fields::PRODUCT_NAME, locale),
                    [self.analyzer.analyze_text(name)],
                );
            }

            if let Some(brand_name) = brand.and_then(|brand| brand.display_name(locale)) {
                doc.add_field_values(
                    fields::locale_field(fields::BRAND_NAME, locale),
                    [self.analyzer.analyze_text(brand_name)],
                );
            }

            let category_names: Vec<String> = categories
                .iter()
                .filter_map(|category| category.display_name(locale))
                .map(|name| self.analyzer.analyze_text(name))
                .collect();
            doc.add_field_values(
                fields::locale_field(fields::CATEGORY_NAME, locale),
                category_names,
            );

            for binding in self.applicable_attributes(product, locale) {
                self.write_attribute(doc, &binding.value, locale);
            }

            if let Some(name) = product.default_category.display_name(locale) {
                doc.add_field_values(
                    fields::locale_field(fields::DEFAULT_CATEGORY_NAME, locale),
                    [self.analyzer.analyze_text(name)],
                );
            }
        }
    }

    /// Per-locale sort variants plus the locale-agnostic brand/category
    /// sort fields seeded from the master catalog's default locale.
    ///
    /// Only the top-level entity writes these: sorted fields must stay
    /// single-valued, so constituents never touch them.
    pub fn product_sort_fields(
        &self,
        doc: &mut IndexDocument,
        product: &Product,
        brand: Option<&Brand>,
        locales: &BTreeSet<LocaleTag>,
    ) {
        for locale in locales {
            if let Some(name) = product.display_name(locale) {
                doc.merge_sort_field(
                    fields::locale_field(fields::SORT_PRODUCT_NAME, locale),
                    self.analyzer.analyze_text(name),
                );
            }
            if let Some(brand_name) = brand.and_then(|brand| brand.display_name(locale)) {
                doc.merge_sort_field(
                    fields::locale_field(fields::SORT_BRAND_NAME, locale),
                    self.analyzer.analyze_text(brand_name),
                );
            }
            if let Some(name) = product.default_category.display_name(locale) {
                doc.merge_sort_field(
                    fields::locale_field(fields::SORT_DEFAULT_CATEGORY_NAME, locale),
                    self.analyzer.analyze_text(name),
                );
            }
        }

        let default_locale = &product.master_catalog.default_locale;
        if let Some(brand_name) = brand.and_then(|brand| brand.display_name(default_locale)) {
            doc.merge_sort_field(
                fields::SORT_BRAND_NAME,
                self.analyzer.analyze_text(brand_name),
            );
        }
        if let Some(name) = product.default_category.display_name(default_locale) {
            doc.merge_sort_field(
                fields::SORT_DEFAULT_CATEGORY_NAME,
                self.analyzer.analyze_text(name),
            );
        }
    }

    /// Unsuffixed brand and default-category name fields at the master
    /// catalog's default locale.
    ///
    /// These accumulate: constituents contribute theirs alongside the
    /// top-level entity's.
    pub fn default_locale_name_fields(
        &self,
        doc: &mut IndexDocument,
        product: &Product,
        brand: Option<&Brand>,
    ) {
        let default_locale = &product.master_catalog.default_locale;
        if let Some(brand_name) = brand.and_then(|brand| brand.display_name(default_locale)) {
            doc.add_field_values(
                fields::BRAND_NAME,
                [self.analyzer.analyze_text(brand_name)],
            );
        }
        if let Some(name) = product.default_category.display_name(default_locale) {
            doc.add_field_values(
                fields::DEFAULT_CATEGORY_NAME,
                [self.analyzer.analyze_text(name)],
            );
        }
    }

    /// The locale-agnostic consolidated product-name sort field, seeded
    /// from the master catalog's default locale.
    pub fn product_name_sort_field(&self, doc: &mut IndexDocument, product: &Product) {
        let default_locale = &product.master_catalog.default_locale;
        if let Some(name) = product.display_name(default_locale) {
            doc.merge_sort_field(fields::PRODUCT_NAME_SORT, self.analyzer.analyze_text(name));
        }
    }

    /// Locale-scoped fields for a SKU document: product name, brand, SKU
    /// configuration, SKU attributes and option values, with their
    /// per-locale sort variants.
    pub fn sku_locale_fields(
        &self,
        doc: &mut IndexDocument,
        sku: &ProductSku,
        product: &Product,
        brand: Option<&Brand>,
        locales: &BTreeSet<LocaleTag>,
    ) {
        for locale in locales {
            if let Some(name) = product.display_name(locale) {
                let token = self.analyzer.analyze_text(name);
                doc.add_field_values(
                    fields::locale_field(fields::PRODUCT_NAME, locale),
                    [token.clone()],
                );
                doc.merge_sort_field(
                    fields::locale_field(fields::SORT_PRODUCT_NAME, locale),
                    token,
                );
            }

            if let Some(brand_name) = brand.and_then(|brand| brand.display_name(locale)) {
                let token = self.analyzer.analyze_text(brand_name);
                doc.add_field_values(
                    fields::locale_field(fields::BRAND_NAME, locale),
                    [token.clone()],
                );
                doc.merge_sort_field(
                    fields::locale_field(fields::SORT_BRAND_NAME, locale),
                    token,
                );
            }

            if let Some(name) = sku.display_name(locale) {
                doc.add_field_values(
                    fields::locale_field(fields::SKU_CONFIGURATION, locale),
                    [self.analyzer.analyze_text(name)],
                );
            }

            for binding in &sku.attributes {
                if binding.applies_to(locale) {
                    self.write_attribute(doc, &binding.value, locale);
                }
            }

            for option_value in &sku.option_values {
                self.write_sku_option(doc, option_value, locale);
            }
        }
    }

    /// Writes one attribute value under its locale-qualified field name.
    ///
    /// Date and date-time attributes are analyzed as dates, decimal
    /// attributes as decimals, everything else through its string
    /// representation. Multi-valued attributes become a collection field.
    /// An absent payload writes nothing.
    pub fn write_attribute(
        &self,
        doc: &mut IndexDocument,
        value: &AttributeValue,
        locale: &LocaleTag,
    ) {
        let field = fields::attribute_field(&value.attribute, locale);
        let Some(data) = &value.data else {
            return;
        };

        if value.attribute.multi_valued {
            if let AttributeData::Multi(values) = data {
                let tokens: Vec<String> = values
                    .iter()
                    .map(|value| self.analyzer.analyze_text(value))
                    .collect();
                doc.add_field_values(field, tokens);
            }
            return;
        }

        let token = match (value.attribute.kind, data) {
            (AttributeKind::Date | AttributeKind::DateTime, AttributeData::Date(date)) => {
                self.analyzer.analyze_date(*date)
            }
            (AttributeKind::Decimal, AttributeData::Decimal(decimal)) => {
                self.analyzer.analyze_decimal(*decimal)
            }
            (_, AttributeData::Text(text)) => self.analyzer.analyze_text(text),
            (_, AttributeData::Decimal(decimal)) => self.analyzer.analyze_decimal(*decimal),
            (_, AttributeData::Date(date)) => self.analyzer.analyze_date(*date),
            (_, AttributeData::Multi(_)) => return,
        };
        doc.set_field(field, token);
    }

    /// Writes one SKU option value under its locale-qualified field name.
    pub fn write_sku_option(
        &self,
        doc: &mut IndexDocument,
        option_value: &SkuOptionValue,
        locale: &LocaleTag,
    ) {
        if let Some(name) = option_value.display_name(locale) {
            doc.set_field(
                fields::sku_option_field(&option_value.option_key, locale),
                self.analyzer.analyze_text(name),
            );
        }
    }

    /// Product attributes plus every SKU's attributes that apply to the
    /// given locale.
    fn applicable_attributes<'p>(
        &self,
        product: &'p Product,
        locale: &LocaleTag,
    ) -> Vec<&'p AttributeBinding> {
        let mut bindings: Vec<&AttributeBinding> = product
            .attributes
            .iter()
            .filter(|binding| binding.applies_to(locale))
            .collect();
        for sku in &product.skus {
            bindings.extend(
                sku.attributes
                    .iter()
                    .filter(|binding| binding.applies_to(locale)),
            );
        }
        bindings
    }
}

// ============================================================================
// Tests
// ============================================================================
