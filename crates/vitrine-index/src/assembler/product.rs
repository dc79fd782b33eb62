//! Product document assembly.

use vitrine_catalog::{Brand, Product};
use vitrine_core::{Error, Result};

use crate::assembler::{
    write_containing_store_codes, write_displayable_fields, DocumentSource, Services,
};
use crate::availability::{AvailabilityReport, AvailabilityResolver};
use crate::constituents::ConstituentFlattener;
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;
use crate::locales::LocaleFieldExpander;
use crate::pricing::PriceFieldAssembler;

/// Score boost for rank 1; higher ranks divide it down.
pub const FEATURED_RANK_BOOST: u32 = 1000;

/// Builds product documents.
///
/// The full pipeline: identity fields, catalog availability, brand and SKU
/// codes, featuredness, per-store displayability, price fields, store
/// codes, locale expansion, sort fields and, for bundles, constituent
/// flattening.
pub struct ProductDocuments;

impl DocumentSource<Product> for ProductDocuments {
    fn index_name(&self) -> &'static str {
        "product"
    }

    fn build(
        &self,
        product: &Product,
        services: &Services<'_>,
        pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        self.identity_fields(&mut doc, product, services);

        let resolver = AvailabilityResolver::new(services.categories);
        let report = resolver.resolve(&product.category_uids);
        if report.is_empty() {
            // A product outside any category cannot be browsed to at all;
            // the caller logs and moves on to the next entity.
            return Err(Error::missing_field(fields::PRODUCT_CATEGORY));
        }
        self.availability_fields(&mut doc, &report);
        log::trace!("Availability resolved for {}", product.code);

        let brand = self.product_brand(product, services);
        self.brand_code_field(&mut doc, product, services);
        self.sku_code_fields(&mut doc, product, services);
        self.featuredness_fields(&mut doc, product, services);

        let stores = pass.stores(services.stores);
        write_displayable_fields(&mut doc, product, &report, &stores);

        let prices = PriceFieldAssembler::new(services.prices).assemble(
            product,
            &stores,
            pass,
            services.price_list_assignments,
        );
        for (key, price) in prices {
            doc.set_field(
                key.field_name(),
                analyzer.analyze_decimal(price.lowest_price().amount),
            );
        }

        write_containing_store_codes(&mut doc, &report, services, pass);

        let expander = LocaleFieldExpander::new(analyzer);
        let locales = report.all_locales();
        expander.product_locale_fields(
            &mut doc,
            product,
            brand.as_ref(),
            &report.categories,
            &locales,
        );
        expander.default_locale_name_fields(&mut doc, product, brand.as_ref());
        expander.product_name_sort_field(&mut doc, product);
        expander.product_sort_fields(&mut doc, product, brand.as_ref(), &locales);

        if let Some(bundle) = &product.bundle {
            let flattener = ConstituentFlattener::new(
                &expander,
                services.brands,
                services.categories,
                analyzer,
            );
            flattener.flatten(&mut doc, bundle, product);
        }

        Ok(Some(doc))
    }
}

impl ProductDocuments {
    /// Uid, dates, product code, sales count and type name.
    fn identity_fields(&self, doc: &mut IndexDocument, product: &Product, services: &Services<'_>) {
        let analyzer = services.analyzer;
        doc.set_field(fields::OBJECT_UID, product.uid.to_string());
        doc.set_field(fields::START_DATE, analyzer.analyze_date(product.start_date));
        if let Some(end_date) = product.end_date {
            doc.set_field(fields::END_DATE, analyzer.analyze_date(end_date));
        }
        doc.set_field(
            fields::LAST_MODIFIED_DATE,
            analyzer.analyze_date(product.last_modified),
        );
        doc.set_field(fields::PRODUCT_CODE, analyzer.analyze_text(&product.code));
        doc.set_field(
            fields::SALES_COUNT,
            analyzer.analyze_integer(i64::from(product.sales_count)),
        );
        doc.set_field(
            fields::PRODUCT_TYPE_NAME,
            analyzer.analyze_text(&product.product_type),
        );
    }

    /// Catalog codes, category code lists and ancestor codes.
    ///
    /// Unavailable categories and ancestors are still listed; availability
    /// only shows in the per-store displayability flags.
    fn availability_fields(&self, doc: &mut IndexDocument, report: &AvailabilityReport) {
        doc.add_field_values(fields::CATALOG_CODE, report.catalog_codes());
        doc.add_field_values(fields::CATEGORY_CODE, report.category_codes.clone());
        for (catalog_code, codes) in &report.category_codes_by_catalog {
            doc.add_field_values(
                fields::catalog_field(fields::PRODUCT_CATEGORY, catalog_code),
                codes.clone(),
            );
        }
        doc.add_field_values(
            fields::PARENT_CATEGORY_CODES,
            report.parent_category_codes.clone(),
        );
        for (catalog_code, codes) in &report.master_category_codes_by_catalog {
            doc.add_field_values(
                fields::catalog_field(fields::MASTER_PRODUCT_CATEGORY, catalog_code),
                codes.clone(),
            );
        }
    }

    fn brand_code_field(&self, doc: &mut IndexDocument, product: &Product, services: &Services<'_>) {
        if let Some(code) = &product.brand_code {
            doc.add_field_values(fields::BRAND_CODE, [services.analyzer.analyze_text(code)]);
        }
    }

    /// SKU codes plus the display SKU code used for SKU-name sorting:
    /// the product code for multi-SKU products, the default SKU's code
    /// otherwise.
    fn sku_code_fields(&self, doc: &mut IndexDocument, product: &Product, services: &Services<'_>) {
        let codes: Vec<String> = product.skus.iter().map(|sku| sku.code.clone()).collect();
        doc.add_field_values(fields::PRODUCT_SKU_CODE, codes);

        let display_code = if product.has_multiple_skus() {
            &product.code
        } else {
            product
                .default_sku()
                .map(|sku| sku.code.as_str())
                .unwrap_or(&product.code)
        };
        doc.set_field(
            fields::DISPLAY_SKU_CODE,
            services.analyzer.analyze_text(display_code),
        );
    }

    /// The featured flag plus one rank-boost field per category.
    ///
    /// Every membership category gets a rank field, 0 when not featured,
    /// so that per-category ordering can always sort on it.
    fn featuredness_fields(
        &self,
        doc: &mut IndexDocument,
        product: &Product,
        services: &Services<'_>,
    ) {
        let mut featured = false;
        for &category_uid in &product.category_uids {
            let rank = product.featured_rank(category_uid);
            featured |= rank > 0;
            let boost = if rank > 0 { FEATURED_RANK_BOOST / rank } else { 0 };
            doc.set_field(
                fields::featured_field(category_uid),
                services.analyzer.analyze_integer(i64::from(boost)),
            );
        }
        doc.set_field(fields::FEATURED, featured.to_string());
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
