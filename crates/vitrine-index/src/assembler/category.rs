//! Category document assembly.

use std::collections::BTreeSet;
use vitrine_catalog::Category;
use vitrine_core::Result;

use crate::assembler::{DocumentSource, Services};
use crate::availability::AvailabilityResolver;
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// Builds category documents.
///
/// Ancestor codes are recorded regardless of availability, exactly as for
/// products: browse-path search must reach unavailable branches too.
pub struct CategoryDocuments;

impl DocumentSource<Category> for CategoryDocuments {
    fn index_name(&self) -> &'static str {
        "category"
    }

    fn build(
        &self,
        category: &Category,
        services: &Services<'_>,
        _pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        doc.set_field(fields::OBJECT_UID, category.uid.to_string());
        doc.set_field(fields::CATEGORY_CODE, analyzer.analyze_text(&category.code));
        doc.set_field(
            fields::CATALOG_CODE,
            analyzer.analyze_text(&category.catalog.code),
        );
        if let Some(start_date) = category.start_date {
            doc.set_field(fields::START_DATE, analyzer.analyze_date(start_date));
        }
        if let Some(end_date) = category.end_date {
            doc.set_field(fields::END_DATE, analyzer.analyze_date(end_date));
        }
        doc.set_field(fields::CATEGORY_LINKED, category.linked.to_string());

        let mut parent_codes = BTreeSet::new();
        AvailabilityResolver::new(services.categories).walk_ancestors(category, &mut parent_codes);
        doc.add_field_values(fields::PARENT_CATEGORY_CODES, parent_codes);

        for locale in &category.catalog.supported_locales {
            if let Some(name) = category.display_name(locale) {
                doc.set_field(
                    fields::locale_field(fields::CATEGORY_NAME, locale),
                    analyzer.analyze_text(name),
                );
            }
        }
        if let Some(name) = category.display_name(&category.catalog.default_locale) {
            doc.merge_sort_field(fields::SORT_CATEGORY_NAME, analyzer.analyze_text(name));
        }

        Ok(Some(doc))
    }
}

// ============================================================================
// Tests
// ============================================================================
