//! Shipping service level document assembly.

use vitrine_catalog::ShippingServiceLevel;
use vitrine_core::{LocaleTag, Result};

use crate::assembler::{DocumentSource, Services};
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// Builds shipping service level documents.
///
/// Names expand over the owning store's catalog locales; when the store is
/// unknown to the pass the snapshot's own name locales are used instead.
pub struct ShippingServiceLevelDocuments;

impl DocumentSource<ShippingServiceLevel> for ShippingServiceLevelDocuments {
    fn index_name(&self) -> &'static str {
        "shippingservicelevel"
    }

    fn build(
        &self,
        level: &ShippingServiceLevel,
        services: &Services<'_>,
        pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        doc.set_field(fields::OBJECT_UID, level.uid.to_string());
        doc.set_field(
            fields::SERVICE_LEVEL_CODE,
            analyzer.analyze_text(&level.code),
        );
        if let Some(carrier) = &level.carrier {
            doc.set_field(fields::CARRIER, analyzer.analyze_text(carrier));
        }
        doc.set_field(fields::STORE_CODE, analyzer.analyze_text(&level.store_code));
        doc.set_field(fields::ACTIVE, level.active.to_string());

        let stores = pass.stores(services.stores);
        let store = stores.iter().find(|store| store.code == level.store_code);
        let (locales, default_locale): (Vec<LocaleTag>, Option<LocaleTag>) = match store {
            Some(store) => (
                store.catalog.supported_locales.clone(),
                Some(store.catalog.default_locale.clone()),
            ),
            None => (
                level.display_names.locales().cloned().collect(),
                level.display_names.locales().next().cloned(),
            ),
        };

        for locale in &locales {
            if let Some(name) = level.display_names.get(locale) {
                doc.set_field(
                    fields::locale_field(fields::SERVICE_LEVEL_NAME, locale),
                    analyzer.analyze_text(name),
                );
            }
        }
        if let Some(default_locale) = default_locale {
            if let Some(name) = level.display_names.get(&default_locale) {
                doc.merge_sort_field(
                    fields::SORT_SERVICE_LEVEL_NAME,
                    analyzer.analyze_text(name),
                );
            }
        }

        Ok(Some(doc))
    }
}

// ============================================================================
// Tests
// ============================================================================
