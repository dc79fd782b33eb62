//! Promotion rule document assembly.

use vitrine_catalog::Rule;
use vitrine_core::Result;

use crate::assembler::{DocumentSource, Services};
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// Builds promotion rule documents.
pub struct RuleDocuments;

impl DocumentSource<Rule> for RuleDocuments {
    fn index_name(&self) -> &'static str {
        "promotion"
    }

    fn build(
        &self,
        rule: &Rule,
        services: &Services<'_>,
        _pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        doc.set_field(fields::OBJECT_UID, rule.uid.to_string());
        doc.set_field(fields::RULE_CODE, analyzer.analyze_text(&rule.code));
        doc.set_field(fields::PROMOTION_NAME, analyzer.analyze_text(&rule.name));
        if let Some(store_code) = &rule.store_code {
            doc.set_field(fields::STORE_CODE, analyzer.analyze_text(store_code));
        }
        if let Some(catalog_code) = &rule.catalog_code {
            doc.set_field(fields::CATALOG_CODE, analyzer.analyze_text(catalog_code));
        }
        if let Some(start_date) = rule.start_date {
            doc.set_field(fields::START_DATE, analyzer.analyze_date(start_date));
        }
        if let Some(end_date) = rule.end_date {
            doc.set_field(fields::END_DATE, analyzer.analyze_date(end_date));
        }
        doc.set_field(fields::ENABLED, rule.enabled.to_string());

        for locale in rule.display_names.locales() {
            if let Some(name) = rule.display_names.get(locale) {
                doc.set_field(
                    fields::locale_field(fields::PROMOTION_DISPLAY_NAME, locale),
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
