//! CM user document assembly.

use vitrine_catalog::CmUser;
use vitrine_core::Result;

use crate::assembler::{DocumentSource, Services};
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// Builds commerce-manager user documents.
pub struct CmUserDocuments;

impl DocumentSource<CmUser> for CmUserDocuments {
    fn index_name(&self) -> &'static str {
        "cmuser"
    }

    fn build(
        &self,
        user: &CmUser,
        services: &Services<'_>,
        _pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        doc.set_field(fields::OBJECT_UID, user.uid.to_string());
        doc.set_field(fields::USER_NAME, analyzer.analyze_text(&user.user_name));
        if let Some(first_name) = &user.first_name {
            doc.set_field(fields::FIRST_NAME, analyzer.analyze_text(first_name));
        }
        if let Some(last_name) = &user.last_name {
            doc.set_field(fields::LAST_NAME, analyzer.analyze_text(last_name));
        }
        if let Some(email) = &user.email {
            doc.set_field(fields::EMAIL, analyzer.analyze_text(email));
        }
        doc.set_field(fields::STATUS, analyzer.analyze_text(&user.status));
        doc.add_field_values(fields::USER_ROLE, user.roles.clone());
        doc.add_field_values(fields::CATALOG_CODE, user.catalog_codes.clone());
        doc.add_field_values(fields::STORE_CODE, user.store_codes.clone());
        doc.set_field(
            fields::ALL_CATALOGS_ACCESS,
            user.all_catalogs_access.to_string(),
        );
        doc.set_field(
            fields::ALL_STORES_ACCESS,
            user.all_stores_access.to_string(),
        );

        Ok(Some(doc))
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
    use crate::assembler::fakes::empty_services;
    use crate::assembler::DocumentAssembler;

    fn user() -> CmUser {
        CmUser {
            uid: 3,
            user_name: "jdoe".to_string(),
            first_name: Some("J".to_string()),
            last_name: None,
            email: Some("jdoe@example.com".to_string()),
            status: "ACTIVE".to_string(),
            roles: vec!["SUPERUSER".to_string(), "CMUSER".to_string()],
            catalog_codes: vec!["MAIN".to_string()],
            store_codes: Vec::new(),
            all_catalogs_access: false,
            all_stores_access: true,
        }
    }

    #[test]
    fn test_cm_user_document_fields() {
        let analyzer = TokenAnalyzer;
        let assembler = DocumentAssembler::new(empty_services(&analyzer));
        let mut pass = IndexingPass::new();
        let doc = assembler
            .assemble(&CmUserDocuments, Some(&user()), &mut pass)
            .unwrap()
            .unwrap();

        assert_eq!(doc.first_value("objectUid"), Some("3"));
        assert_eq!(doc.first_value("userName"), Some("jdoe"));
        assert_eq!(doc.first_value("firstName"), Some("J"));
        // Absent last name: no field at all
        assert!(!doc.contains_field("lastName"));
        assert_eq!(doc.first_value("status"), Some("ACTIVE"));
        assert_eq!(
            doc.values("userRole").unwrap(),
            &["SUPERUSER".to_string(), "CMUSER".to_string()]
        );
        assert_eq!(doc.first_value("catalogCode"), Some("MAIN"));
        assert!(!doc.contains_field("storeCode"));
        assert_eq!(doc.first_value("allCatalogsAccess"), Some("false"));
        assert_eq!(doc.first_value("allStoresAccess"), Some("true"));
    }
}
