//! Customer document assembly.

use vitrine_catalog::{Customer, CustomerAddress};
use vitrine_core::Result;

use crate::assembler::{DocumentSource, Services};
use crate::context::IndexingPass;
use crate::document::IndexDocument;
use crate::fields;

/// Builds customer documents.
///
/// A customer whose shared identifier is blank is not yet a usable account;
/// the build short-circuits with no document rather than indexing a stub.
pub struct CustomerDocuments;

impl DocumentSource<Customer> for CustomerDocuments {
    fn index_name(&self) -> &'static str {
        "customer"
    }

    fn build(
        &self,
        customer: &Customer,
        services: &Services<'_>,
        _pass: &mut IndexingPass,
    ) -> Result<Option<IndexDocument>> {
        if customer.shared_id.trim().is_empty() {
            log::debug!("Customer {} has a blank shared id; skipped", customer.uid);
            return Ok(None);
        }

        let mut doc = IndexDocument::new();
        let analyzer = services.analyzer;

        doc.set_field(fields::OBJECT_UID, customer.uid.to_string());
        doc.set_field(fields::SHARED_ID, analyzer.analyze_text(&customer.shared_id));
        if let Some(email) = &customer.email {
            doc.set_field(fields::EMAIL, analyzer.analyze_text(email));
        }
        if let Some(first_name) = &customer.first_name {
            doc.set_field(fields::FIRST_NAME, analyzer.analyze_text(first_name));
        }
        if let Some(last_name) = &customer.last_name {
            doc.set_field(fields::LAST_NAME, analyzer.analyze_text(last_name));
        }
        if let Some(phone_number) = &customer.phone_number {
            doc.set_field(fields::PHONE_NUMBER, analyzer.analyze_text(phone_number));
        }
        if let Some(address) = &customer.preferred_billing_address {
            doc.set_field(
                fields::PREFERRED_BILLING_ADDRESS,
                analyzer.analyze_text(&flatten_address(address)),
            );
        }
        doc.set_field(fields::STORE_CODE, analyzer.analyze_text(&customer.store_code));
        doc.set_field(
            fields::CREATED_DATE,
            analyzer.analyze_date(customer.created),
        );

        Ok(Some(doc))
    }
}

/// Joins the present address lines into one searchable token stream.
fn flatten_address(address: &CustomerAddress) -> String {
    let mut parts = vec![address.street1.as_str()];
    if let Some(street2) = &address.street2 {
        parts.push(street2);
    }
    parts.push(&address.city);
    if let Some(sub_country) = &address.sub_country {
        parts.push(sub_country);
    }
    parts.push(&address.country);
    parts.push(&address.zip_code);
    parts.retain(|part| !part.is_empty());
    parts.join(", ")
}

// ============================================================================
// Tests
// ============================================================================
