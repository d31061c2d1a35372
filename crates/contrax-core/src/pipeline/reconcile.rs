//! Page reconciliation: party and location fields on every page follow the
//! document record.

use crate::models::document::PageExtraction;
use crate::models::fields::{ExtractedFields, Field};

/// Fields copied from the document record onto each page.
pub const RECONCILED_FIELDS: [Field; 4] = [
    Field::BuyerNameAndAddress,
    Field::SellerNameAndAddress,
    Field::Lbe,
    Field::ManufacturingLocation,
];

/// Overwrite the reconciled fields of one page record.
pub fn reconcile_page(document: &ExtractedFields, page: &mut ExtractedFields) {
    for field in RECONCILED_FIELDS {
        page.set(field, document.get(field));
    }
}

/// Overwrite the reconciled fields of every page.
pub fn reconcile_pages(document: &ExtractedFields, pages: &mut [PageExtraction]) {
    for page in pages.iter_mut() {
        reconcile_page(document, &mut page.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_overwrites_only_party_fields() {
        let mut document = ExtractedFields::new();
        document.set(Field::BuyerNameAndAddress, "ACME GmbH\nMunich");
        document.set(Field::Lbe, "Germany");
        document.set(Field::PaymentTerms, "Net 60");

        let mut page_fields = ExtractedFields::new();
        page_fields.set(Field::BuyerNameAndAddress, "Something else");
        page_fields.set(Field::SellerNameAndAddress, "Page seller");
        page_fields.set(Field::PaymentTerms, "Net 30");

        let mut pages = vec![PageExtraction {
            page_number: 1,
            raw_text: String::new(),
            fields: page_fields,
        }];
        reconcile_pages(&document, &mut pages);

        let page = &pages[0].fields;
        for field in RECONCILED_FIELDS {
            assert_eq!(page.get(field), document.get(field));
        }
        assert_eq!(page.seller_name_and_address, "N/A");
        assert_eq!(page.payment_terms, "Net 30");
    }
}
