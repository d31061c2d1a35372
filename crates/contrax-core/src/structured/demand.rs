//! Demand-contract XML dialect (`<CONTRACT>` root with fixed child tags).

use crate::contract::rules::{extract_country, format_date};
use crate::models::fields::{ExtractedFields, Field};

use super::xml::XmlDocument;
use super::StructuredAdapter;

/// Activity texts shorter than this double as the program name.
const PROGRAM_FROM_ACTIVITY_MAX: usize = 50;

/// Tag-to-field mapping for the demand-contract dialect.
#[derive(Debug, Clone, Default)]
pub struct DemandContractAdapter;

impl DemandContractAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl StructuredAdapter for DemandContractAdapter {
    fn name(&self) -> &str {
        "demand-contract"
    }

    fn root_tag(&self) -> &str {
        "CONTRACT"
    }

    fn map(&self, doc: &XmlDocument) -> ExtractedFields {
        let text = |tag: &str| doc.text(tag).map(str::to_string);
        let mut fields = ExtractedFields::new();

        fields.set_opt(Field::ContractNumber, text("CONTRACT_NO"));
        fields.set_opt(Field::AmendmentNumber, text("VER_NO"));
        fields.set_opt(Field::PartNumber, text("PRODUCT"));
        fields.set_opt(Field::PartDescription, text("DESCRIPTION"));

        let order_date = format_date(doc.text("ORDER_DATE").unwrap_or_default());
        fields.set(Field::IssueDate, order_date.clone());
        fields.set(Field::EffectiveDate, order_date);

        let supplier_duns = text("SUPPLIER");
        fields.set_opt(Field::DunsNumber, supplier_duns.clone());
        fields.set_opt(Field::ShipFromDuns, supplier_duns.clone());
        fields.set_opt(Field::ManufacturingDunsNumber, supplier_duns);
        fields.set_opt(Field::SellerNameAndAddress, text("SUPPLIER_NAME"));

        let demand_location = text("DEMAND_LOCATION_DESC");
        fields.set_opt(Field::BuyerNameAndAddress, demand_location.clone());
        fields.set_opt(Field::ClientName, demand_location.clone());
        let shipping_to = match (&demand_location, doc.text("DEMAND_LOCATION")) {
            (Some(name), Some(code)) => Some(format!("{name} ({code})")),
            (name, _) => name.clone(),
        };
        fields.set_opt(Field::ShippingTo, shipping_to);

        if let Some(location) = doc.text("PRODUCT_LOCATION_DESC") {
            fields.set(Field::Lbe, extract_country(location));
            fields.set(Field::ManufacturingLocation, location);
        }

        let purchaser = text("PURCHASER_NAME");
        let purchasing_contact = purchaser.as_ref().map(|name| match doc.text("EMAIL") {
            Some(email) => format!("{name} {email}"),
            None => name.clone(),
        });
        fields.set_opt(Field::AccountManager, purchaser);
        fields.set_opt(Field::PurchasingContact, purchasing_contact);

        let activity = text("ACTIVITY_TEXT");
        let program = text("BMW_CBB_NAEL").or_else(|| {
            activity
                .clone()
                .filter(|a| a.chars().count() < PROGRAM_FROM_ACTIVITY_MAX)
        });
        fields.set_opt(Field::ProgramName, program);
        fields.set_opt(Field::ReasonForIssuing, activity);

        fields.set_opt(Field::BasePrice, text("NET_PRICE"));
        fields.set_opt(
            Field::Currency,
            text("ITEM_CURRENCY").or_else(|| text("CURRENCY_HEAD")),
        );
        fields.set_opt(Field::UnitOfMeasure, text("PRICE_UOM"));
        fields.set_opt(Field::PaymentTerms, text("PAYMENT_TERMS"));
        fields.set_opt(Field::FreightTerms, text("INCOTERM"));
        fields.set_opt(Field::DeliveryTerms, text("DELIVERY_TERMS"));
        fields.set(Field::Language, "English");

        fields
    }
}
