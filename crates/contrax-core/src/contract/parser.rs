//! Heuristic contract parser: runs every field extractor over free text.

use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::fields::{ExtractedFields, Field, NOT_FOUND};

use super::rules::{
    amounts::{extract_currency, PriceExtractor},
    clean::is_legal_text,
    country::extract_country,
    dates::format_date,
    duns::DunsExtractor,
    flags::extract_hazard_flag,
    identifiers::{extract_amendment_number, ContractNumberExtractor},
    keywords,
    locator::{find_block_value, find_line_value},
    parties::{client_name, extract_receiving_plants, AccountManagerExtractor, LocationExtractor},
    patterns::ISO_DATE_TOKEN,
    FieldExtractor,
};

/// Leading characters searched for an ISO date when no date label matches.
const DATE_FALLBACK_CHARS: usize = 1000;

const PARTY_BLOCK_LINES: usize = 12;
const SHIPPING_BLOCK_LINES: usize = 8;
const MAILING_BLOCK_LINES: usize = 10;
const REASON_BLOCK_LINES: usize = 5;

/// Label-driven parser producing a complete [`ExtractedFields`] record.
///
/// Parsing never fails; fields that cannot be located keep their defaults.
#[derive(Debug, Clone)]
pub struct HeuristicParser {
    header_context_chars: usize,
    use_filename_fallback: bool,
}

impl HeuristicParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            header_context_chars: config.header_context_chars,
            use_filename_fallback: config.use_filename_fallback,
        }
    }

    /// Set how much leading text is searched for buyer and seller blocks.
    pub fn with_header_context(mut self, chars: usize) -> Self {
        self.header_context_chars = chars;
        self
    }

    /// Set whether the file name may supply the contract number.
    pub fn with_filename_fallback(mut self, enabled: bool) -> Self {
        self.use_filename_fallback = enabled;
        self
    }

    /// Parse a whole document.
    pub fn parse(&self, text: &str, filename: Option<&str>) -> ExtractedFields {
        let filename = filename.filter(|_| self.use_filename_fallback);
        self.parse_text(text, filename)
    }

    /// Parse a single page. The file name is never consulted.
    pub fn parse_page(&self, text: &str) -> ExtractedFields {
        self.parse_text(text, None)
    }

    fn parse_text(&self, text: &str, filename: Option<&str>) -> ExtractedFields {
        let header = leading_chars(text, self.header_context_chars);
        let mut fields = ExtractedFields::new();

        fields.set_opt(
            Field::ContractNumber,
            ContractNumberExtractor::new().with_filename(filename).extract(text),
        );
        fields.set(Field::AmendmentNumber, extract_amendment_number(text));
        fields.set_opt(Field::PartNumber, find_line_value(text, keywords::PART));

        let issue_date = format_date(&self.issue_date_raw(text).unwrap_or_default());
        fields.set(Field::IssueDate, issue_date.clone());
        fields.set(Field::EffectiveDate, issue_date);

        let ship_from_duns = DunsExtractor::new(keywords::SHIP_FROM_DUNS).extract(text);
        let delivery_duns = DunsExtractor::new(keywords::DELIVERY_DUNS).extract(text);
        let general_duns = DunsExtractor::new(keywords::DUNS)
            .extract(text)
            .or_else(|| ship_from_duns.clone());
        fields.set_opt(Field::DunsNumber, general_duns);
        fields.set_opt(Field::ShipFromDuns, ship_from_duns.clone());
        fields.set_opt(Field::ManufacturingDunsNumber, ship_from_duns);
        fields.set_opt(Field::DeliveryDuns, delivery_duns);

        let buyer = find_block_value(header, keywords::BUYER, PARTY_BLOCK_LINES)
            .or_else(|| find_line_value(header, keywords::BUYER))
            .unwrap_or_else(|| NOT_FOUND.to_string());
        let seller = find_block_value(header, keywords::SELLER, PARTY_BLOCK_LINES)
            .filter(|value| !is_legal_text(value));

        fields.set(Field::ClientName, client_name(&buyer));
        if !is_legal_text(&buyer) {
            fields.set(Field::BuyerNameAndAddress, buyer);
        }

        let location = match &seller {
            Some(seller) => Some(seller.clone()),
            None => {
                debug!("no seller block, falling back to location labels");
                LocationExtractor::new().extract(text)
            }
        };
        fields.set_opt(Field::SellerNameAndAddress, seller);
        if let Some(location) = location {
            fields.set(Field::Lbe, extract_country(&location));
            fields.set(Field::ManufacturingLocation, location);
        }

        fields.set_opt(Field::AccountManager, AccountManagerExtractor::new().extract(text));
        fields.set_opt(
            Field::ShippingTo,
            find_block_value(text, keywords::SHIPPING_TO, SHIPPING_BLOCK_LINES),
        );
        fields.set_opt(
            Field::MailingAddressInformation,
            find_block_value(text, keywords::MAILING_ADDRESS, MAILING_BLOCK_LINES),
        );
        fields.set_opt(Field::ReceivingPlants, extract_receiving_plants(text));
        fields.set_opt(
            Field::ReasonForIssuing,
            find_block_value(text, keywords::REASON_FOR_ISSUING, REASON_BLOCK_LINES),
        );

        fields.set_opt(Field::BasePrice, PriceExtractor::new(keywords::PRICE).extract(text));
        fields.set_opt(Field::TotalPrice, PriceExtractor::new(keywords::TOTAL_PRICE).extract(text));
        fields.set(Field::Currency, extract_currency(text));
        fields.set(Field::HazardousMaterialIndicator, extract_hazard_flag(text));

        let line_fields: [(Field, &[&str]); 16] = [
            (Field::ProgramName, keywords::PROGRAM),
            (Field::PartDescription, keywords::PART_DESCRIPTION),
            (Field::DrawingNumber, keywords::DRAWING_NUMBER),
            (Field::LessFinishPartNumber, keywords::LESS_FINISH),
            (Field::UnitOfMeasure, keywords::UNIT_OF_MEASURE),
            (Field::PaymentTerms, keywords::PAYMENT_TERMS),
            (Field::FreightTerms, keywords::FREIGHT_TERMS),
            (Field::DeliveryTerms, keywords::DELIVERY_TERMS),
            (Field::DailyCapacity, keywords::DAILY_CAPACITY),
            (Field::HoursPerDay, keywords::HOURS_PER_DAY),
            (Field::ContainerType, keywords::CONTAINER_TYPE),
            (Field::RawMaterialCertAnalysis, keywords::RAW_MATERIAL_CERT),
            (Field::RawMaterialAnnualCert, keywords::ANNUAL_CERT),
            (Field::SampleRequiredBy, keywords::SAMPLE_REQUIRED_BY),
            (Field::PurchasingContact, keywords::PURCHASING_CONTACT),
            (Field::BuyerCode, keywords::BUYER_CODE),
        ];
        for (field, labels) in line_fields {
            fields.set_opt(field, find_line_value(text, labels));
        }

        fields.set(Field::Language, "English");

        debug!(
            populated = fields.populated_count(),
            contract = %fields.contract_number,
            "heuristic pass complete"
        );
        fields
    }

    fn issue_date_raw(&self, text: &str) -> Option<String> {
        find_line_value(text, keywords::DATE).or_else(|| {
            let head = leading_chars(text, DATE_FALLBACK_CHARS);
            ISO_DATE_TOKEN.find(head).map(|m| m.as_str().to_string())
        })
    }
}

impl Default for HeuristicParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Longest prefix of `text` holding at most `chars` characters.
pub(crate) fn leading_chars(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "\
SUPPLIER CONTRACT
Contract No: PO1234567
Amendment No: 2
Issue Date: 15.03.2024

BUYER NAME AND ADDRESS                  SELLER NAME AND ADDRESS
ACME Automotive GmbH                    Precision Parts Inc
Leopoldstrasse 1                        100 Main Street
80802 Munich                            Detroit, MI 48226
Germany                                 USA
Phone: +49 89 1234                      Phone: 313-555-0100

Part Number: A2C-99812-01
Part Description: Bracket, front axle
Ship From DUNS: 987654321
Unit Price: 4.75
Currency: EUR
Payment Terms: Net 60 days
Freight Terms: FCA Detroit
Hazardous Material: No
Account Manager: Jane Doe Tel: 313-555-0100
";

    #[test]
    fn test_parse_sample_contract() {
        let fields = HeuristicParser::new().parse(SAMPLE, Some("scan.pdf"));

        assert_eq!(fields.contract_number, "PO1234567");
        assert_eq!(fields.amendment_number, "2");
        assert_eq!(fields.issue_date, "2024-03-15");
        assert_eq!(fields.effective_date, "2024-03-15");
        assert_eq!(fields.part_number, "A2C-99812-01");
        assert_eq!(fields.part_description, "Bracket, front axle");
        assert_eq!(
            fields.buyer_name_and_address,
            "ACME Automotive GmbH\nLeopoldstrasse 1\n80802 Munich\nGermany"
        );
        assert_eq!(fields.client_name, "ACME Automotive GmbH");
        assert_eq!(
            fields.seller_name_and_address,
            "Precision Parts Inc\n100 Main Street\nDetroit, MI 48226\nUSA"
        );
        assert_eq!(fields.manufacturing_location, fields.seller_name_and_address);
        assert_eq!(fields.lbe, "United States");
        assert_eq!(fields.ship_from_duns, "987654321");
        assert_eq!(fields.duns_number, "987654321");
        assert_eq!(fields.manufacturing_duns_number, "987654321");
        assert_eq!(fields.base_price, "4.75");
        assert_eq!(fields.currency, "EUR");
        assert_eq!(fields.payment_terms, "Net 60 days");
        assert_eq!(fields.freight_terms, "FCA Detroit");
        assert_eq!(fields.hazardous_material_indicator, "No");
        assert_eq!(fields.account_manager, "Jane Doe");
        assert_eq!(fields.language, "English");
    }

    #[test]
    fn test_every_field_is_populated_with_string() {
        let fields = HeuristicParser::new().parse("lorem ipsum", None);
        for (field, value) in fields.iter() {
            assert!(!value.is_empty(), "{} is empty", field.key());
        }
        assert_eq!(fields.contract_number, "N/A");
        assert_eq!(fields.amendment_number, "0");
        assert_eq!(fields.currency, "USD");
        assert_eq!(fields.hazardous_material_indicator, "No");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = HeuristicParser::new();
        let first = serde_json::to_string(&parser.parse(SAMPLE, None)).unwrap();
        let second = serde_json::to_string(&parser.parse(SAMPLE, None)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filename_fallback_only_for_documents() {
        let parser = HeuristicParser::new();
        assert_eq!(
            parser.parse("no identifiers", Some("CW55501.pdf")).contract_number,
            "CW55501"
        );
        assert_eq!(parser.parse_page("no identifiers").contract_number, "N/A");
        assert_eq!(
            parser
                .clone()
                .with_filename_fallback(false)
                .parse("no identifiers", Some("CW55501.pdf"))
                .contract_number,
            "N/A"
        );
    }

    #[test]
    fn test_iso_date_fallback() {
        let fields = HeuristicParser::new().parse("Printed 2023-11-02 by system", None);
        assert_eq!(fields.issue_date, "2023-11-02");
    }

    #[test]
    fn test_location_fallback_without_seller() {
        let text = "Manufacturing Location:\nPlant 4\nSalonta, Bihor\n";
        let fields = HeuristicParser::new().parse(text, None);
        assert_eq!(fields.seller_name_and_address, "N/A");
        assert_eq!(fields.manufacturing_location, "Plant 4\nSalonta, Bihor");
        assert_eq!(fields.lbe, "Romania");
    }

    #[test]
    fn test_leading_chars() {
        assert_eq!(leading_chars("München", 3), "Mün");
        assert_eq!(leading_chars("abc", 10), "abc");
    }
}
