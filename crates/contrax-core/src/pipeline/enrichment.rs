//! When to ask the enrichment backend, and how its reply is merged.

use contrax_enrich::Enrichment;
use tracing::debug;

use crate::contract::leading_chars;
use crate::contract::rules::dates::format_date;
use crate::contract::rules::keywords::FOREIGN_MARKERS;
use crate::contract::rules::patterns::AMENDMENT_DIGITS;
use crate::models::config::ExtractionConfig;
use crate::models::fields::{ExtractedFields, Field, NOT_FOUND};

/// Fields that hold prose and may carry untranslated text.
pub const TRANSLATABLE_FIELDS: &[Field] = &[
    Field::PartDescription,
    Field::PaymentTerms,
    Field::FreightTerms,
    Field::DeliveryTerms,
    Field::ManufacturingLocation,
    Field::ShippingTo,
    Field::ProgramName,
    Field::Lbe,
    Field::ClientName,
    Field::BuyerNameAndAddress,
    Field::SellerNameAndAddress,
    Field::ReasonForIssuing,
];

/// Language marker for documents that went through translation.
pub const TRANSLATED_LANGUAGE: &str = "English (Translated)";

/// Baseline values this short are never blanked.
const MIN_BLANKABLE_CHARS: usize = 4;

/// Why enrichment is (or is not) warranted for a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentTrigger {
    /// A foreign contract keyword appears near the start of the text.
    pub foreign_language: bool,
    /// The start of the text is dense with non-ASCII characters.
    pub non_latin: bool,
    /// The baseline has no contract number.
    pub missing_contract: bool,
    /// The baseline has no part number.
    pub missing_part: bool,
}

impl EnrichmentTrigger {
    /// Evaluate the trigger conditions for a document and its baseline record.
    pub fn evaluate(text: &str, baseline: &ExtractedFields, config: &ExtractionConfig) -> Self {
        let probe = leading_chars(text, config.foreign_probe_chars);
        let non_ascii = leading_chars(text, config.non_latin_probe_chars)
            .chars()
            .filter(|c| !c.is_ascii())
            .count();

        let check_missing = config.enrich_on_missing_fields;
        Self {
            foreign_language: contains_foreign_marker(probe),
            non_latin: non_ascii > config.non_latin_threshold,
            missing_contract: check_missing && baseline.is_not_found(Field::ContractNumber),
            missing_part: check_missing && baseline.is_not_found(Field::PartNumber),
        }
    }

    /// Whether any condition holds.
    pub fn fires(&self) -> bool {
        self.foreign_language || self.non_latin || self.missing_contract || self.missing_part
    }
}

/// Whether the text contains any foreign contract keyword.
pub fn contains_foreign_marker(text: &str) -> bool {
    let lower = text.to_lowercase();
    FOREIGN_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Merge an enrichment reply into a baseline record.
///
/// Reply values overwrite the baseline when present and not `N/A`. An
/// amendment number must be all digits or the baseline value stays, and the
/// issue date is normalized and copied to the effective date. When the
/// trigger was the foreign-language signal, translatable fields the reply
/// left out are reset to `N/A` if the baseline value still contains a
/// foreign marker, and the language becomes "English (Translated)" unless
/// the reply named one.
pub fn merge_enrichment(
    baseline: &ExtractedFields,
    reply: &Enrichment,
    foreign_language: bool,
) -> ExtractedFields {
    let mut merged = baseline.clone();

    for (key, value) in reply.iter() {
        let Some(field) = Field::from_key(key) else {
            debug!(key, "ignoring unknown enrichment key");
            continue;
        };
        if !is_usable(value) {
            continue;
        }
        match field {
            Field::AmendmentNumber if !AMENDMENT_DIGITS.is_match(value.trim()) => {
                debug!(value, "rejecting non-numeric amendment number");
            }
            Field::IssueDate => merged.set(field, format_date(value)),
            _ => merged.set(field, value),
        }
    }

    let issue_date = merged.issue_date.clone();
    merged.set(Field::EffectiveDate, &issue_date);

    if foreign_language {
        for &field in TRANSLATABLE_FIELDS {
            if reply.get(field.key()).is_some_and(is_usable) {
                continue;
            }
            let current = merged.get(field);
            if current != NOT_FOUND
                && current.chars().count() >= MIN_BLANKABLE_CHARS
                && contains_foreign_marker(current)
            {
                debug!(field = field.key(), "blanking untranslated value");
                merged.reset(field);
            }
        }

        let language = merged.get(Field::Language);
        if language == "English" || language == NOT_FOUND {
            merged.set(Field::Language, TRANSLATED_LANGUAGE);
        }
    }

    merged
}

fn is_usable(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && value != NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn baseline() -> ExtractedFields {
        let mut fields = ExtractedFields::new();
        fields.set(Field::ContractNumber, "4500012345");
        fields.set(Field::PartNumber, "A2C-1");
        fields.set(Field::PaymentTerms, "60 Tage netto");
        fields.set(Field::PartDescription, "Halter Vorderachse");
        fields.set(Field::FreightTerms, "FCA Detroit");
        fields.set(Field::Language, "English");
        fields.set(Field::AmendmentNumber, "2");
        fields.set(Field::IssueDate, "2024-03-15");
        fields.set(Field::EffectiveDate, "2024-03-15");
        fields
    }

    #[test]
    fn test_trigger_conditions() {
        let config = ExtractionConfig::default();
        let fields = baseline();

        let trigger = EnrichmentTrigger::evaluate("Vertragsnummer 4500012345", &fields, &config);
        assert!(trigger.foreign_language);
        assert!(trigger.fires());

        let trigger = EnrichmentTrigger::evaluate("Contract No 4500012345", &fields, &config);
        assert_eq!(trigger, EnrichmentTrigger::default());
        assert!(!trigger.fires());

        let cjk = "合".repeat(60);
        assert!(EnrichmentTrigger::evaluate(&cjk, &fields, &config).non_latin);

        let trigger = EnrichmentTrigger::evaluate("plain", &ExtractedFields::new(), &config);
        assert!(trigger.missing_contract && trigger.missing_part);
    }

    #[test]
    fn test_missing_field_trigger_can_be_disabled() {
        let config = ExtractionConfig {
            enrich_on_missing_fields: false,
            ..ExtractionConfig::default()
        };
        let trigger = EnrichmentTrigger::evaluate("plain", &ExtractedFields::new(), &config);
        assert!(!trigger.fires());
    }

    #[test]
    fn test_foreign_marker_probe_is_bounded() {
        let config = ExtractionConfig {
            foreign_probe_chars: 10,
            ..ExtractionConfig::default()
        };
        let text = format!("{}vertrag", "x".repeat(20));
        assert!(!EnrichmentTrigger::evaluate(&text, &baseline(), &config).foreign_language);
    }

    #[test]
    fn test_reply_overwrites_present_values() {
        let reply = Enrichment::new()
            .with("paymentTerms", "60 days net")
            .with("partNumber", "N/A")
            .with("unknownKey", "x")
            .with("language", "German");

        let merged = merge_enrichment(&baseline(), &reply, true);
        assert_eq!(merged.payment_terms, "60 days net");
        assert_eq!(merged.part_number, "A2C-1");
        assert_eq!(merged.language, "German");
    }

    #[test]
    fn test_foreign_leftovers_blanked_without_reply() {
        let merged = merge_enrichment(&baseline(), &Enrichment::new(), true);
        assert_eq!(merged.payment_terms, "N/A");
        assert_eq!(merged.freight_terms, "FCA Detroit");
        assert_eq!(merged.contract_number, "4500012345");
        assert_eq!(merged.language, "English (Translated)");
    }

    #[test]
    fn test_no_blanking_without_foreign_signal() {
        let merged = merge_enrichment(&baseline(), &Enrichment::new(), false);
        assert_eq!(merged, baseline());
    }

    #[test]
    fn test_reply_amendment_must_be_digits() {
        let reply = Enrichment::new().with("amendmentNumber", "Amendment 3");
        assert_eq!(merge_enrichment(&baseline(), &reply, false).amendment_number, "2");

        let reply = Enrichment::new().with("amendmentNumber", " 3 ");
        assert_eq!(merge_enrichment(&baseline(), &reply, false).amendment_number, "3");
    }

    #[test]
    fn test_reply_issue_date_is_normalized() {
        let reply = Enrichment::new().with("issueDate", "15.04.2024");
        let merged = merge_enrichment(&baseline(), &reply, true);
        assert_eq!(merged.issue_date, "2024-04-15");
        assert_eq!(merged.effective_date, "2024-04-15");
    }

    #[test]
    fn test_effective_date_follows_issue_date() {
        let reply = Enrichment::new().with("effectiveDate", "2025-01-01");
        let merged = merge_enrichment(&baseline(), &reply, false);
        assert_eq!(merged.effective_date, merged.issue_date);
        assert_eq!(merged.effective_date, "2024-03-15");
    }
}
