//! Contract and amendment number extraction.

use super::keywords::{AMENDMENT, CONTRACT};
use super::locator::{find_line_value_where, LOOKAHEAD_SLACK};
use super::patterns::{
    AMENDMENT_DIGITS, AMENDMENT_HEADER, AMENDMENT_LOOSE, CONTRACT_CODE, CONTRACT_LOOSE,
    CONTRACT_TOKEN, FILENAME_CODE, FILENAME_STEM,
};
use super::FieldExtractor;

/// Contract number extractor.
///
/// Tries, in order: a domain-coded number anywhere in the text, a labeled
/// single-token value, a loose "Contract No" pattern, then the file name.
#[derive(Debug, Clone, Default)]
pub struct ContractNumberExtractor {
    filename: Option<String>,
}

impl ContractNumberExtractor {
    /// Create a new contract number extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the source file name as the last fallback.
    pub fn with_filename(mut self, filename: Option<&str>) -> Self {
        self.filename = filename.map(str::to_string);
        self
    }
}

impl FieldExtractor for ContractNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(found) = CONTRACT_CODE.find(text) {
            return Some(found.as_str().to_uppercase());
        }

        if let Some(value) =
            find_line_value_where(text, CONTRACT, LOOKAHEAD_SLACK, |v| CONTRACT_TOKEN.is_match(v))
        {
            return Some(value);
        }

        if let Some(caps) = CONTRACT_LOOSE.captures(text) {
            return Some(caps[1].to_string());
        }

        self.filename.as_deref().and_then(contract_number_from_filename)
    }
}

/// Extract a contract number from text alone.
pub fn extract_contract_number(text: &str) -> Option<String> {
    ContractNumberExtractor::new().extract(text)
}

/// Derive a contract number from a file name such as `PO4500123.pdf`.
pub fn contract_number_from_filename(filename: &str) -> Option<String> {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    if let Some(found) = FILENAME_CODE.find(name) {
        return Some(found.as_str().to_uppercase());
    }

    let stem = name.split('.').next().unwrap_or(name);
    if FILENAME_STEM.is_match(stem) && stem.chars().any(|c| c.is_ascii_digit()) {
        return Some(stem.to_uppercase());
    }

    None
}

/// Amendment number extractor. Absence means amendment `0`.
#[derive(Debug, Clone, Default)]
pub struct AmendmentExtractor;

impl AmendmentExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AmendmentExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(value) =
            find_line_value_where(text, AMENDMENT, LOOKAHEAD_SLACK, |v| AMENDMENT_DIGITS.is_match(v))
        {
            return Some(value);
        }

        if let Some(caps) = AMENDMENT_LOOSE.captures(text) {
            return Some(caps[1].to_string());
        }

        // Header row with the number on the following line
        let lines: Vec<&str> = text.lines().collect();
        for (index, line) in lines.iter().enumerate() {
            if !AMENDMENT_HEADER.is_match(line) {
                continue;
            }
            if let Some(next) = lines.get(index + 1) {
                let next = next.trim();
                if AMENDMENT_DIGITS.is_match(next) {
                    return Some(next.to_string());
                }
            }
        }

        None
    }
}

/// Extract the amendment number, defaulting to `0`.
pub fn extract_amendment_number(text: &str) -> String {
    AmendmentExtractor::new()
        .extract(text)
        .unwrap_or_else(|| "0".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_coded_contract_number() {
        let text = "Scheduling agreement\nContract No: PO1234567\nPage 1 of 3";
        assert_eq!(extract_contract_number(text), Some("PO1234567".to_string()));

        assert_eq!(
            extract_contract_number("reference ctr-20441 applies"),
            Some("CTR-20441".to_string())
        );
    }

    #[test]
    fn test_labeled_contract_number() {
        let text = "Vertragsnummer: 4500098765\nDatum: 01.02.2024";
        assert_eq!(extract_contract_number(text), Some("4500098765".to_string()));
    }

    #[test]
    fn test_labeled_value_with_spaces_is_skipped() {
        let text = "Contract: see attached schedule\nOrder Number: A-778812";
        assert_eq!(extract_contract_number(text), Some("A-778812".to_string()));
    }

    #[test]
    fn test_filename_fallback() {
        let extractor = ContractNumberExtractor::new().with_filename(Some("scans/PO98765.pdf"));
        assert_eq!(extractor.extract("no numbers here"), Some("PO98765".to_string()));

        assert_eq!(
            contract_number_from_filename("4711ab.pdf"),
            Some("4711AB".to_string())
        );
        assert_eq!(contract_number_from_filename("contract.pdf"), None);
        assert_eq!(ContractNumberExtractor::new().extract("no numbers here"), None);
    }

    #[test]
    fn test_amendment_number() {
        assert_eq!(extract_amendment_number("Amendment No: 3"), "3");
        assert_eq!(extract_amendment_number("Revision Level: 12"), "12");
        assert_eq!(extract_amendment_number("Rev. 2 dated today"), "2");
        assert_eq!(
            extract_amendment_number("CONTRACT NUMBER   AMENDMENT NUMBER\n4\nother"),
            "4"
        );
        assert_eq!(extract_amendment_number("Original issue"), "0");
    }
}
