//! Common regex patterns for contract field extraction.

use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Domain-coded contract numbers (PO1234567, CTR-20441, SC 99812)
    pub static ref CONTRACT_CODE: Regex = Regex::new(
        r"(?i)\b(PO|CTR|CW|SC)[- ]?(\d{4,10})\b"
    ).unwrap();

    pub static ref CONTRACT_LOOSE: Regex = Regex::new(
        r"(?i)(?:Contract|Order)\s*(?:No|Number|#)[\s.:]+([A-Z0-9-]{4,20})"
    ).unwrap();

    pub static ref FILENAME_CODE: Regex = Regex::new(
        r"(?i)(PO\d+|CTR\d+|CW\d+)"
    ).unwrap();

    pub static ref FILENAME_STEM: Regex = Regex::new(
        r"^[A-Za-z0-9]{6,12}$"
    ).unwrap();

    pub static ref CONTRACT_TOKEN: Regex = Regex::new(
        r"^[A-Za-z0-9][A-Za-z0-9\-/._]{3,23}$"
    ).unwrap();

    // Amendment numbers
    pub static ref AMENDMENT_DIGITS: Regex = Regex::new(
        r"^\d{1,4}$"
    ).unwrap();

    pub static ref AMENDMENT_LOOSE: Regex = Regex::new(
        r"(?i)\b(?:Amendment|Amnd|Amdt|Rev|Revision)(?:[:.\s]+(?:No|Num|#|Number))?[:.\-#\s]+(\d{1,4})\b"
    ).unwrap();

    pub static ref AMENDMENT_HEADER: Regex = Regex::new(
        r"(?i)AMENDMENT NUMBER"
    ).unwrap();

    // DUNS-like identifiers
    pub static ref DUNS_DIGITS: Regex = Regex::new(
        r"\d{9}"
    ).unwrap();

    pub static ref DUNS_LABELED: Regex = Regex::new(
        r"(?i)duns(?:\s*(?:number|no|code|#))?[:.\s]*\d{9,15}"
    ).unwrap();

    pub static ref DUNS_TRAILING_LABEL: Regex = Regex::new(
        r"(?i)duns[:.\s]*$"
    ).unwrap();

    pub static ref BARE_DUNS: Regex = Regex::new(
        r"\b\d{9,15}\b"
    ).unwrap();

    // Currency codes
    pub static ref CURRENCY_CODE: Regex = Regex::new(
        r"(?i)\b(USD|EUR|GBP|CNY|JPY|CAD|MXN|AUD)\b"
    ).unwrap();

    pub static ref CURRENCY_CODE_STRICT: Regex = Regex::new(
        r"\b(USD|EUR|GBP|CNY|JPY|CAD|MXN)\b"
    ).unwrap();

    // Yes/no flags
    pub static ref FLAG_YES: Regex = Regex::new(
        r"(?i)\b(?:yes|y)\b"
    ).unwrap();

    pub static ref FLAG_NO: Regex = Regex::new(
        r"(?i)\b(?:no|n)\b"
    ).unwrap();

    // Contact details trailing a person's name
    pub static ref PHONE_SUFFIX: Regex = Regex::new(
        r"(?i)\b(?:Ph|Tel|Fax|Cell|Mobile)\b[\s.:\-]*[\d\-() ]*\d[\d\-() ]*"
    ).unwrap();

    pub static ref TRAILING_SEPARATORS: Regex = Regex::new(
        r"[-/|]+$"
    ).unwrap();

    // Dates
    pub static ref ISO_DATE_TOKEN: Regex = Regex::new(
        r"\b\d{4}[-./]\d{2}[-./]\d{2}\b"
    ).unwrap();

    pub static ref ISO_DATE: Regex = Regex::new(
        r"\b(\d{4})[.\-/](\d{1,2})[.\-/](\d{1,2})\b"
    ).unwrap();

    pub static ref NUMERIC_DATE: Regex = Regex::new(
        r"\b(\d{1,2})([.\-/])(\d{1,2})[.\-/](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref SPACED_DATE: Regex = Regex::new(
        r"\b(\d{1,2})\.?\s+(?:de\s+)?(\d{1,2})\.?\s+(?:de\s+)?(\d{4}|\d{2})\b"
    ).unwrap();

    // Receiving plants
    pub static ref ALL_BUYER_PLANTS: Regex = Regex::new(
        r"(?i)all\s+buyer'?s\s+plants"
    ).unwrap();

    // Value cleaning
    pub static ref LEADING_SEPARATORS: Regex = Regex::new(
        r"^[:.\-#\s]+"
    ).unwrap();

    pub static ref LABEL_FRAGMENT: Regex = Regex::new(
        r"(?i)^(?:and address|information|details|contact)[:.\-\s]*"
    ).unwrap();

    pub static ref REASON_PREFIX: Regex = Regex::new(
        r"(?i)^(?:reason\s+for\s+issuing\s+contract\s*[/\\]\s*amendment|reason\s+for\s+issuing\s+contract|reason\s+for\s+issuing|for\s+issuing)[:.\-\s]*"
    ).unwrap();

    pub static ref CONTRACT_AMENDMENT_PREFIX: Regex = Regex::new(
        r"(?i)^contract\s*[/\\]\s*amendment[:.\-\s]*"
    ).unwrap();

    pub static ref FOREIGN_LABEL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:Ancien Prix H\.T|d'application du prix|Designacion|Precio unitario|Divisa|Fecha|Vigencia)[:.\-\s]*"
    ).unwrap();

    pub static ref LABEL_COLON: Regex = Regex::new(
        r"(?s)^([^:]{1,40}):(.*)"
    ).unwrap();

    pub static ref SENTENCE_STARTER: Regex = Regex::new(
        r"(?i)^(?:The|This|Please|See|Refer|Attached|Subject|Regarding|Note)\b"
    ).unwrap();

    pub static ref NON_NAME_CHARS: Regex = Regex::new(
        r"[^a-zA-Z0-9\s,.\-]"
    ).unwrap();

    pub static ref FIVE_DIGITS: Regex = Regex::new(
        r"\d{5}"
    ).unwrap();

    pub static ref NUMERIC_OR_PUNCT: Regex = Regex::new(
        r"^[\d\-\s.]+$"
    ).unwrap();

    // Layout
    pub static ref SEGMENT_GAP: Regex = Regex::new(
        r"\s*\t\s*|\s{3,}"
    ).unwrap();

    pub static ref RULE_LINE: Regex = Regex::new(
        r"^[-_]{2,}$"
    ).unwrap();

    pub static ref LABEL_TAIL: Regex = Regex::new(
        r"(?i)^(?:\s*(?:and address|information|contact|details|code|number))+\s*$"
    ).unwrap();
}

/// Regexes built from keyword tables, compiled once per key.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: RwLock<HashMap<String, Regex>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern stored under `key`, compiling `source()` on first use.
    pub fn get_or_compile(&self, key: &str, source: impl FnOnce() -> String) -> Option<Regex> {
        if let Ok(patterns) = self.patterns.read() {
            if let Some(pattern) = patterns.get(key) {
                return Some(pattern.clone());
            }
        }

        let pattern = Regex::new(&source()).ok()?;
        if let Ok(mut patterns) = self.patterns.write() {
            patterns.insert(key.to_string(), pattern.clone());
        }
        Some(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_pattern_cache_compiles_once() {
        let cache = PatternCache::new();
        let builds = Cell::new(0);
        let source = || {
            builds.set(builds.get() + 1);
            r"(?i)price:\s*(\S+)".to_string()
        };

        let first = cache.get_or_compile("price", source).unwrap();
        let second = cache.get_or_compile("price", source).unwrap();
        assert_eq!(builds.get(), 1);
        assert_eq!(first.as_str(), second.as_str());
        assert_eq!(&second.captures("Price: 4.75").unwrap()[1], "4.75");
    }

    #[test]
    fn test_pattern_cache_rejects_bad_source() {
        let cache = PatternCache::new();
        assert!(cache.get_or_compile("broken", || "(".to_string()).is_none());
    }
}
