//! DUNS number extraction.

use lazy_static::lazy_static;

use super::locator::{find_line_value_where, LOOKAHEAD_SLACK};
use super::patterns::{PatternCache, DUNS_DIGITS};
use super::FieldExtractor;

lazy_static! {
    static ref NEAR_LABEL_PATTERNS: PatternCache = PatternCache::new();
}

/// Characters allowed between a DUNS label and its digits.
const LABEL_WINDOW: usize = 50;

/// DUNS extractor over a keyword list.
#[derive(Debug, Clone)]
pub struct DunsExtractor {
    keywords: &'static [&'static str],
}

impl DunsExtractor {
    /// Create a DUNS extractor for the given labels.
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }

    fn near_label(&self, text: &str) -> Option<String> {
        let labels: Vec<String> = self.keywords.iter().map(|k| regex::escape(k)).collect();
        let labels = labels.join("|");
        let pattern = NEAR_LABEL_PATTERNS.get_or_compile(&labels, || {
            format!(r"(?is)(?:{}).{{0,{}}}?(\d{{9}})", labels, LABEL_WINDOW)
        })?;
        pattern.captures(text).map(|caps| caps[1].to_string())
    }
}

impl FieldExtractor for DunsExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        let labeled = find_line_value_where(text, self.keywords, LOOKAHEAD_SLACK, |value| {
            DUNS_DIGITS.is_match(value)
        });
        if let Some(value) = labeled {
            return DUNS_DIGITS.find(&value).map(|m| m.as_str().to_string());
        }

        self.near_label(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::rules::keywords::{DELIVERY_DUNS, DUNS, SHIP_FROM_DUNS};

    #[test]
    fn test_labeled_duns() {
        let text = "DUNS: 123456789\nShip From DUNS: 987654321";
        assert_eq!(DunsExtractor::new(DUNS).extract(text), Some("123456789".to_string()));
        assert_eq!(
            DunsExtractor::new(SHIP_FROM_DUNS).extract(text),
            Some("987654321".to_string())
        );
        assert_eq!(DunsExtractor::new(DELIVERY_DUNS).extract(text), None);
    }

    #[test]
    fn test_duns_near_label() {
        let text = "D-U-N-S (see registry)\n\n\n  no. 0123456789";
        assert_eq!(DunsExtractor::new(DUNS).extract(text), Some("012345678".to_string()));
    }
}
