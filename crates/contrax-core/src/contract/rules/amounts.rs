//! Price and currency extraction.

use super::keywords::CURRENCY;
use super::locator::{find_line_value, find_line_value_where, PRICE_LOOKAHEAD_SLACK};
use super::patterns::{CURRENCY_CODE, CURRENCY_CODE_STRICT};
use super::FieldExtractor;

/// Currency assumed when nothing in the text names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Price extractor over a keyword list. Values must contain a digit.
#[derive(Debug, Clone)]
pub struct PriceExtractor {
    keywords: &'static [&'static str],
}

impl PriceExtractor {
    /// Create a price extractor for the given labels.
    pub fn new(keywords: &'static [&'static str]) -> Self {
        Self { keywords }
    }
}

impl FieldExtractor for PriceExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        find_line_value_where(text, self.keywords, PRICE_LOOKAHEAD_SLACK, |value| {
            value.chars().any(|c| c.is_ascii_digit())
        })
    }
}

/// Currency extractor. Always yields a code, falling back to USD.
#[derive(Debug, Clone, Default)]
pub struct CurrencyExtractor;

impl CurrencyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for CurrencyExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        if let Some(value) = find_line_value(text, CURRENCY) {
            if let Some(code) = CURRENCY_CODE.find(&value) {
                return Some(code.as_str().to_uppercase());
            }
        }

        if let Some(code) = CURRENCY_CODE_STRICT.find(text) {
            return Some(code.as_str().to_string());
        }

        if text.contains('$') {
            return Some("USD".to_string());
        }
        if text.contains('€') {
            return Some("EUR".to_string());
        }

        Some(DEFAULT_CURRENCY.to_string())
    }
}

/// Extract the document currency as an ISO code.
pub fn extract_currency(text: &str) -> String {
    CurrencyExtractor::new()
        .extract(text)
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::rules::keywords::{PRICE, TOTAL_PRICE};

    #[test]
    fn test_price_requires_digit() {
        let text = "Price: see schedule\nUnit Price: 4.75 EUR / PC";
        assert_eq!(
            PriceExtractor::new(PRICE).extract(text),
            Some("4.75 EUR / PC".to_string())
        );
    }

    #[test]
    fn test_total_price() {
        let text = "Total Order Value: 12,500.00";
        assert_eq!(
            PriceExtractor::new(TOTAL_PRICE).extract(text),
            Some("12,500.00".to_string())
        );
        assert_eq!(PriceExtractor::new(TOTAL_PRICE).extract("no totals"), None);
    }

    #[test]
    fn test_labeled_currency() {
        assert_eq!(extract_currency("Currency: eur"), "EUR");
        assert_eq!(extract_currency("Währung: CHF / EUR"), "EUR");
    }

    #[test]
    fn test_currency_fallbacks() {
        assert_eq!(extract_currency("All amounts in GBP"), "GBP");
        assert_eq!(extract_currency("Base price 12,50 €"), "EUR");
        assert_eq!(extract_currency("Base price $12.50"), "USD");
        assert_eq!(extract_currency("nothing"), "USD");
    }
}
