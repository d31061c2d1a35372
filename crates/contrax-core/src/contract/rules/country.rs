//! Country resolution from free-form addresses.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::fields::NOT_FOUND;

/// Country names and well-known cities, checked in this order.
const COUNTRY_MAP: &[(&str, &str)] = &[
    ("UNITED STATES", "United States"),
    ("USA", "United States"),
    ("U.S.A.", "United States"),
    ("AMERICA", "United States"),
    ("MEXICO", "Mexico"),
    ("CHINA", "China"),
    ("GERMANY", "Germany"),
    ("DEUTSCHLAND", "Germany"),
    ("FRANCE", "France"),
    ("CANADA", "Canada"),
    ("SPAIN", "Spain"),
    ("ITALY", "Italy"),
    ("JAPAN", "Japan"),
    ("KOREA", "Korea"),
    ("INDIA", "India"),
    ("BRAZIL", "Brazil"),
    ("UNITED KINGDOM", "United Kingdom"),
    ("UK", "United Kingdom"),
    ("ENGLAND", "United Kingdom"),
    ("CZECH", "Czech Republic"),
    ("POLAND", "Poland"),
    ("HUNGARY", "Hungary"),
    ("ROMANIA", "Romania"),
    ("SOUTH AFRICA", "South Africa"),
    ("SLOVAKIA", "Slovakia"),
    ("PORTUGAL", "Portugal"),
    ("TURKEY", "Turkey"),
    ("MÜNCHEN", "Germany"),
    ("MUNICH", "Germany"),
    ("SALONTA", "Romania"),
    ("DETROIT", "United States"),
    ("TROY", "United States"),
    ("JUAREZ", "Mexico"),
    ("MATAMOROS", "Mexico"),
    ("PUEBLA", "Mexico"),
    ("SHANGHAI", "China"),
    ("RYTON", "United Kingdom"),
    ("BIRMINGHAM", "United Kingdom"),
    ("VIGO", "Spain"),
    ("RENNES", "France"),
];

lazy_static! {
    static ref COUNTRY_PATTERNS: Vec<(Regex, &'static str)> = COUNTRY_MAP
        .iter()
        .map(|(key, country)| {
            // Keys may end in a dot, where \b would not match
            let pattern = format!(r"(?:^|[^\p{{L}}\p{{N}}]){}(?:$|[^\p{{L}}\p{{N}}])", regex::escape(key));
            (Regex::new(&pattern).unwrap(), *country)
        })
        .collect();
}

/// Resolve the country of an address.
///
/// The last line is searched first, then the whole text. Without a known
/// name, a digit-free last line longer than two characters is returned as
/// written.
pub fn extract_country(address: &str) -> String {
    let trimmed = address.replace('\r', "");
    let trimmed = trimmed.trim();
    if trimmed.is_empty() || trimmed == NOT_FOUND {
        return NOT_FOUND.to_string();
    }

    let last_line = trimmed.lines().last().unwrap_or(trimmed).trim();

    if let Some(country) = lookup(&last_line.to_uppercase()) {
        return country.to_string();
    }
    if let Some(country) = lookup(&trimmed.to_uppercase()) {
        return country.to_string();
    }

    if !last_line.chars().any(|c| c.is_ascii_digit()) && last_line.chars().count() > 2 {
        return last_line.to_string();
    }

    NOT_FOUND.to_string()
}

fn lookup(upper: &str) -> Option<&'static str> {
    COUNTRY_PATTERNS
        .iter()
        .find(|(pattern, _)| pattern.is_match(upper))
        .map(|(_, country)| *country)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_from_last_line() {
        assert_eq!(
            extract_country("ACME GmbH\nLeopoldstr. 1\n80802 München"),
            "Germany"
        );
        assert_eq!(
            extract_country("Parts Inc\n100 Main St\nDetroit, MI 48226\nUSA"),
            "United States"
        );
    }

    #[test]
    fn test_country_from_body() {
        assert_eq!(
            extract_country("Planta Norte, Puebla\nPue. 72000"),
            "Mexico"
        );
    }

    #[test]
    fn test_whole_word_matching() {
        // "UK" inside "UKRAINE" is not the United Kingdom
        assert_eq!(extract_country("Kyiv\nUkraine"), "Ukraine");
        assert_eq!(extract_country("Troyes Works\n10000 Troyes 1"), "N/A");
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(extract_country("N/A"), "N/A");
        assert_eq!(extract_country(""), "N/A");
        assert_eq!(extract_country("Somewhere\nBelgium"), "Belgium");
        assert_eq!(extract_country("Plant 7\nDock 12"), "N/A");
    }
}
