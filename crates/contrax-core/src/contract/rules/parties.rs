//! Parties, contacts and places: account manager, manufacturing location,
//! client name and receiving plants.

use super::clean::{is_legal_text, is_likely_name, is_valid_value};
use super::keywords::{ACCOUNT_MANAGER, LOCATION, RECEIVING_PLANTS};
use super::locator::{find_block_value, find_line_value_where, LOOKAHEAD_SLACK};
use super::patterns::{ALL_BUYER_PLANTS, NUMERIC_OR_PUNCT, PHONE_SUFFIX, TRAILING_SEPARATORS};
use super::FieldExtractor;
use crate::models::fields::NOT_FOUND;

/// Lines collected for a manufacturing location block.
const LOCATION_BLOCK_LINES: usize = 6;

/// Lines collected for a receiving plants block.
const PLANTS_BLOCK_LINES: usize = 10;

/// Canonical value for contracts that ship to every buyer plant.
pub const ALL_BUYER_PLANTS_VALUE: &str = "All Buyer's Plants - As Scheduled";

/// Account manager extractor: a labeled person's name.
#[derive(Debug, Clone, Default)]
pub struct AccountManagerExtractor;

impl AccountManagerExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for AccountManagerExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        find_line_value_where(text, ACCOUNT_MANAGER, LOOKAHEAD_SLACK, |value| {
            let name = strip_contact_details(value);
            is_likely_name(&name) && is_valid_value(&name)
        })
        .map(|value| strip_contact_details(&value))
    }
}

/// Remove phone numbers and trailing separators after a name.
pub fn strip_contact_details(value: &str) -> String {
    let value = PHONE_SUFFIX.replace(value, "");
    let value = value.trim();
    TRAILING_SEPARATORS.replace(value, "").trim().to_string()
}

/// Manufacturing location from a labeled address block.
#[derive(Debug, Clone, Default)]
pub struct LocationExtractor;

impl LocationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for LocationExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<String> {
        find_block_value(text, LOCATION, LOCATION_BLOCK_LINES)
            .filter(|value| value.chars().count() > 5 && !is_legal_text(value))
    }
}

/// Client name: the first meaningful line of the buyer block, cut at the
/// first comma.
pub fn client_name(buyer: &str) -> String {
    let buyer = buyer.trim();
    if buyer.is_empty() || buyer == NOT_FOUND || is_legal_text(buyer) {
        return NOT_FOUND.to_string();
    }

    for line in buyer.lines() {
        let candidate = line.split(',').next().unwrap_or(line).trim();
        if !NUMERIC_OR_PUNCT.is_match(candidate) && candidate.chars().count() > 2 {
            return candidate.to_string();
        }
    }

    buyer.lines().next().unwrap_or(buyer).trim().to_string()
}

/// Receiving plants block, collapsed to the canonical value when the
/// contract covers all buyer plants.
pub fn extract_receiving_plants(text: &str) -> Option<String> {
    let plants = find_block_value(text, RECEIVING_PLANTS, PLANTS_BLOCK_LINES)?;
    if ALL_BUYER_PLANTS.is_match(&plants) {
        return Some(ALL_BUYER_PLANTS_VALUE.to_string());
    }
    Some(plants)
}
