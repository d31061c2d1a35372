//! Value cleaning and plausibility checks shared by every locator.

use super::keywords::{
    INVALID_FRAGMENTS, LABEL_HINTS, LABEL_PLACEHOLDERS, LEGAL_OPENINGS, LEGAL_PHRASES,
    LEGAL_TERMS,
};
use super::patterns::{
    CONTRACT_AMENDMENT_PREFIX, FIVE_DIGITS, FOREIGN_LABEL_PREFIX, LABEL_COLON, LABEL_FRAGMENT,
    LEADING_SEPARATORS, NON_NAME_CHARS, REASON_PREFIX, SENTENCE_STARTER,
};

/// Word count above which a value is treated as running prose.
const MAX_VALUE_WORDS: usize = 60;

/// Colons this close to the start mean the value is still a label.
const MIN_COLON_INDEX: usize = 10;

/// Strip label residue from a captured value.
///
/// Runs the cleaning steps until the value stops changing, so
/// `clean_value(clean_value(x)) == clean_value(x)`.
pub fn clean_value(raw: &str) -> String {
    let mut current = raw.trim().to_string();
    loop {
        let next = clean_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn clean_once(value: &str) -> String {
    let value = LEADING_SEPARATORS.replace(value, "");
    let value = LABEL_FRAGMENT.replace(&value, "");
    let value = REASON_PREFIX.replace(&value, "");
    let value = CONTRACT_AMENDMENT_PREFIX.replace(&value, "");
    let value = FOREIGN_LABEL_PREFIX.replace(&value, "");
    let mut value = LEADING_SEPARATORS.replace(&value, "").into_owned();

    if let Some(caps) = LABEL_COLON.captures(&value) {
        let prefix = caps[1].to_lowercase();
        if LABEL_HINTS.iter().any(|hint| prefix.contains(hint)) {
            value = caps[2].trim().to_string();
        }
    }

    let value = value.trim();
    let value = value
        .strip_suffix([';', ',', '.'])
        .unwrap_or(value);
    value.trim().to_string()
}

/// Whether the value reads like contract boilerplate rather than a field.
pub fn is_legal_text(value: &str) -> bool {
    let lower = value.to_lowercase();

    if LEGAL_OPENINGS.iter().any(|opening| lower.starts_with(opening)) {
        return true;
    }
    if LEGAL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return true;
    }

    let hits = LEGAL_TERMS.iter().filter(|term| lower.contains(*term)).count();
    hits >= 2 || value.split_whitespace().count() > MAX_VALUE_WORDS
}

/// Whether a cleaned value is plausible as a field value.
pub fn is_valid_value(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    let lower = trimmed.to_lowercase();
    if LABEL_PLACEHOLDERS.contains(&lower.as_str()) {
        return false;
    }
    if is_legal_text(trimmed) {
        return false;
    }
    if INVALID_FRAGMENTS.iter().any(|fragment| lower.contains(fragment)) {
        return false;
    }
    if let Some(index) = trimmed.chars().position(|c| c == ':') {
        if index < MIN_COLON_INDEX {
            return false;
        }
    }

    !trimmed
        .chars()
        .all(|c| c.is_ascii_punctuation() || c.is_whitespace())
}

/// Whether the value looks like a person's name.
pub fn is_likely_name(value: &str) -> bool {
    if value.chars().count() < 2 {
        return false;
    }
    !NON_NAME_CHARS.is_match(value)
        && !SENTENCE_STARTER.is_match(value)
        && !FIVE_DIGITS.is_match(value)
}
