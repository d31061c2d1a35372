//! Tolerant parsing of model replies into partial field maps.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::EnrichError;
use crate::Result;

/// A partial field map returned by an enrichment backend.
///
/// Keys are record keys (`contractNumber`, `language`, ...). Values are kept
/// as the service returned them; the caller decides which ones are usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enrichment {
    fields: BTreeMap<String, String>,
}

impl Enrichment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build from a JSON object. Strings are trimmed, numbers and booleans are
    /// rendered as text, nulls and nested values are dropped.
    pub fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let mut enrichment = Self::new();
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.trim().to_string(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            enrichment.insert(key.clone(), text);
        }
        enrichment
    }
}

/// Parse a raw model reply into an [`Enrichment`].
///
/// Accepts bare JSON, JSON wrapped in Markdown code fences, and JSON embedded
/// in surrounding prose (the outermost `{ ... }` span is used).
pub fn parse_reply(raw: &str) -> Result<Enrichment> {
    let stripped = raw.replace("```json", "").replace("```", "");
    let stripped = stripped.trim();

    if stripped.is_empty() {
        return Err(EnrichError::MalformedReply("empty reply".to_string()));
    }

    let start = stripped
        .find('{')
        .ok_or_else(|| EnrichError::MalformedReply("no opening brace".to_string()))?;
    let end = stripped
        .rfind('}')
        .ok_or_else(|| EnrichError::MalformedReply("no closing brace".to_string()))?;
    if end <= start {
        return Err(EnrichError::MalformedReply("braces out of order".to_string()));
    }

    let value: Value = serde_json::from_str(&stripped[start..=end])
        .map_err(|e| EnrichError::MalformedReply(e.to_string()))?;

    match value {
        Value::Object(object) => Ok(Enrichment::from_json_object(&object)),
        _ => Err(EnrichError::MalformedReply("reply is not an object".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_plain_object() {
        let parsed = parse_reply(r#"{"contractNumber": "PO1234567", "language": "German"}"#).unwrap();
        assert_eq!(parsed.get("contractNumber"), Some("PO1234567"));
        assert_eq!(parsed.get("language"), Some("German"));
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_parse_fenced_reply_with_prose() {
        let raw = "Here is the data:\n```json\n{\"currency\": \"EUR\"}\n```\nHope that helps.";
        let parsed = parse_reply(raw).unwrap();
        assert_eq!(parsed, Enrichment::new().with("currency", "EUR"));
    }

    #[test]
    fn test_non_string_values() {
        let parsed = parse_reply(r#"{"amendmentNumber": 3, "totalPrice": 12.5, "lbe": null, "pages": []}"#)
            .unwrap();
        assert_eq!(parsed.get("amendmentNumber"), Some("3"));
        assert_eq!(parsed.get("totalPrice"), Some("12.5"));
        assert_eq!(parsed.get("lbe"), None);
        assert_eq!(parsed.get("pages"), None);
    }

    #[test]
    fn test_malformed_replies() {
        assert!(parse_reply("").is_err());
        assert!(parse_reply("no json here").is_err());
        assert!(parse_reply("} backwards {").is_err());
        assert!(parse_reply("{ not: valid }").is_err());
    }
}
