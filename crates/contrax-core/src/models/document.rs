//! Document- and page-level extraction results.

use serde::{Deserialize, Serialize};

use super::fields::ExtractedFields;

/// Which extraction path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionRoute {
    /// Fixed-tag XML dialect read directly.
    Structured,
    /// Keyword and layout heuristics over free text.
    Heuristic,
}

/// What happened in the enrichment step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentOutcome {
    /// No trigger condition held (or the structured path was used).
    NotTriggered,
    /// Triggered, but enrichment is switched off.
    Disabled,
    /// Triggered; the backend returned nothing usable (failure, timeout or empty reply).
    NoResult,
    /// Triggered; the backend reply was merged into the record.
    Applied,
}

/// Extraction result for one page of a multi-page source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageExtraction {
    /// 1-based page number.
    pub page_number: u32,
    /// Text of the page as supplied by the caller.
    pub raw_text: String,
    /// Fields extracted from this page (party and location fields reconciled
    /// with the document record).
    pub fields: ExtractedFields,
}

/// Full extraction result for a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentExtraction {
    /// Document-level record, extracted from the full text.
    #[serde(flatten)]
    pub fields: ExtractedFields,

    /// Per-page breakdown. Empty for flat or structured sources.
    pub pages: Vec<PageExtraction>,

    /// Path that produced the document record.
    pub route: ExtractionRoute,

    /// Outcome of the enrichment step.
    pub enrichment: EnrichmentOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_flat() {
        let doc = DocumentExtraction {
            fields: ExtractedFields::new(),
            pages: vec![PageExtraction {
                page_number: 1,
                raw_text: "Page one".to_string(),
                fields: ExtractedFields::new(),
            }],
            route: ExtractionRoute::Heuristic,
            enrichment: EnrichmentOutcome::NotTriggered,
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["contractNumber"], "N/A");
        assert_eq!(value["route"], "heuristic");
        assert_eq!(value["enrichment"], "not_triggered");
        assert_eq!(value["pages"][0]["pageNumber"], 1);
        assert_eq!(value["pages"][0]["rawText"], "Page one");
        assert_eq!(value["pages"][0]["fields"]["amendmentNumber"], "0");
    }
}
