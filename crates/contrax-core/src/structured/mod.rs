//! Structured input: fixed-tag XML dialects read directly, bypassing the
//! heuristic parser.

mod demand;
mod xml;

pub use demand::DemandContractAdapter;
pub use xml::{flatten_xml, XmlDocument};

use crate::error::StructuredError;
use crate::models::fields::ExtractedFields;

/// A named XML dialect mapped tag-by-tag onto the contract record.
pub trait StructuredAdapter: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Root element that identifies the dialect.
    fn root_tag(&self) -> &str;

    /// Whether the text should be routed to the structured path.
    fn detects(&self, text: &str) -> bool {
        let root = self.root_tag();
        looks_like_xml(text)
            || text.contains(&format!("<{root}>"))
            || text.contains(&format!("<{root} "))
    }

    /// Build a complete record from a parsed document.
    fn map(&self, doc: &XmlDocument) -> ExtractedFields;
}

/// Whether the text starts with an XML declaration.
pub fn looks_like_xml(text: &str) -> bool {
    text.trim_start().starts_with("<?xml")
}

/// Parse `text` with `adapter`.
///
/// Returns `Ok(None)` when the document is well-formed but lacks the
/// adapter's root element.
pub fn parse_structured(
    adapter: &dyn StructuredAdapter,
    text: &str,
) -> Result<Option<ExtractedFields>, StructuredError> {
    let doc = XmlDocument::parse(text)?;
    if !doc.has_element(adapter.root_tag()) {
        return Ok(None);
    }
    Ok(Some(adapter.map(&doc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects() {
        let adapter = DemandContractAdapter::new();
        assert!(adapter.detects("<?xml version=\"1.0\"?><ORDER/>"));
        assert!(adapter.detects("junk <CONTRACT><CONTRACT_NO>1</CONTRACT_NO></CONTRACT>"));
        assert!(adapter.detects("<CONTRACT version=\"2\"></CONTRACT>"));
        assert!(!adapter.detects("Contract No: PO1234567"));
    }

    #[test]
    fn test_other_root_is_not_mapped() {
        let adapter = DemandContractAdapter::new();
        assert!(parse_structured(&adapter, "<?xml version=\"1.0\"?><ORDER><NO>1</NO></ORDER>")
            .unwrap()
            .is_none());
    }
}
