//! Enrichment backend implementations.

mod ollama;

pub use ollama::OllamaBackend;

use async_trait::async_trait;

use crate::Enrichment;

/// Trait for AI enrichment backends.
///
/// Implementations take the document text and return whatever fields they
/// could extract. They must never fail: any transport, timeout or parse
/// problem is logged and reported as an empty [`Enrichment`].
#[async_trait]
pub trait EnrichmentBackend: Send + Sync {
    /// Extract a partial field map from document text.
    async fn enrich(&self, text: &str) -> Enrichment;

    /// Short name used in logs and extraction metadata.
    fn name(&self) -> &str;
}

/// Backend used when enrichment is switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledBackend;

#[async_trait]
impl EnrichmentBackend for DisabledBackend {
    async fn enrich(&self, _text: &str) -> Enrichment {
        Enrichment::new()
    }

    fn name(&self) -> &str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_backend_returns_nothing() {
        let backend = DisabledBackend;
        assert!(backend.enrich("Vertrag Nr. 4711").await.is_empty());
        assert_eq!(backend.name(), "disabled");
    }
}
