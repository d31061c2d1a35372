//! Document extraction orchestrator.
//!
//! Routes a document to the structured or heuristic path, decides whether
//! AI enrichment is warranted, merges its reply, then runs an independent
//! pass per page and reconciles the pages with the document record.

mod enrichment;
mod reconcile;

pub use enrichment::{
    contains_foreign_marker, merge_enrichment, EnrichmentTrigger, TRANSLATABLE_FIELDS,
    TRANSLATED_LANGUAGE,
};
pub use reconcile::{reconcile_page, reconcile_pages, RECONCILED_FIELDS};

use std::borrow::Cow;
use std::sync::Arc;
use std::time::Duration;

use contrax_enrich::{DisabledBackend, Enrichment, EnrichmentBackend};
use tracing::{debug, info, warn};

use crate::contract::HeuristicParser;
use crate::error::{ExtractionError, Result};
use crate::models::config::{ContraxConfig, ExtractionConfig};
use crate::models::document::{
    DocumentExtraction, EnrichmentOutcome, ExtractionRoute, PageExtraction,
};
use crate::models::fields::{ExtractedFields, Field};
use crate::structured::{
    flatten_xml, looks_like_xml, parse_structured, DemandContractAdapter, StructuredAdapter,
};

/// Text and metadata of one document, as delivered by text acquisition.
#[derive(Debug, Clone, Default)]
pub struct DocumentInput {
    /// Full document text.
    pub text: String,
    /// Text per page, in order. Empty for sources without pages.
    pub pages: Vec<String>,
    /// Source file name, used only as a last-resort contract number.
    pub filename: Option<String>,
    /// Caller-supplied company name that wins over the extracted client name.
    pub company_hint: Option<String>,
}

impl DocumentInput {
    /// Create an input from full text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach per-page text.
    pub fn with_pages(mut self, pages: Vec<String>) -> Self {
        self.pages = pages;
        self
    }

    /// Attach the source file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Attach a company name hint. Blank hints are ignored.
    pub fn with_company_hint(mut self, hint: Option<String>) -> Self {
        self.company_hint = hint.filter(|h| !h.trim().is_empty());
        self
    }

    /// Full text, or the pages joined when no full text was given.
    fn full_text(&self) -> Cow<'_, str> {
        if self.text.trim().is_empty() && !self.pages.is_empty() {
            Cow::Owned(self.pages.join("\n\n"))
        } else {
            Cow::Borrowed(&self.text)
        }
    }
}

/// Extracts contract records from documents.
pub struct ContractExtractor {
    parser: HeuristicParser,
    adapter: Box<dyn StructuredAdapter>,
    backend: Arc<dyn EnrichmentBackend>,
    config: ExtractionConfig,
    enrichment_enabled: bool,
    enrichment_timeout: Duration,
}

impl ContractExtractor {
    /// Create an extractor that enriches through `backend`.
    pub fn new(config: &ContraxConfig, backend: Arc<dyn EnrichmentBackend>) -> Self {
        Self {
            parser: HeuristicParser::from_config(&config.extraction),
            adapter: Box::new(DemandContractAdapter::new()),
            backend,
            config: config.extraction.clone(),
            enrichment_enabled: config.enrichment.enabled,
            enrichment_timeout: Duration::from_secs(config.enrichment.timeout_secs),
        }
    }

    /// Create an extractor with enrichment switched off.
    pub fn heuristic_only(config: &ContraxConfig) -> Self {
        Self::new(config, Arc::new(DisabledBackend)).with_enrichment(false)
    }

    /// Switch enrichment on or off.
    pub fn with_enrichment(mut self, enabled: bool) -> Self {
        self.enrichment_enabled = enabled;
        self
    }

    /// Bound the time spent waiting for the enrichment backend.
    pub fn with_enrichment_timeout(mut self, timeout: Duration) -> Self {
        self.enrichment_timeout = timeout;
        self
    }

    /// Use a different structured dialect.
    pub fn with_adapter(mut self, adapter: impl StructuredAdapter + 'static) -> Self {
        self.adapter = Box::new(adapter);
        self
    }

    /// Extract the document record and its pages.
    ///
    /// Fails only when the input holds no text at all.
    pub async fn extract(&self, input: &DocumentInput) -> Result<DocumentExtraction> {
        let full_text = input.full_text();
        if full_text.trim().is_empty() {
            return Err(ExtractionError::NoText.into());
        }

        let xml_source = looks_like_xml(&full_text);
        let mut text = full_text;
        if self.adapter.detects(&text) {
            match parse_structured(self.adapter.as_ref(), &text) {
                Ok(Some(mut fields)) => {
                    info!(dialect = self.adapter.name(), "structured document");
                    apply_company_hint(&mut fields, input.company_hint.as_deref());
                    return Ok(DocumentExtraction {
                        fields,
                        pages: Vec::new(),
                        route: ExtractionRoute::Structured,
                        enrichment: EnrichmentOutcome::NotTriggered,
                    });
                }
                Ok(None) if xml_source => match flatten_xml(&text) {
                    Ok(flat) if !flat.trim().is_empty() => {
                        debug!("flattened generic XML for heuristic parsing");
                        text = Cow::Owned(flat);
                    }
                    Ok(_) => {}
                    Err(e) => warn!(error = %e, "could not flatten XML"),
                },
                Ok(None) => {}
                Err(e) => warn!(error = %e, "malformed XML, using heuristics"),
            }
        }

        let baseline = self.parser.parse(&text, input.filename.as_deref());
        info!(
            contract = %baseline.contract_number,
            populated = baseline.populated_count(),
            "heuristic baseline"
        );

        let trigger = EnrichmentTrigger::evaluate(&text, &baseline, &self.config);
        // XML sources are never sent for enrichment, flattened or not.
        let (mut fields, enrichment) = if trigger.fires() && !xml_source {
            self.enrich(&text, &baseline, &trigger).await
        } else {
            (baseline, EnrichmentOutcome::NotTriggered)
        };
        apply_company_hint(&mut fields, input.company_hint.as_deref());

        let mut pages: Vec<PageExtraction> = input
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| {
                let mut page_fields = self.parser.parse_page(page);
                apply_company_hint(&mut page_fields, input.company_hint.as_deref());
                PageExtraction {
                    page_number: (index + 1) as u32,
                    raw_text: page.clone(),
                    fields: page_fields,
                }
            })
            .collect();
        reconcile_pages(&fields, &mut pages);
        if !pages.is_empty() {
            info!(pages = pages.len(), "page pass complete");
        }

        Ok(DocumentExtraction {
            fields,
            pages,
            route: ExtractionRoute::Heuristic,
            enrichment,
        })
    }

    async fn enrich(
        &self,
        text: &str,
        baseline: &ExtractedFields,
        trigger: &EnrichmentTrigger,
    ) -> (ExtractedFields, EnrichmentOutcome) {
        info!(?trigger, enabled = self.enrichment_enabled, "enrichment triggered");

        let (reply, outcome) = if !self.enrichment_enabled {
            (Enrichment::new(), EnrichmentOutcome::Disabled)
        } else {
            match tokio::time::timeout(self.enrichment_timeout, self.backend.enrich(text)).await {
                Ok(reply) if !reply.is_empty() => (reply, EnrichmentOutcome::Applied),
                Ok(reply) => (reply, EnrichmentOutcome::NoResult),
                Err(_) => {
                    warn!(
                        backend = self.backend.name(),
                        timeout_secs = self.enrichment_timeout.as_secs_f64(),
                        "enrichment timed out"
                    );
                    (Enrichment::new(), EnrichmentOutcome::NoResult)
                }
            }
        };

        let merged = merge_enrichment(baseline, &reply, trigger.foreign_language);
        (merged, outcome)
    }
}

fn apply_company_hint(fields: &mut ExtractedFields, hint: Option<&str>) {
    if let Some(hint) = hint {
        fields.set(Field::ClientName, hint);
    }
}
