//! Core library for contract field extraction.
//!
//! This crate provides:
//! - Text normalizers (value cleaning, dates, countries)
//! - Keyword-driven line and block locators with two-column layout handling
//! - Field extractors for identifiers, parties, DUNS, prices and flags
//! - A structured path for the demand-contract XML dialect
//! - The document orchestrator with AI enrichment, merge and page reconciliation

pub mod contract;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod structured;

pub use error::{ContraxError, ExtractionError, Result, StructuredError};
pub use models::config::{BatchConfig, ContraxConfig, EnrichmentConfig, ExtractionConfig};
pub use models::document::{DocumentExtraction, EnrichmentOutcome, ExtractionRoute, PageExtraction};
pub use models::fields::{ExtractedFields, Field, NOT_FOUND};
pub use contract::HeuristicParser;
pub use pipeline::{ContractExtractor, DocumentInput};
pub use structured::{DemandContractAdapter, StructuredAdapter};

/// Re-export enrichment types.
pub use contrax_enrich::{DisabledBackend, Enrichment, EnrichmentBackend, OllamaBackend};
