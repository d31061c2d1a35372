//! AI enrichment adapter for contrax.
//!
//! The extraction engine treats AI-assisted extraction as an optional,
//! best-effort step. This crate provides the narrow seam it calls through:
//! - [`EnrichmentBackend`], the `text -> partial field map` interface
//! - [`OllamaBackend`], an HTTP backend for Ollama-compatible services
//! - [`DisabledBackend`], which never enriches
//!
//! Backends never fail past their own boundary: transport errors, timeouts and
//! malformed replies all come back as an empty [`Enrichment`].

mod backend;
mod config;
mod error;
mod prompt;
mod reply;

pub use backend::{DisabledBackend, EnrichmentBackend, OllamaBackend};
pub use config::EnrichmentConfig;
pub use error::EnrichError;
pub use prompt::{build_prompt, REQUESTED_FIELDS};
pub use reply::{parse_reply, Enrichment};

/// Result type for enrichment operations.
pub type Result<T> = std::result::Result<T, EnrichError>;
