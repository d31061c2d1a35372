//! Enrichment service configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 1800;

/// Configuration for the AI enrichment step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    /// Run enrichment at all. When false the engine uses the heuristic path only.
    pub enabled: bool,

    /// Base URL of the Ollama-compatible service.
    pub base_url: String,

    /// Model name passed to the service.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Maximum number of document characters sent in the prompt.
    pub context_chars: usize,

    /// Sampling temperature.
    pub temperature: f32,

    /// Context window requested from the service.
    pub num_ctx: u32,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            context_chars: 4000,
            temperature: 0.1,
            num_ctx: 4096,
        }
    }
}
