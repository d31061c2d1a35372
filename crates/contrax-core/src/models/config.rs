//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

pub use contrax_enrich::EnrichmentConfig;

/// Main configuration for the contrax pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContraxConfig {
    /// Heuristic extraction configuration.
    pub extraction: ExtractionConfig,

    /// AI enrichment configuration.
    pub enrichment: EnrichmentConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// Heuristic extraction and enrichment-trigger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Leading characters searched for buyer and seller blocks.
    pub header_context_chars: usize,

    /// Leading characters scanned for foreign-language contract keywords.
    pub foreign_probe_chars: usize,

    /// Leading characters counted for the non-Latin density check.
    pub non_latin_probe_chars: usize,

    /// Non-ASCII character count above which text is treated as non-Latin.
    pub non_latin_threshold: usize,

    /// Trigger enrichment when the contract or part number is missing.
    pub enrich_on_missing_fields: bool,

    /// Fall back to the file name for the contract number.
    pub use_filename_fallback: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            header_context_chars: 5000,
            foreign_probe_chars: 2500,
            non_latin_probe_chars: 500,
            non_latin_threshold: 50,
            enrich_on_missing_fields: true,
            use_filename_fallback: true,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of documents processed concurrently.
    pub jobs: usize,

    /// Keep going when a document fails.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            jobs: 4,
            continue_on_error: false,
        }
    }
}

impl ContraxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Apply `CONTRAX_*` environment overrides for the enrichment service.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CONTRAX_OLLAMA_URL") {
            self.enrichment.base_url = url;
        }
        if let Some(model) = lookup("CONTRAX_OLLAMA_MODEL") {
            self.enrichment.model = model;
        }
        if let Some(secs) = lookup("CONTRAX_OLLAMA_TIMEOUT").and_then(|v| v.trim().parse().ok()) {
            self.enrichment.timeout_secs = secs;
        }
        if let Some(enabled) = lookup("CONTRAX_AI_ENABLED") {
            self.enrichment.enabled = !matches!(
                enabled.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ContraxConfig =
            serde_json::from_str(r#"{"enrichment": {"model": "mistral"}}"#).unwrap();
        assert_eq!(config.enrichment.model, "mistral");
        assert_eq!(config.enrichment.base_url, "http://localhost:11434");
        assert_eq!(config.extraction.header_context_chars, 5000);
        assert_eq!(config.batch.jobs, 4);
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("CONTRAX_OLLAMA_URL", "http://ai.internal:11434"),
            ("CONTRAX_OLLAMA_TIMEOUT", "30"),
            ("CONTRAX_AI_ENABLED", "off"),
        ]
        .into_iter()
        .collect();

        let mut config = ContraxConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.enrichment.base_url, "http://ai.internal:11434");
        assert_eq!(config.enrichment.timeout_secs, 30);
        assert_eq!(config.enrichment.model, "llama3.2");
        assert!(!config.enrichment.enabled);
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("contrax-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let mut config = ContraxConfig::default();
        config.batch.jobs = 8;
        config.save(&path).unwrap();

        let loaded = ContraxConfig::from_file(&path).unwrap();
        assert_eq!(loaded.batch.jobs, 8);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
