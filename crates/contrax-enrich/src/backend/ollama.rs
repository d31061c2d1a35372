//! Ollama-compatible HTTP backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::EnrichmentBackend;
use crate::config::EnrichmentConfig;
use crate::error::EnrichError;
use crate::prompt::build_prompt;
use crate::reply::{parse_reply, Enrichment};
use crate::Result;

/// Backend calling `POST {base_url}/api/generate` in JSON mode.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: Client,
    config: EnrichmentConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    format: &'a str,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_ctx: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaBackend {
    /// Create a backend with the request timeout taken from `config`.
    pub fn new(config: EnrichmentConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EnrichError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EnrichmentConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send a prompt and return the raw `response` text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            format: "json",
            options: GenerateOptions {
                temperature: self.config.temperature,
                num_ctx: self.config.num_ctx,
            },
        };

        let response = self
            .client
            .post(self.endpoint("api/generate"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichError::Status(status.as_u16()));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| EnrichError::MalformedReply(e.to_string()))?;

        Ok(body.response)
    }

    /// Run the extraction prompt and parse the reply, surfacing failures.
    pub async fn try_enrich(&self, text: &str) -> Result<Enrichment> {
        let prompt = build_prompt(text, self.config.context_chars);
        debug!(
            "Requesting enrichment from {} ({} prompt chars)",
            self.config.model,
            prompt.len()
        );

        let raw = self.generate(&prompt).await?;
        parse_reply(&raw)
    }

    /// Check that the service is reachable (`GET {base_url}/api/tags`).
    pub async fn check_connection(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("api/tags")).send().await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(EnrichError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl EnrichmentBackend for OllamaBackend {
    async fn enrich(&self, text: &str) -> Enrichment {
        match self.try_enrich(text).await {
            Ok(enrichment) => {
                debug!("Enrichment returned {} fields", enrichment.len());
                enrichment
            }
            Err(e) => {
                warn!("Enrichment failed, continuing without it: {}", e);
                Enrichment::new()
            }
        }
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> EnrichmentConfig {
        EnrichmentConfig {
            base_url: "http://127.0.0.1:9/".to_string(),
            timeout_secs: 2,
            ..EnrichmentConfig::default()
        }
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let backend = OllamaBackend::new(unreachable_config()).unwrap();
        assert_eq!(backend.endpoint("api/generate"), "http://127.0.0.1:9/api/generate");
    }

    #[tokio::test]
    async fn test_unreachable_service_yields_empty_enrichment() {
        let backend = OllamaBackend::new(unreachable_config()).unwrap();
        assert!(backend.try_enrich("Contract No: PO1234567").await.is_err());
        assert!(backend.enrich("Contract No: PO1234567").await.is_empty());
    }

    #[tokio::test]
    async fn test_check_connection_reports_failure() {
        let backend = OllamaBackend::new(unreachable_config()).unwrap();
        assert!(backend.check_connection().await.is_err());
    }
}
