//! Error types for the enrichment layer.

use thiserror::Error;

/// Errors that can occur while talking to an enrichment service.
///
/// These are internal to backends; [`crate::EnrichmentBackend::enrich`] logs
/// them and returns an empty enrichment instead.
#[derive(Error, Debug)]
pub enum EnrichError {
    /// Failed to build the HTTP client or reach the service.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service responded with status {0}")]
    Status(u16),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The reply did not contain a usable JSON object.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

impl From<reqwest::Error> for EnrichError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EnrichError::Timeout
        } else if let Some(status) = err.status() {
            EnrichError::Status(status.as_u16())
        } else {
            EnrichError::Transport(err.to_string())
        }
    }
}
