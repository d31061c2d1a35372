//! Subcommands and the helpers they share.

pub mod batch;
pub mod config;
pub mod ping;
pub mod process;

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use contrax_core::{ContractExtractor, ContraxConfig};
use contrax_enrich::OllamaBackend;

/// Load the config file if one was given, then apply `CONTRAX_*` overrides.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ContraxConfig> {
    let mut config = if let Some(path) = config_path {
        ContraxConfig::from_file(Path::new(path))?
    } else {
        ContraxConfig::default()
    };
    config.apply_env_overrides();
    Ok(config)
}

/// Build the extractor, wiring in the HTTP enrichment backend unless disabled.
pub fn build_extractor(config: &ContraxConfig, no_ai: bool) -> ContractExtractor {
    if no_ai || !config.enrichment.enabled {
        debug!("enrichment disabled");
        return ContractExtractor::heuristic_only(config);
    }

    match OllamaBackend::new(config.enrichment.clone()) {
        Ok(backend) => ContractExtractor::new(config, Arc::new(backend)),
        Err(e) => {
            warn!("Could not create enrichment client, continuing without AI: {}", e);
            ContractExtractor::heuristic_only(config)
        }
    }
}
