//! Ping command - check that the enrichment service answers.

use console::style;

use contrax_enrich::OllamaBackend;

use super::load_config;

pub async fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let backend = OllamaBackend::new(config.enrichment.clone())?;

    println!(
        "{} Checking {} (model {})",
        style("ℹ").blue(),
        config.enrichment.base_url,
        config.enrichment.model
    );

    match backend.check_connection().await {
        Ok(()) => {
            println!("{} Enrichment service is reachable", style("✓").green());
            if !config.enrichment.enabled {
                println!(
                    "{} Enrichment is disabled in the configuration",
                    style("⚠").yellow()
                );
            }
            Ok(())
        }
        Err(e) => anyhow::bail!(
            "Enrichment service at {} is not reachable: {}",
            config.enrichment.base_url,
            e
        ),
    }
}
