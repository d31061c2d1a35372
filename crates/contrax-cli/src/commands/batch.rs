//! Batch processing command for multiple contract files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use contrax_core::{ContractExtractor, DocumentExtraction, ExtractedFields};

use super::process::{format_csv, format_document, OutputFormat};
use super::{build_extractor, load_config};
use crate::source::{read_source, SourceKind};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Write every record to one CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Number of files extracted in parallel, each on its own task (default from config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Company name that overrides the extracted client name
    #[arg(long)]
    company: Option<String>,

    /// Skip AI enrichment
    #[arg(long)]
    no_ai: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    document: Option<DocumentExtraction>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let mut files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| SourceKind::from_path(p).is_some())
        .collect();
    files.sort();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let overall_pb = ProgressBar::new(files.len() as u64);
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let extractor = Arc::new(build_extractor(&config, args.no_ai));
    let jobs = args.jobs.unwrap_or(config.batch.jobs).max(1);
    let continue_on_error = args.continue_on_error || config.batch.continue_on_error;
    debug!("Processing with {} workers", jobs);

    // Each file runs on its own task so extraction uses every runtime worker
    let mut pending = stream::iter(files)
        .map(|path| {
            let extractor = Arc::clone(&extractor);
            let company = args.company.clone();
            tokio::spawn(async move { process_single_file(path, &extractor, company).await })
        })
        .buffer_unordered(jobs);

    let mut results = Vec::new();
    while let Some(joined) = pending.next().await {
        let result = joined?;
        overall_pb.inc(1);

        if let Some(error_msg) = &result.error {
            if continue_on_error {
                warn!("Failed to process {}: {}", result.path.display(), error_msg);
            } else {
                error!("Failed to process {}: {}", result.path.display(), error_msg);
                overall_pb.abandon();
                anyhow::bail!("Processing failed for {}: {}", result.path.display(), error_msg);
            }
        }
        results.push(result);
    }

    overall_pb.finish_and_clear();
    results.sort_by(|a, b| a.path.cmp(&b.path));

    let successful: Vec<_> = results.iter().filter(|r| r.document.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(document) = &result.document {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("contract");
                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_document(document, args.format, true)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    if let Some(export_path) = &args.export {
        let records: Vec<&ExtractedFields> = successful
            .iter()
            .filter_map(|r| r.document.as_ref().map(|d| &d.fields))
            .collect();
        fs::write(export_path, format_csv(&records)?)?;
        println!(
            "{} Exported {} records to {}",
            style("✓").green(),
            records.len(),
            export_path.display()
        );
    }

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

async fn process_single_file(
    path: PathBuf,
    extractor: &ContractExtractor,
    company: Option<String>,
) -> ProcessResult {
    let file_start = Instant::now();
    let outcome = extract_file(&path, extractor, company).await;
    let processing_time_ms = file_start.elapsed().as_millis() as u64;

    match outcome {
        Ok(document) => ProcessResult {
            path,
            document: Some(document),
            error: None,
            processing_time_ms,
        },
        Err(e) => ProcessResult {
            path,
            document: None,
            error: Some(e.to_string()),
            processing_time_ms,
        },
    }
}

async fn extract_file(
    path: &Path,
    extractor: &ContractExtractor,
    company: Option<String>,
) -> anyhow::Result<DocumentExtraction> {
    let source = read_source(path)?;
    let input = source.into_input(path, company);
    Ok(extractor.extract(&input).await?)
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "contract_number",
        "part_number",
        "issue_date",
        "client_name",
        "route",
        "enrichment",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result.path.file_name().and_then(|s| s.to_str()).unwrap_or("");

        if let Some(document) = &result.document {
            let fields = &document.fields;
            wtr.write_record([
                filename,
                "success",
                &fields.contract_number,
                &fields.part_number,
                &fields.issue_date,
                &fields.client_name,
                &enum_name(&document.route)?,
                &enum_name(&document.enrichment)?,
                &result.processing_time_ms.to_string(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Serialized name of a unit enum variant, e.g. `not_triggered`.
fn enum_name<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    match serde_json::to_value(value)? {
        serde_json::Value::String(name) => Ok(name),
        other => Ok(other.to_string()),
    }
}
