//! Process command - extract a record from a single contract file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use contrax_core::{DocumentExtraction, EnrichmentOutcome, ExtractedFields, Field};

use super::{build_extractor, load_config};
use crate::source::read_source;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (txt, csv, pdf, xml or json)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Company name that overrides the extracted client name
    #[arg(long)]
    company: Option<String>,

    /// Skip AI enrichment
    #[arg(long)]
    no_ai: bool,

    /// Include page records in text output
    #[arg(long)]
    pages: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );

    pb.set_message("Reading document...");
    let source = read_source(&args.input)?;
    let input = source.into_input(&args.input, args.company.clone());

    pb.set_message("Extracting fields...");
    let extractor = build_extractor(&config, args.no_ai);
    let document = extractor.extract(&input).await?;

    pb.finish_and_clear();

    let output = format_document(&document, args.format, args.pages)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if document.enrichment == EnrichmentOutcome::NoResult {
        eprintln!(
            "{} AI enrichment returned nothing; heuristic values were kept",
            style("⚠").yellow()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a document in the requested format.
pub fn format_document(
    document: &DocumentExtraction,
    format: OutputFormat,
    include_pages: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(document)?),
        OutputFormat::Csv => format_csv(&[&document.fields]),
        OutputFormat::Text => Ok(format_text(document, include_pages)),
    }
}

/// Records as CSV with human-readable field labels as headers.
pub fn format_csv(records: &[&ExtractedFields]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(Field::ALL.iter().map(|field| field.label()))?;
    for record in records {
        wtr.write_record(Field::ALL.iter().map(|&field| record.get(field)))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(document: &DocumentExtraction, include_pages: bool) -> String {
    let mut output = String::new();

    push_fields(&mut output, &document.fields, "");
    output.push_str(&format!(
        "\nRoute: {:?}, enrichment: {:?}\n",
        document.route, document.enrichment
    ));

    if include_pages {
        for page in &document.pages {
            output.push_str(&format!("\nPage {}:\n", page.page_number));
            push_fields(&mut output, &page.fields, "  ");
        }
    }

    output
}

fn push_fields(output: &mut String, fields: &ExtractedFields, indent: &str) {
    for (field, value) in fields.iter() {
        let value = value.replace('\n', "; ");
        output.push_str(&format!("{}{}: {}\n", indent, field.label(), value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contrax_core::{ExtractionRoute, PageExtraction};

    fn document() -> DocumentExtraction {
        let mut fields = ExtractedFields::new();
        fields.set(Field::ContractNumber, "PO1234567");
        fields.set(Field::BuyerNameAndAddress, "ACME GmbH\nMunich");
        DocumentExtraction {
            fields: fields.clone(),
            pages: vec![PageExtraction {
                page_number: 1,
                raw_text: "page".to_string(),
                fields,
            }],
            route: ExtractionRoute::Heuristic,
            enrichment: EnrichmentOutcome::NotTriggered,
        }
    }

    #[test]
    fn test_csv_uses_labels() {
        let csv = format_document(&document(), OutputFormat::Csv, false).unwrap();
        let mut lines = csv.lines();
        assert!(lines.next().unwrap().starts_with("Contract Number,Amendment Number,"));
        assert!(lines.next().unwrap().starts_with("PO1234567,0,"));
    }

    #[test]
    fn test_text_pages_are_optional() {
        let without = format_document(&document(), OutputFormat::Text, false).unwrap();
        assert!(without.contains("Contract Number: PO1234567"));
        assert!(without.contains("Buyer Name and Address: ACME GmbH; Munich"));
        assert!(!without.contains("Page 1:"));

        let with = format_document(&document(), OutputFormat::Text, true).unwrap();
        assert!(with.contains("Page 1:"));
    }
}
