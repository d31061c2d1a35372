//! Text acquisition: turn an input file into full text and per-page text.

use std::fs;
use std::path::Path;

use anyhow::Context;
use lopdf::Document;
use tracing::debug;

use contrax_core::DocumentInput;

/// Page separator in plain-text exports.
const FORM_FEED: char = '\x0C';

/// Supported input kinds, by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Plain text (`.txt`, `.csv`).
    Text,
    /// PDF with embedded text.
    Pdf,
    /// XML, read as flat text.
    Xml,
    /// JSON, read as flat text.
    Json,
}

impl SourceKind {
    /// Classify a path by its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" | "csv" => Some(SourceKind::Text),
            "pdf" => Some(SourceKind::Pdf),
            "xml" => Some(SourceKind::Xml),
            "json" => Some(SourceKind::Json),
            _ => None,
        }
    }
}

/// Text read from one input file.
#[derive(Debug, Clone)]
pub struct SourceText {
    pub kind: SourceKind,
    pub text: String,
    pub pages: Vec<String>,
}

impl SourceText {
    /// Build the extractor input for this source.
    pub fn into_input(self, path: &Path, company: Option<String>) -> DocumentInput {
        let mut input = DocumentInput::new(self.text)
            .with_pages(self.pages)
            .with_company_hint(company);
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            input = input.with_filename(name);
        }
        input
    }
}

/// Read a supported file. Fails on unsupported formats and on files that
/// yield no text at all.
pub fn read_source(path: &Path) -> anyhow::Result<SourceText> {
    let Some(kind) = SourceKind::from_path(path) else {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        anyhow::bail!("Unsupported file format: {}", extension);
    };

    let source = match kind {
        SourceKind::Text => {
            let text = read_text(path)?;
            let pages = split_pages(&text);
            SourceText { kind, text, pages }
        }
        SourceKind::Xml | SourceKind::Json => SourceText {
            kind,
            text: read_text(path)?,
            pages: Vec::new(),
        },
        SourceKind::Pdf => {
            let data = fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let pages = pdf_pages(&data)?;
            let text = pages
                .iter()
                .filter(|page| !page.trim().is_empty())
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join("\n\n");
            SourceText { kind, text, pages }
        }
    };

    if source.text.trim().is_empty() {
        anyhow::bail!("No text extracted from {}", path.display());
    }

    debug!(
        "Read {:?} source {} ({} chars, {} pages)",
        source.kind,
        path.display(),
        source.text.len(),
        source.pages.len()
    );
    Ok(source)
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Pages of a form-feed separated export. A single page yields no page list.
fn split_pages(text: &str) -> Vec<String> {
    let pages: Vec<String> = text
        .split(FORM_FEED)
        .map(|page| page.to_string())
        .collect();
    if pages.len() > 1 { pages } else { Vec::new() }
}

/// Embedded text of every page, in page order.
fn pdf_pages(data: &[u8]) -> anyhow::Result<Vec<String>> {
    let mut doc = Document::load_mem(data).context("Failed to parse PDF")?;

    // Handle PDFs with empty password encryption
    if doc.is_encrypted() && doc.decrypt("").is_err() {
        anyhow::bail!("PDF is encrypted");
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    if page_numbers.is_empty() {
        anyhow::bail!("PDF has no pages");
    }

    let mut pages = Vec::with_capacity(page_numbers.len());
    for number in page_numbers {
        match doc.extract_text(&[number]) {
            Ok(text) => pages.push(text),
            Err(e) => {
                debug!("No text on page {}: {}", number, e);
                pages.push(String::new());
            }
        }
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_source_kind_from_extension() {
        assert_eq!(SourceKind::from_path(Path::new("a.TXT")), Some(SourceKind::Text));
        assert_eq!(SourceKind::from_path(Path::new("a.csv")), Some(SourceKind::Text));
        assert_eq!(SourceKind::from_path(Path::new("a.pdf")), Some(SourceKind::Pdf));
        assert_eq!(SourceKind::from_path(Path::new("a.xml")), Some(SourceKind::Xml));
        assert_eq!(SourceKind::from_path(Path::new("a.json")), Some(SourceKind::Json));
        assert_eq!(SourceKind::from_path(Path::new("a.docx")), None);
        assert_eq!(SourceKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_form_feed_splits_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.txt", "page one\x0Cpage two");
        let source = read_source(&path).unwrap();
        assert_eq!(source.pages, vec!["page one".to_string(), "page two".to_string()]);
        assert_eq!(source.text, "page one\x0Cpage two");
    }

    #[test]
    fn test_single_page_text_has_no_pages() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.txt", "Contract No: PO1234567");
        let source = read_source(&path).unwrap();
        assert!(source.pages.is_empty());
    }

    #[test]
    fn test_xml_is_flat() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.xml", "<CONTRACT>\x0C</CONTRACT>");
        let source = read_source(&path).unwrap();
        assert_eq!(source.kind, SourceKind::Xml);
        assert!(source.pages.is_empty());
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "blank.txt", "  \n ");
        let err = read_source(&path).unwrap_err();
        assert!(err.to_string().contains("No text extracted"));
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_temp(&dir, "c.docx", "text");
        let err = read_source(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_input_carries_filename_and_hint() {
        let source = SourceText {
            kind: SourceKind::Text,
            text: "text".to_string(),
            pages: Vec::new(),
        };
        let input = source.into_input(Path::new("/tmp/in/PO4500123.txt"), Some("ACME".to_string()));
        assert_eq!(input.filename.as_deref(), Some("PO4500123.txt"));
        assert_eq!(input.company_hint.as_deref(), Some("ACME"));
    }
}
