//! Error types for the contrax-core library.

use thiserror::Error;

/// Main error type for the contrax library.
#[derive(Error, Debug)]
pub enum ContraxError {
    /// Document extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Structured (XML) input error.
    #[error("structured input error: {0}")]
    Structured(#[from] StructuredError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to document extraction.
///
/// Missing fields are not errors; they are encoded as field defaults.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractionError {
    /// The input contained no extractable text.
    #[error("no extractable text")]
    NoText,
}

/// Errors related to structured (XML) input.
#[derive(Error, Debug)]
pub enum StructuredError {
    /// The XML could not be read.
    #[error("malformed XML: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for StructuredError {
    fn from(err: quick_xml::Error) -> Self {
        StructuredError::Xml(err.to_string())
    }
}

/// Result type for the contrax library.
pub type Result<T> = std::result::Result<T, ContraxError>;
