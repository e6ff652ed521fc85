//! Purchase agreement field extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, FieldResolution, PurchaseAgreementParser};

use crate::models::record::ExtractedRecord;
use crate::transcript::RecognizedText;

/// Trait for agreement parsing.
///
/// Parsing is total: every input yields a result, with unrecovered fields
/// set to [`crate::NOT_FOUND`].
pub trait AgreementParser {
    /// Parse an agreement from text, keeping rule provenance.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Trait for agreement field extractors.
pub trait AgreementExtractor {
    /// Extract the record from a recognized transcript.
    fn extract(&self, transcript: &RecognizedText) -> ExtractedRecord;

    /// Extract the record from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractedRecord;
}

/// Extract the five fields from text with default settings.
pub fn extract_fields(text: &str) -> ExtractedRecord {
    PurchaseAgreementParser::new().extract_from_text(text)
}
