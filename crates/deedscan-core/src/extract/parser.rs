//! Rule-based purchase agreement parser.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::{ExtractionConfig, SellerPhrase};
use crate::models::record::{ExtractedRecord, Field};
use crate::normalize::normalize_whitespace;
use crate::transcript::RecognizedText;

use super::rules::{
    address_chain, buyer_chain, date_chain, price_chain, seller_chain, FieldExtractor, RuleChain,
    RuleInput,
};
use super::{AgreementExtractor, AgreementParser};

/// How one field was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResolution {
    pub field: Field,
    /// Rule that produced the value; `None` when the field is not found.
    pub rule: Option<&'static str>,
    /// Byte span of the source match in the normalized text.
    pub position: Option<(usize, usize)>,
}

/// Result of parsing one agreement.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: ExtractedRecord,
    /// The whitespace-normalized text the rules ran against.
    pub normalized_text: String,
    /// Per-field rule provenance, in record order.
    pub resolutions: Vec<FieldResolution>,
    /// One entry per field that was not found.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionResult {
    pub fn resolution(&self, field: Field) -> Option<&FieldResolution> {
        self.resolutions.iter().find(|r| r.field == field)
    }
}

/// Parser running one rule chain per record field.
#[derive(Debug, Clone)]
pub struct PurchaseAgreementParser {
    seller_phrase: SellerPhrase,
    chains: Vec<RuleChain>,
}

impl PurchaseAgreementParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_phrase(SellerPhrase::default())
    }

    /// Create a parser from the extraction section of the configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::with_phrase(config.seller_phrase)
    }

    /// Set the seller introduction phrase variant.
    pub fn with_seller_phrase(self, phrase: SellerPhrase) -> Self {
        Self::with_phrase(phrase)
    }

    fn with_phrase(seller_phrase: SellerPhrase) -> Self {
        Self {
            seller_phrase,
            chains: vec![
                buyer_chain(),
                seller_chain(seller_phrase),
                address_chain(),
                price_chain(),
                date_chain(),
            ],
        }
    }

    pub fn seller_phrase(&self) -> SellerPhrase {
        self.seller_phrase
    }

    /// Rule chains in record order.
    pub fn chains(&self) -> &[RuleChain] {
        &self.chains
    }
}

impl Default for PurchaseAgreementParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AgreementParser for PurchaseAgreementParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        info!("Parsing agreement from {} characters of text", text.len());

        let normalized = normalize_whitespace(text);
        let input = RuleInput::new(normalized.as_str());

        let mut record = ExtractedRecord::new();
        let mut resolutions = Vec::with_capacity(self.chains.len());
        let mut warnings = Vec::new();

        for chain in &self.chains {
            let field = chain.field();
            match chain.extract(&input) {
                Some(m) => {
                    debug!("Resolved {} via {}", field, m.rule);
                    record.set(field, Some(m.value));
                    resolutions.push(FieldResolution {
                        field,
                        rule: Some(m.rule),
                        position: m.position,
                    });
                }
                None => {
                    debug!("No rule matched {}", field);
                    warnings.push(format!("Could not extract {}", field.label().to_lowercase()));
                    resolutions.push(FieldResolution {
                        field,
                        rule: None,
                        position: None,
                    });
                }
            }
        }

        debug!(
            "Extracted {} of {} fields",
            Field::ALL.len() - record.missing_fields().len(),
            Field::ALL.len()
        );

        ExtractionResult {
            record,
            normalized_text: normalized.into_inner(),
            resolutions,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl AgreementExtractor for PurchaseAgreementParser {
    fn extract(&self, transcript: &RecognizedText) -> ExtractedRecord {
        self.extract_from_text(transcript.as_str())
    }

    fn extract_from_text(&self, text: &str) -> ExtractedRecord {
        self.parse(text).record
    }
}
