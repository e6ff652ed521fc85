//! Core library for purchase-agreement field extraction.
//!
//! This crate provides:
//! - Whitespace normalization of OCR transcripts
//! - Rule-based extraction of buyer, seller, property address, offer price
//!   and key date, each with an ordered fallback chain
//! - The fixed five-field record and its `"Not Found"` sentinel
//! - Transcript loading and configuration for the outer tools
//!
//! OCR and PDF rendering are not part of this crate; it consumes the text an
//! OCR step has already produced.

pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod transcript;

pub use error::{CardinalError, DeedscanError, Result};
pub use extract::rules::words_to_number;
pub use extract::{
    extract_fields, AgreementExtractor, AgreementParser, ExtractionResult, FieldResolution,
    PurchaseAgreementParser,
};
pub use models::config::{DeedscanConfig, OutputFormat, SellerPhrase};
pub use models::record::{ExtractedRecord, Field, NOT_FOUND};
pub use normalize::{normalize_whitespace, NormalizedText};
pub use transcript::RecognizedText;
