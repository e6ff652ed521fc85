//! Data models: the extracted record and tool configuration.

pub mod config;
pub mod record;

pub use config::{DeedscanConfig, ExtractionConfig, InputConfig, OutputConfig, OutputFormat, SellerPhrase};
pub use record::{ExtractedRecord, Field, NOT_FOUND};
