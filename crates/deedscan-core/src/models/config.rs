//! Configuration structures for extraction and the command-line tools.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DeedscanError, Result};

/// Main configuration for deedscan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedscanConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Transcript input configuration.
    pub input: InputConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Which introduction phrase the seller fallback rule looks for.
///
/// Agreements seen so far print "The Seller(s) ia/are"; `Observed` matches
/// exactly that, `Corrected` matches "is/are", `Lenient` accepts both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SellerPhrase {
    #[default]
    Observed,
    Corrected,
    Lenient,
}

impl SellerPhrase {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "observed" => Some(Self::Observed),
            "corrected" => Some(Self::Corrected),
            "lenient" => Some(Self::Lenient),
            _ => None,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Phrase variant for the seller fallback rule.
    pub seller_phrase: SellerPhrase,
}

/// Transcript input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Inserted between page transcripts of one document.
    pub page_separator: String,

    /// File extensions picked up by batch globbing.
    pub extensions: Vec<String>,

    /// Largest transcript file accepted, in bytes.
    pub max_bytes: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            page_separator: "\n".to_string(),
            extensions: vec!["txt".to_string()],
            max_bytes: 8 * 1024 * 1024,
        }
    }
}

impl InputConfig {
    /// Whether a path has one of the configured extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// Output format for extracted records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
    Text,
}

impl OutputFormat {
    /// File extension for written outputs.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format.
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl DeedscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<()> {
        if self.input.max_bytes == 0 {
            return Err(DeedscanError::Config(
                "input.max_bytes must be greater than zero".to_string(),
            ));
        }
        if self.input.extensions.is_empty() {
            return Err(DeedscanError::Config(
                "input.extensions must list at least one extension".to_string(),
            ));
        }
        Ok(())
    }
}
