//! Whitespace normalization of OCR transcripts.
//!
//! Every extraction pattern is written against single-spaced text, so the
//! transcript is flattened to one line before any rule runs.

use std::fmt;

/// Transcript text with every whitespace run collapsed to one ASCII space.
///
/// Never contains two consecutive whitespace characters and never starts or
/// ends with whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse all whitespace (including OCR page breaks) into single spaces.
pub fn normalize_whitespace(text: &str) -> NormalizedText {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    NormalizedText(normalized)
}
