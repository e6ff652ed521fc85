//! OCR transcripts as handed over by the recognition step.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DeedscanError, Result};
use crate::normalize::{normalize_whitespace, NormalizedText};

/// Default page separator, matching how recognized pages are concatenated.
pub const DEFAULT_PAGE_SEPARATOR: &str = "\n";

/// Full recognized text of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecognizedText(String);

impl RecognizedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build one transcript from per-page texts.
    pub fn from_pages<I, S>(pages: I, separator: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (i, page) in pages.into_iter().enumerate() {
            if i > 0 {
                text.push_str(separator);
            }
            text.push_str(page.as_ref());
        }
        Self(text)
    }

    /// Read a transcript file, refusing files above `max_bytes`.
    ///
    /// A file that holds only whitespace is reported as
    /// [`DeedscanError::EmptyTranscript`].
    pub fn read_from(path: &Path, max_bytes: u64) -> Result<Self> {
        let size = fs::metadata(path)?.len();
        if size > max_bytes {
            return Err(DeedscanError::TranscriptTooLarge {
                path: path.to_path_buf(),
                size,
                limit: max_bytes,
            });
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8_lossy(&bytes).into_owned();
        if text.trim().is_empty() {
            return Err(DeedscanError::EmptyTranscript(path.to_path_buf()));
        }

        debug!("Read {} bytes of transcript from {}", text.len(), path.display());
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn normalize(&self) -> NormalizedText {
        normalize_whitespace(&self.0)
    }
}

impl From<String> for RecognizedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for RecognizedText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}
