//! Error types for the deedscan-core library.
//!
//! The extraction engine itself never fails: a field it cannot recover is
//! reported as [`crate::NOT_FOUND`]. The errors below belong to the I/O edges
//! (loading transcripts and configuration files) and to the cardinal-number
//! converter, whose failures are absorbed by the price rule.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the deedscan library.
#[derive(Error, Debug)]
pub enum DeedscanError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A transcript file contained no text at all.
    #[error("transcript is empty: {}", .0.display())]
    EmptyTranscript(PathBuf),

    /// A transcript file exceeded the configured size limit.
    #[error("transcript {} is {size} bytes, limit is {limit}", .path.display())]
    TranscriptTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
}

/// Errors from converting English number words into a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardinalError {
    /// The phrase contained no number words.
    #[error("no number words found in {0:?}")]
    NoNumberWords(String),

    /// A scale word (thousand, million, billion) or "point" appeared twice.
    #[error("redundant number word: {0}")]
    Redundant(&'static str),

    /// Scale words were not in descending order.
    #[error("scale words out of order in {0:?}")]
    OutOfOrder(String),

    /// A scale word had no multiplier in front of it.
    #[error("missing multiplier before {0}")]
    MissingMultiplier(&'static str),

    /// A group of words below one thousand could not be read as a number.
    #[error("malformed number group: {0:?}")]
    MalformedGroup(String),

    /// A word after "point" was not a single digit word.
    #[error("invalid decimal digit word: {0:?}")]
    InvalidDecimal(String),
}

/// Result type for the deedscan library.
pub type Result<T> = std::result::Result<T, DeedscanError>;
