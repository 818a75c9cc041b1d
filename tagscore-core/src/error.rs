//! Scoring error types

use crate::alphabet::Axis;
use thiserror::Error;

/// What is wrong with a single tag token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagDefect {
    /// Token is not exactly two characters long
    WrongLength(usize),
    /// First character is not a punctuation label
    UnknownPunctuation(char),
    /// Second character is not a capitalization label
    UnknownCapitalization(char),
}

impl std::fmt::Display for TagDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagDefect::WrongLength(len) => write!(f, "expected 2 characters, found {len}"),
            TagDefect::UnknownPunctuation(c) => write!(f, "unknown punctuation label {c:?}"),
            TagDefect::UnknownCapitalization(c) => {
                write!(f, "unknown capitalization label {c:?}")
            }
        }
    }
}

/// Errors raised while decoding tags or computing scores
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// A token failed the tag format check
    #[error("malformed tag {token:?} at token {index}: {defect}")]
    MalformedTag {
        /// Zero-based token position
        index: usize,
        /// The offending token text
        token: String,
        /// Which check failed
        defect: TagDefect,
    },

    /// Predictions and labels for one axis have different lengths
    #[error("{axis} length mismatch: {predictions} predictions vs {labels} labels")]
    LengthMismatch {
        /// Axis being scored
        axis: Axis,
        /// Number of predicted codes
        predictions: usize,
        /// Number of ground-truth codes
        labels: usize,
    },

    /// A code outside the axis alphabet
    #[error("code {code} is not a {axis} class")]
    UnknownCode {
        /// Axis the code belongs to
        axis: Axis,
        /// The offending code
        code: usize,
    },

    /// Punctuation and capitalization codes of one text differ in length
    #[error(
        "misaligned labels: {punctuation} punctuation vs {capitalization} capitalization codes"
    )]
    Misaligned {
        /// Number of punctuation codes
        punctuation: usize,
        /// Number of capitalization codes
        capitalization: usize,
    },

    /// Nothing to score
    #[error("ground truth contains no tags")]
    EmptyInput,
}

/// Result type for scoring operations
pub type Result<T> = std::result::Result<T, ScoreError>;
