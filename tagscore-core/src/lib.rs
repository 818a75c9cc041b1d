//! Scoring for joint punctuation and capitalization tagging
//!
//! Predictions and ground truth are texts of two-character tags, one per
//! word: a punctuation label (`O`, `,`, `.`, `?`) followed by a
//! capitalization label (`O`, `U`). [`LabelDecoder`] turns such a text into
//! two integer label sequences and [`ScoreComputer`] compares predicted and
//! true sequences, producing a [`MetricsReport`].
//!
//! ```
//! let report = tagscore_core::score_texts(".O OU ,O", "OO OU .O").unwrap();
//!
//! assert_eq!(report.capitalization.get("accuracy"), Some(1.0));
//! assert!(report.punctuation.get("f1_','").is_none());
//! ```

#![warn(missing_docs)]

pub mod alphabet;
pub mod config;
pub mod decoder;
pub mod error;
pub mod metrics;
pub mod report;
pub mod scorer;

// Re-export key types
pub use alphabet::{Alphabet, Axis, Capitalization, Punctuation};
pub use config::{LengthPolicy, ScoreConfig, ScoreConfigBuilder};
pub use decoder::{DecodedLabels, LabelDecoder};
pub use error::{Result, ScoreError, TagDefect};
pub use metrics::MacroAverage;
pub use report::{AxisReport, MetricsReport};
pub use scorer::ScoreComputer;

/// Decode and score two tag texts with the default configuration
pub fn score_texts(preds_text: &str, labels_text: &str) -> Result<MetricsReport> {
    ScoreComputer::new().score_texts(preds_text, labels_text)
}
