//! Score computation for both tagging axes

use crate::alphabet::{Alphabet, Capitalization, Punctuation};
use crate::config::{LengthPolicy, ScoreConfig};
use crate::decoder::{DecodedLabels, LabelDecoder};
use crate::error::{Result, ScoreError};
use crate::metrics::{accuracy, f1_binary, f1_for_class, f1_macro};
use crate::report::{class_f1_key, AxisReport, MetricsReport};
use std::collections::BTreeSet;

/// Computes accuracy and F1 metrics from decoded label sequences
#[derive(Debug, Clone, Default)]
pub struct ScoreComputer {
    config: ScoreConfig,
}

impl ScoreComputer {
    /// Create a computer with the default (strict) configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a computer with a custom configuration
    pub fn with_config(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    /// Score both axes
    ///
    /// Punctuation gets `accuracy` and `f1_macro`, capitalization gets
    /// `accuracy` and binary `f1` with `U` as the positive class. Each axis
    /// then gets one `f1_'<label>'` entry per class found in its ground truth,
    /// in code order.
    pub fn compute(
        &self,
        punct_preds: &[usize],
        punct_labels: &[usize],
        capit_preds: &[usize],
        capit_labels: &[usize],
    ) -> Result<MetricsReport> {
        let average = self.config.macro_average;
        let punctuation =
            self.score_axis::<Punctuation, _>(punct_preds, punct_labels, |preds, labels| {
                let score = f1_macro(preds, labels, Punctuation::class_count(), average);
                ("f1_macro", score)
            })?;

        let capitalization =
            self.score_axis::<Capitalization, _>(capit_preds, capit_labels, |preds, labels| {
                ("f1", f1_binary(preds, labels, Capitalization::Upper.code()))
            })?;

        Ok(MetricsReport {
            punctuation,
            capitalization,
        })
    }

    /// Score decoded predictions against decoded ground truth
    pub fn compute_decoded(
        &self,
        preds: &DecodedLabels,
        labels: &DecodedLabels,
    ) -> Result<MetricsReport> {
        self.compute(
            &preds.punctuation,
            &labels.punctuation,
            &preds.capitalization,
            &labels.capitalization,
        )
    }

    /// Decode both tag texts and score them
    pub fn score_texts(&self, preds_text: &str, labels_text: &str) -> Result<MetricsReport> {
        let preds = LabelDecoder::decode(preds_text)?;
        let labels = LabelDecoder::decode(labels_text)?;
        self.compute_decoded(&preds, &labels)
    }

    fn score_axis<A, F>(
        &self,
        preds: &[usize],
        labels: &[usize],
        aggregate: F,
    ) -> Result<AxisReport>
    where
        A: Alphabet,
        F: Fn(&[usize], &[usize]) -> (&'static str, f64),
    {
        let (preds, labels) = self.align::<A>(preds, labels)?;
        validate_codes::<A>(preds)?;
        validate_codes::<A>(labels)?;

        if labels.is_empty() {
            return Err(ScoreError::EmptyInput);
        }

        let mut report = AxisReport::new();
        report.insert("accuracy", accuracy(preds, labels));

        let (name, score) = aggregate(preds, labels);
        report.insert(name, score);

        let present: BTreeSet<usize> = labels.iter().copied().collect();
        for class in present {
            if let Some(label) = A::from_code(class) {
                let score = f1_for_class(preds, labels, class);
                report.insert(class_f1_key(label.as_char()), score);
            }
        }

        Ok(report)
    }

    /// Apply the length policy to a prediction/label pair
    fn align<'a, A: Alphabet>(
        &self,
        preds: &'a [usize],
        labels: &'a [usize],
    ) -> Result<(&'a [usize], &'a [usize])> {
        if preds.len() == labels.len() {
            return Ok((preds, labels));
        }

        match self.config.length_policy {
            LengthPolicy::Strict => Err(ScoreError::LengthMismatch {
                axis: A::AXIS,
                predictions: preds.len(),
                labels: labels.len(),
            }),
            LengthPolicy::Truncate => {
                let len = preds.len().min(labels.len());
                log::warn!(
                    "{} predictions ({}) and labels ({}) differ in length, scoring first {} tags",
                    A::AXIS,
                    preds.len(),
                    labels.len(),
                    len
                );
                Ok((&preds[..len], &labels[..len]))
            }
        }
    }
}

fn validate_codes<A: Alphabet>(codes: &[usize]) -> Result<()> {
    match codes.iter().find(|&&code| A::from_code(code).is_none()) {
        Some(&code) => Err(ScoreError::UnknownCode {
            axis: A::AXIS,
            code,
        }),
        None => Ok(()),
    }
}
