//! Scoring configuration

use crate::metrics::MacroAverage;

/// How to treat prediction and label sequences of different lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Reject mismatched lengths with an error
    #[default]
    Strict,
    /// Score only the common prefix of both sequences
    Truncate,
}

/// Configuration for [`ScoreComputer`](crate::ScoreComputer)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreConfig {
    /// Length mismatch handling
    pub length_policy: LengthPolicy,
    /// Class set for the punctuation macro F1
    pub macro_average: MacroAverage,
}

impl ScoreConfig {
    /// Reject mismatched lengths and average macro F1 over the whole alphabet
    pub fn strict() -> Self {
        Self::default()
    }

    /// Truncate mismatched sequences to their common prefix
    pub fn lenient() -> Self {
        Self {
            length_policy: LengthPolicy::Truncate,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ScoreConfigBuilder {
        ScoreConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ScoreConfigBuilder {
    config: ScoreConfig,
}

impl ScoreConfigBuilder {
    /// Set the length mismatch policy
    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.config.length_policy = policy;
        self
    }

    /// Set the macro F1 class set
    pub fn macro_average(mut self, average: MacroAverage) -> Self {
        self.config.macro_average = average;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ScoreConfig {
        self.config
    }
}
