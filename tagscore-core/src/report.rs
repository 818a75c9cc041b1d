//! Metrics report

use crate::alphabet::Axis;

/// Metric name for the one-vs-rest F1 of the class labelled `label`
pub fn class_f1_key(label: char) -> String {
    format!("f1_'{label}'")
}

/// Ordered metric name → score mapping for one axis
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisReport {
    entries: Vec<(String, f64)>,
}

impl AxisReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric, keeping insertion order
    pub fn insert(&mut self, name: impl Into<String>, score: f64) {
        self.entries.push((name.into(), score));
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, score)| *score)
    }

    /// Metric names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Metrics in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, score)| (key.as_str(), *score))
    }

    /// Number of metrics
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no metrics
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AxisReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, score) in &self.entries {
            map.serialize_entry(key, score)?;
        }
        map.end()
    }
}

/// Scores for both axes
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MetricsReport {
    /// Punctuation metrics: `accuracy`, `f1_macro` and per-class F1
    pub punctuation: AxisReport,
    /// Capitalization metrics: `accuracy`, `f1` and per-class F1
    pub capitalization: AxisReport,
}

impl MetricsReport {
    /// Report for one axis
    pub fn axis(&self, axis: Axis) -> &AxisReport {
        match axis {
            Axis::Punctuation => &self.punctuation,
            Axis::Capitalization => &self.capitalization,
        }
    }

    /// Render as JSON with 2-space indentation
    #[cfg(feature = "serde")]
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
