//! Classification metrics over integer-coded label sequences
//!
//! All ratios with a zero denominator evaluate to `0.0`.

/// Class set used when averaging per-class F1 into a macro score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacroAverage {
    /// Average over every class of the alphabet; absent classes count as 0
    #[default]
    Alphabet,
    /// Average over classes present in predictions or ground truth
    Observed,
}

/// One-vs-rest confusion counts for a single class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassCounts {
    /// Positions predicted as the class that truly are the class
    pub true_positives: usize,
    /// Positions predicted as the class that are another class
    pub false_positives: usize,
    /// Positions of the class predicted as another class
    pub false_negatives: usize,
}

impl ClassCounts {
    /// Count one-vs-rest outcomes for `class` over paired positions
    pub fn one_vs_rest(preds: &[usize], labels: &[usize], class: usize) -> Self {
        let mut counts = Self::default();
        for (&pred, &label) in preds.iter().zip(labels) {
            match (pred == class, label == class) {
                (true, true) => counts.true_positives += 1,
                (true, false) => counts.false_positives += 1,
                (false, true) => counts.false_negatives += 1,
                (false, false) => {}
            }
        }
        counts
    }

    /// Whether the class occurs in neither predictions nor ground truth
    pub fn is_absent(&self) -> bool {
        self.true_positives + self.false_positives + self.false_negatives == 0
    }

    /// Precision: TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// Recall: TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    /// F1 score: 2 * (precision * recall) / (precision + recall)
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall > 0.0 {
            2.0 * (precision * recall) / (precision + recall)
        } else {
            0.0
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}

/// Fraction of positions where prediction equals ground truth
pub fn accuracy(preds: &[usize], labels: &[usize]) -> f64 {
    let total = preds.len().min(labels.len());
    let correct = preds
        .iter()
        .zip(labels)
        .filter(|(pred, label)| pred == label)
        .count();
    ratio(correct, total)
}

/// One-vs-rest F1 for a single class
pub fn f1_for_class(preds: &[usize], labels: &[usize], class: usize) -> f64 {
    ClassCounts::one_vs_rest(preds, labels, class).f1()
}

/// Binary F1 with `positive` as the positive class
pub fn f1_binary(preds: &[usize], labels: &[usize], positive: usize) -> f64 {
    f1_for_class(preds, labels, positive)
}

/// Unweighted mean of per-class F1 over `class_count` classes (codes `0..class_count`)
pub fn f1_macro(
    preds: &[usize],
    labels: &[usize],
    class_count: usize,
    average: MacroAverage,
) -> f64 {
    let per_class = (0..class_count).map(|class| ClassCounts::one_vs_rest(preds, labels, class));

    let scores: Vec<f64> = match average {
        MacroAverage::Alphabet => per_class.map(|counts| counts.f1()).collect(),
        MacroAverage::Observed => per_class
            .filter(|counts| !counts.is_absent())
            .map(|counts| counts.f1())
            .collect(),
    };

    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}
