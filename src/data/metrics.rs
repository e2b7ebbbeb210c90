//! Confusion counts and the derived classification metrics.

use serde::Serialize;

use crate::data::geometry::{classify, DecisionLine, Label, Point};

/// 2×2 confusion tally. The four counts always sum to the number of points
/// that were scanned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionCounts {
    pub tp: usize,
    pub tn: usize,
    pub fp: usize,
    #[serde(rename = "fn")]
    pub fn_: usize,
}

impl ConfusionCounts {
    /// Count one `(actual, predicted)` pair.
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Positive, Label::Positive) => self.tp += 1,
            (Label::Negative, Label::Negative) => self.tn += 1,
            (Label::Negative, Label::Positive) => self.fp += 1,
            (Label::Positive, Label::Negative) => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }
}

/// Derived ratios, each in `[0,1]`. A zero denominator yields `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

impl Metrics {
    pub fn from_counts(c: &ConfusionCounts) -> Self {
        let accuracy = ratio(c.tp + c.tn, c.total());
        let precision = ratio(c.tp, c.tp + c.fp);
        let recall = ratio(c.tp, c.tp + c.fn_);
        // 2pr/(p+r) in count form, so ties like 16/128 stay exact.
        let f1 = ratio(2 * c.tp, 2 * c.tp + c.fp + c.fn_);
        Self {
            accuracy,
            precision,
            recall,
            f1,
        }
    }

    pub fn accuracy_percent(&self) -> u32 {
        percent(self.accuracy)
    }

    pub fn precision_percent(&self) -> u32 {
        percent(self.precision)
    }

    pub fn recall_percent(&self) -> u32 {
        percent(self.recall)
    }

    /// Display strings `(accuracy, precision, recall, f1)`, e.g.
    /// `("87%", "90%", "84%", "0.87")`.
    ///
    /// F1 uses the same half-up rounding as the percentages.
    pub fn display(&self) -> (String, String, String, String) {
        let f1 = percent(self.f1);
        (
            format!("{}%", self.accuracy_percent()),
            format!("{}%", self.precision_percent()),
            format!("{}%", self.recall_percent()),
            format!("{}.{:02}", f1 / 100, f1 % 100),
        )
    }
}

/// Whole percentage, rounded half up.
pub fn percent(v: f64) -> u32 {
    (v * 100.0 + 0.5).floor().max(0.0) as u32
}

/// Classify every point against `line` and tally the results.
pub fn confusion_counts(points: &[Point], line: &DecisionLine) -> ConfusionCounts {
    let mut counts = ConfusionCounts::default();
    for p in points {
        counts.record(p.actual, classify(p, line));
    }
    counts
}

/// Single O(n) pass producing both the counts and the derived metrics.
pub fn compute_metrics(points: &[Point], line: &DecisionLine) -> (ConfusionCounts, Metrics) {
    let counts = confusion_counts(points, line);
    let metrics = Metrics::from_counts(&counts);
    (counts, metrics)
}
