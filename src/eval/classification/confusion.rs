//! Confusion matrix over a window of label pairs

use std::collections::BTreeMap;

use crate::Label;

/// Sparse confusion matrix for multi-class classification
///
/// Only label pairs that occur in the window are stored, so labels may take
/// any value without affecting memory use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    cells: BTreeMap<(Label, Label), usize>,
    actual_totals: BTreeMap<Label, usize>,
    predicted_totals: BTreeMap<Label, usize>,
    total: usize,
}

impl ConfusionMatrix {
    /// Build from parallel predicted/actual label slices
    ///
    /// Extra elements of the longer slice are ignored.
    pub fn from_predictions(predicted: &[Label], actual: &[Label]) -> Self {
        let mut cm = Self::default();
        for (&pred, &truth) in predicted.iter().zip(actual) {
            *cm.cells.entry((truth, pred)).or_insert(0) += 1;
            *cm.actual_totals.entry(truth).or_insert(0) += 1;
            *cm.predicted_totals.entry(pred).or_insert(0) += 1;
            cm.total += 1;
        }
        cm
    }

    /// Total number of samples
    pub fn total(&self) -> usize {
        self.total
    }

    /// Samples on the diagonal
    pub fn agreements(&self) -> usize {
        self.cells.iter().filter(|((truth, pred), _)| truth == pred).map(|(_, &n)| n).sum()
    }

    /// Row sum: samples whose actual label is `class`
    pub fn actual_total(&self, class: Label) -> usize {
        self.actual_totals.get(&class).copied().unwrap_or(0)
    }

    /// Column sum: samples predicted as `class`
    pub fn predicted_total(&self, class: Label) -> usize {
        self.predicted_totals.get(&class).copied().unwrap_or(0)
    }

    /// Sum over labels of row total times column total
    ///
    /// Labels missing from either side contribute nothing.
    pub fn marginal_products(&self) -> f64 {
        self.actual_totals
            .iter()
            .map(|(&class, &n)| n as f64 * self.predicted_total(class) as f64)
            .sum()
    }
}
