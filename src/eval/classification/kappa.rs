//! Cohen's kappa

use super::confusion::ConfusionMatrix;
use crate::Label;

/// Cohen's kappa between actual and predicted labels
///
/// kappa = (p_o - p_e) / (1 - p_e), where p_o is observed agreement and p_e is
/// the agreement expected by chance from the marginal label frequencies.
///
/// Returns `0.0` whenever the statistic is undefined: an empty window, or a
/// window where chance agreement is already 1 (a single class on both sides).
pub fn cohen_kappa(actual: &[Label], predicted: &[Label]) -> f64 {
    kappa_from_matrix(&ConfusionMatrix::from_predictions(predicted, actual))
}

/// Cohen's kappa from a prebuilt confusion matrix
pub fn kappa_from_matrix(cm: &ConfusionMatrix) -> f64 {
    let total = cm.total();
    if total == 0 {
        return 0.0;
    }
    let n = total as f64;

    let observed = cm.agreements() as f64 / n;
    let expected = cm.marginal_products() / (n * n);

    let kappa = (observed - expected) / (1.0 - expected);
    if kappa.is_finite() {
        kappa
    } else {
        0.0
    }
}
