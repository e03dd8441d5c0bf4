//! Agreement metrics for classification windows
//!
//! Provides:
//! - Confusion matrix computation
//! - Cohen's kappa with a finite fallback for degenerate windows

mod confusion;
mod kappa;


pub use confusion::ConfusionMatrix;
pub use kappa::{cohen_kappa, kappa_from_matrix};
