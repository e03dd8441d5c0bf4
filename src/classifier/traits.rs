//! Classifier capability trait

use std::path::Path;

use crate::error::Result;
use crate::eval::TreeCounts;
use crate::Label;

/// Online classifier serving several logical streams
///
/// One instance is shared by every stream; `switch_active_stream` selects
/// which stream the instance, prediction and training calls refer to.
/// Introspection methods default to `0` for classifiers without tree pools.
pub trait StreamClassifier {
    /// Bind `stream` to the data found at `path`
    fn init_data_source(&mut self, stream: usize, path: &Path) -> Result<()>;

    /// Direct subsequent calls at `stream`
    fn switch_active_stream(&mut self, stream: usize);

    /// Advance the active stream; `false` means it is exhausted
    fn next_instance(&mut self) -> Result<bool>;

    /// Predict the label of the current instance
    fn predict(&mut self) -> Result<Label>;

    /// Ground-truth label of the current instance
    fn current_label(&self) -> Result<Label>;

    /// Learn from the current instance
    fn train(&mut self) -> Result<()>;

    /// Candidate trees waiting to replace drifted foreground trees
    fn candidate_tree_count(&self) -> usize {
        0
    }

    /// Trees transferred in from other streams
    fn transferred_tree_count(&self) -> usize {
        0
    }

    /// Trees kept in the online repository
    fn tree_pool_size(&self) -> usize {
        0
    }

    /// All introspection values at once
    fn tree_counts(&self) -> TreeCounts {
        TreeCounts {
            candidate: self.candidate_tree_count(),
            transferred: self.transferred_tree_count(),
            pool: self.tree_pool_size(),
        }
    }
}
