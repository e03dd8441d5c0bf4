//! Scripted classifier replaying fixed predictions

use std::path::Path;

use super::traits::StreamClassifier;
use crate::error::{Error, Result};
use crate::eval::TreeCounts;
use crate::Label;

/// Replays `(label, prediction)` pairs per stream
///
/// Useful for driving the evaluator deterministically: every stream is an
/// in-memory script, predictions are whatever the script says, and training
/// only counts calls. Records each stream switch so tests can inspect the
/// order the scheduler imposed.
#[derive(Debug, Clone, Default)]
pub struct ReplayClassifier {
    scripts: Vec<Vec<(Label, Label)>>,
    cursors: Vec<Option<usize>>,
    trained: Vec<usize>,
    active: usize,
    switches: Vec<usize>,
    bound: Vec<bool>,
    trees: TreeCounts,
    fail_train_after: Option<usize>,
}

impl ReplayClassifier {
    /// One script per stream, each a list of `(label, prediction)` pairs
    pub fn new(scripts: Vec<Vec<(Label, Label)>>) -> Self {
        let n = scripts.len();
        Self {
            scripts,
            cursors: vec![None; n],
            trained: vec![0; n],
            bound: vec![false; n],
            ..Self::default()
        }
    }

    /// Report fixed tree counts from the introspection methods
    pub fn with_tree_counts(mut self, trees: TreeCounts) -> Self {
        self.trees = trees;
        self
    }

    /// Make `train` fail once this many instances have been trained in total
    pub fn fail_train_after(mut self, trained: usize) -> Self {
        self.fail_train_after = Some(trained);
        self
    }

    /// Streams selected via `switch_active_stream`, in call order
    pub fn switches(&self) -> &[usize] {
        &self.switches
    }

    /// Training calls received by `stream`
    pub fn trained(&self, stream: usize) -> usize {
        self.trained.get(stream).copied().unwrap_or(0)
    }

    /// Whether `init_data_source` was called for `stream`
    pub fn is_bound(&self, stream: usize) -> bool {
        self.bound.get(stream).copied().unwrap_or(false)
    }

    fn current(&self) -> Result<(Label, Label)> {
        let cursor = self
            .cursors
            .get(self.active)
            .copied()
            .flatten()
            .ok_or_else(|| Error::Classifier(format!("stream {} has no current instance", self.active)))?;
        Ok(self.scripts[self.active][cursor])
    }
}

impl StreamClassifier for ReplayClassifier {
    fn init_data_source(&mut self, stream: usize, path: &Path) -> Result<()> {
        match self.bound.get_mut(stream) {
            Some(bound) => {
                *bound = true;
                Ok(())
            }
            None => Err(Error::data_source(path, format!("no script for stream {stream}"))),
        }
    }

    fn switch_active_stream(&mut self, stream: usize) {
        self.active = stream;
        self.switches.push(stream);
    }

    fn next_instance(&mut self) -> Result<bool> {
        let active = self.active;
        let len = self
            .scripts
            .get(active)
            .map(Vec::len)
            .ok_or_else(|| Error::Classifier(format!("no script for stream {active}")))?;
        let cursor = &mut self.cursors[active];
        let next = cursor.map_or(0, |c| c + 1);
        if next < len {
            *cursor = Some(next);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn predict(&mut self) -> Result<Label> {
        Ok(self.current()?.1)
    }

    fn current_label(&self) -> Result<Label> {
        Ok(self.current()?.0)
    }

    fn train(&mut self) -> Result<()> {
        self.current()?;
        let total: usize = self.trained.iter().sum();
        if self.fail_train_after.is_some_and(|limit| total >= limit) {
            return Err(Error::Classifier(format!("training failed after {total} instances")));
        }
        self.trained[self.active] += 1;
        Ok(())
    }

    fn candidate_tree_count(&self) -> usize {
        self.trees.candidate
    }

    fn transferred_tree_count(&self) -> usize {
        self.trees.transferred
    }

    fn tree_pool_size(&self) -> usize {
        self.trees.pool
    }
}
