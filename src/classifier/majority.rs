//! Majority-class baseline over CSV streams

use std::collections::BTreeMap;
use std::path::Path;

use super::traits::StreamClassifier;
use crate::data::{CsvStream, Instance};
use crate::error::{Error, Result};
use crate::Label;

#[derive(Default)]
struct StreamState {
    source: Option<CsvStream>,
    current: Option<Instance>,
    class_counts: BTreeMap<Label, u64>,
}

/// Predicts the most frequent label seen so far on the active stream
///
/// Each stream keeps its own class counts. Ties go to the smallest label and
/// an untrained stream predicts `0`.
#[derive(Default)]
pub struct MajorityClassClassifier {
    streams: Vec<StreamState>,
    active: usize,
}

impl MajorityClassClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Training count of `label` on `stream`
    pub fn class_count(&self, stream: usize, label: Label) -> u64 {
        self.streams
            .get(stream)
            .and_then(|s| s.class_counts.get(&label))
            .copied()
            .unwrap_or(0)
    }

    fn active_state(&self) -> Result<&StreamState> {
        self.streams
            .get(self.active)
            .ok_or_else(|| Error::Classifier(format!("stream {} has no data source", self.active)))
    }

    fn active_state_mut(&mut self) -> Result<&mut StreamState> {
        let active = self.active;
        self.streams
            .get_mut(active)
            .ok_or_else(|| Error::Classifier(format!("stream {active} has no data source")))
    }

    fn current_instance(&self) -> Result<&Instance> {
        self.active_state()?
            .current
            .as_ref()
            .ok_or_else(|| Error::Classifier(format!("stream {} has no current instance", self.active)))
    }
}

impl StreamClassifier for MajorityClassClassifier {
    fn init_data_source(&mut self, stream: usize, path: &Path) -> Result<()> {
        let source = CsvStream::open(path)?;
        if self.streams.len() <= stream {
            self.streams.resize_with(stream + 1, StreamState::default);
        }
        self.streams[stream] = StreamState { source: Some(source), ..StreamState::default() };
        Ok(())
    }

    fn switch_active_stream(&mut self, stream: usize) {
        self.active = stream;
    }

    fn next_instance(&mut self) -> Result<bool> {
        let active = self.active;
        let state = self.active_state_mut()?;
        let source = state
            .source
            .as_mut()
            .ok_or_else(|| Error::Classifier(format!("stream {active} has no data source")))?;
        state.current = source.next_instance()?;
        Ok(state.current.is_some())
    }

    fn predict(&mut self) -> Result<Label> {
        self.current_instance()?;
        let counts = &self.active_state()?.class_counts;
        let best = counts
            .iter()
            .fold(None::<(Label, u64)>, |best, (&label, &count)| match best {
                Some((_, top)) if top >= count => best,
                _ => Some((label, count)),
            });
        Ok(best.map_or(0, |(label, _)| label))
    }

    fn current_label(&self) -> Result<Label> {
        Ok(self.current_instance()?.label)
    }

    fn train(&mut self) -> Result<()> {
        let label = self.current_label()?;
        let state = self.active_state_mut()?;
        *state.class_counts.entry(label).or_insert(0) += 1;
        Ok(())
    }
}
