//! Test-then-train evaluation loop

use tracing::{debug, info};

use super::config::EvalConfig;
use super::summary::{RunSummary, StreamSummary, Termination};
use crate::classifier::StreamClassifier;
use crate::error::{Error, Result};
use crate::eval::clock::{Clock, MonotonicClock};
use crate::eval::drift::DriftProximityTracker;
use crate::eval::schedule::{StreamScheduler, Transition};
use crate::eval::window::{MetricRecord, StreamMetrics};
use crate::sink::{DriftAccuracySink, MetricsSink};

/// Prequential evaluator over one classifier and several streams
///
/// Each step asks the scheduler for the active stream, pulls the next
/// instance, predicts, scores the prediction and then trains on it. Every
/// `sample_freq` instances of a stream one [`MetricRecord`] goes to that
/// stream's sink.
pub struct PrequentialEvaluator<C, K = MonotonicClock> {
    config: EvalConfig,
    classifier: C,
    clock: K,
    scheduler: StreamScheduler,
    metrics: Vec<Option<StreamMetrics>>,
    drift: Vec<DriftProximityTracker>,
    records: Vec<usize>,
}

impl<C: StreamClassifier> PrequentialEvaluator<C> {
    /// Validate `config` for `n_streams` streams and build the evaluator
    ///
    /// The classifier must already have a data source bound for every stream
    /// the schedule can activate.
    pub fn new(config: EvalConfig, classifier: C, n_streams: usize) -> Result<Self> {
        config.validate(n_streams)?;
        let scheduler =
            StreamScheduler::new(config.policy.clone(), n_streams, config.position_basis)?;
        let drift = (0..n_streams)
            .map(|stream| {
                let onsets = config.drift_locations.get(&stream).cloned().unwrap_or_default();
                DriftProximityTracker::new(onsets)
            })
            .collect();

        Ok(Self {
            config,
            classifier,
            clock: MonotonicClock::new(),
            scheduler,
            metrics: vec![None; n_streams],
            drift,
            records: vec![0; n_streams],
        })
    }
}

impl<C: StreamClassifier, K: Clock> PrequentialEvaluator<C, K> {
    /// Replace the time source used for elapsed-time accounting
    pub fn with_clock<K2: Clock>(self, clock: K2) -> PrequentialEvaluator<C, K2> {
        PrequentialEvaluator {
            config: self.config,
            classifier: self.classifier,
            clock,
            scheduler: self.scheduler,
            metrics: self.metrics,
            drift: self.drift,
            records: self.records,
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn into_classifier(self) -> C {
        self.classifier
    }

    pub fn scheduler(&self) -> &StreamScheduler {
        &self.scheduler
    }

    /// Metric state of `stream`, or `None` if it was never activated
    pub fn metrics(&self, stream: usize) -> Option<&StreamMetrics> {
        self.metrics.get(stream).and_then(Option::as_ref)
    }

    pub fn n_streams(&self) -> usize {
        self.metrics.len()
    }

    /// Run until the scheduler finishes or the instance ceiling is reached
    ///
    /// `sinks` holds one metrics sink per stream, indexed by stream. A
    /// classifier or sink failure aborts the run; records already written
    /// stay in their sinks.
    pub fn run<S: MetricsSink>(
        &mut self,
        sinks: &mut [S],
        mut drift_sink: Option<&mut dyn DriftAccuracySink>,
    ) -> Result<RunSummary> {
        if sinks.len() != self.n_streams() {
            return Err(Error::ConfigError(format!(
                "expected {} metrics sinks, got {}",
                self.n_streams(),
                sinks.len()
            )));
        }

        info!(
            policy = self.config.policy.name(),
            streams = self.n_streams(),
            sample_freq = self.config.sample_freq,
            "starting prequential evaluation"
        );

        let termination = loop {
            if self
                .config
                .max_instances
                .is_some_and(|max| self.scheduler.global_position() >= max)
            {
                break Termination::InstanceCeiling;
            }

            if let Some(transition) = self.scheduler.poll() {
                self.apply(transition);
            }
            let Some(stream) = self.scheduler.active() else {
                break Termination::ScheduleExhausted;
            };

            if !self.classifier.next_instance()? {
                debug!(stream, "stream exhausted");
                if let Some(transition) = self.scheduler.on_exhausted() {
                    self.apply(transition);
                }
                continue;
            }

            let predicted = self.classifier.predict()?;
            let actual = self.classifier.current_label()?;
            let position = self.scheduler.position(stream);

            let metrics = self.metrics[stream].get_or_insert_with(StreamMetrics::new);
            metrics.observe(predicted, actual);

            if let Some(accuracy) = self.drift[stream].observe(position, predicted == actual) {
                debug!(stream, position, accuracy, "drift interval resolved");
                if let Some(sink) = drift_sink.as_deref_mut() {
                    sink.write_accuracy(accuracy)?;
                }
            }

            self.classifier.train()?;
            self.scheduler.record_instance();

            if metrics.should_report(self.config.sample_freq) {
                let window = metrics.report_and_reset(self.config.sample_freq);
                let elapsed = metrics.elapsed(self.clock.now());
                let record =
                    MetricRecord::new(window, self.classifier.tree_counts(), elapsed.as_secs_f64());
                debug!(
                    stream,
                    count = record.count,
                    accuracy = record.accuracy,
                    kappa = record.kappa,
                    "metric record"
                );
                sinks[stream].write_record(&record)?;
                self.records[stream] += 1;
            }
        };

        for sink in sinks.iter_mut() {
            sink.flush()?;
        }

        let summary = self.finish(termination);
        info!(
            instances = summary.instances_processed,
            termination = %summary.termination,
            "evaluation finished"
        );
        Ok(summary)
    }

    fn apply(&mut self, transition: Transition) {
        let now = self.clock.now();
        match transition {
            Transition::Activated { from, to } => {
                if let Some(metrics) = from.and_then(|i| self.metrics[i].as_mut()) {
                    metrics.suspend(now);
                }
                self.metrics[to].get_or_insert_with(StreamMetrics::new).resume(now);
                self.classifier.switch_active_stream(to);
                info!(
                    stream = to,
                    previous = ?from,
                    position = self.scheduler.global_position(),
                    "stream activated"
                );
            }
            Transition::Finished { from } => {
                if let Some(metrics) = from.and_then(|i| self.metrics[i].as_mut()) {
                    metrics.suspend(now);
                }
                debug!(previous = ?from, "scheduler finished");
            }
        }
    }

    fn finish(&mut self, termination: Termination) -> RunSummary {
        if let Some(stream) = self.scheduler.active() {
            let now = self.clock.now();
            if let Some(metrics) = self.metrics[stream].as_mut() {
                metrics.suspend(now);
            }
        }

        let streams = self
            .metrics
            .iter()
            .enumerate()
            .map(|(stream, metrics)| StreamSummary {
                stream,
                instances: metrics.as_ref().map_or(0, StreamMetrics::instance_count),
                records: self.records[stream],
                elapsed_secs: metrics
                    .as_ref()
                    .map_or(0.0, |m| m.elapsed(std::time::Duration::ZERO).as_secs_f64()),
            })
            .collect();

        RunSummary {
            policy: self.config.policy.name().to_string(),
            instances_processed: self.scheduler.global_position(),
            activations: self.scheduler.activations(),
            drift_intervals: self.drift.iter().map(DriftProximityTracker::resolved).sum(),
            termination,
            streams,
        }
    }
}
