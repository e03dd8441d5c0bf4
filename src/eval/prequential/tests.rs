//! Tests for the prequential evaluation loop

use std::time::Duration;

use approx::assert_relative_eq;

use super::*;
use crate::classifier::ReplayClassifier;
use crate::config::ValidationError;
use crate::error::Error;
use crate::eval::{ManualClock, PositionBasis, SchedulePolicy, TreeCounts};
use crate::sink::{InMemoryDriftLog, InMemorySink};

fn correct(n: usize) -> Vec<(usize, usize)> {
    vec![(1, 1); n]
}

fn sinks(n: usize) -> Vec<InMemorySink> {
    vec![InMemorySink::new(); n]
}

#[test]
fn test_sequential_two_streams_end_to_end() {
    let classifier = ReplayClassifier::new(vec![correct(250), correct(100)]);
    let config = EvalConfig::new(100).with_policy(SchedulePolicy::Sequential);
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 2).unwrap();
    let mut sinks = sinks(2);

    let summary = evaluator.run(&mut sinks, None).unwrap();

    assert_eq!(sinks[0].counts(), vec![100, 200]);
    assert_eq!(sinks[1].counts(), vec![100]);
    assert_eq!(summary.instances_processed, 350);
    assert_eq!(summary.termination, Termination::ScheduleExhausted);
    assert_eq!(summary.activations, 2);
    assert_eq!(summary.stream(0).unwrap().instances, 250);
    assert_eq!(summary.stream(0).unwrap().records, 2);
    assert_eq!(summary.total_records(), 3);
    assert_eq!(evaluator.classifier().switches(), &[0, 1]);
}

#[test]
fn test_every_instance_is_trained_after_prediction() {
    let classifier = ReplayClassifier::new(vec![correct(30), correct(20)]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(10), classifier, 2).unwrap();
    evaluator.run(&mut sinks(2), None).unwrap();

    let classifier = evaluator.into_classifier();
    assert_eq!(classifier.trained(0), 30);
    assert_eq!(classifier.trained(1), 20);
}

#[test]
fn test_window_accuracy_and_kappa() {
    // Three of every four predictions correct
    let script: Vec<(usize, usize)> =
        (0..8).map(|i| if i % 4 == 3 { (1, 0) } else { (i % 2, i % 2) }).collect();
    let classifier = ReplayClassifier::new(vec![script]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(4), classifier, 1).unwrap();
    let mut sinks = sinks(1);
    evaluator.run(&mut sinks, None).unwrap();

    let records = sinks[0].records();
    assert_eq!(records.len(), 2);
    for record in records {
        assert_relative_eq!(record.accuracy, 0.75);
        assert!(record.kappa.is_finite());
    }
}

#[test]
fn test_perfect_two_class_window_has_unit_kappa() {
    let script: Vec<(usize, usize)> = (0..10).map(|i| (i % 2, i % 2)).collect();
    let classifier = ReplayClassifier::new(vec![script]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(10), classifier, 1).unwrap();
    let mut sinks = sinks(1);
    evaluator.run(&mut sinks, None).unwrap();

    let record = &sinks[0].records()[0];
    assert_relative_eq!(record.accuracy, 1.0);
    assert_relative_eq!(record.kappa, 1.0);
}

#[test]
fn test_single_class_window_reports_zero_kappa() {
    let classifier = ReplayClassifier::new(vec![correct(10)]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(10), classifier, 1).unwrap();
    let mut sinks = sinks(1);
    evaluator.run(&mut sinks, None).unwrap();
    assert_eq!(sinks[0].records()[0].kappa, 0.0);
}

#[test]
fn test_explicit_schedule_switches_after_five() {
    let classifier = ReplayClassifier::new(vec![correct(20), correct(20)]);
    let config = EvalConfig::new(5).with_policy(SchedulePolicy::explicit([(0usize, 5u64), (1, 10)]));
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 2).unwrap();
    let mut sinks = sinks(2);

    let summary = evaluator.run(&mut sinks, None).unwrap();

    assert_eq!(evaluator.classifier().switches(), &[0, 1]);
    assert_eq!(summary.stream(0).unwrap().instances, 5);
    // The last entry keeps stream 1 active until it runs dry
    assert_eq!(summary.stream(1).unwrap().instances, 20);
    assert_eq!(sinks[0].counts(), vec![5]);
    assert_eq!(sinks[1].counts(), vec![5, 10, 15, 20]);
}

#[test]
fn test_empty_schedule_processes_nothing() {
    let classifier = ReplayClassifier::new(vec![correct(10)]);
    let config = EvalConfig::new(5).with_policy(SchedulePolicy::Explicit(Vec::new()));
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 1).unwrap();
    let mut sinks = sinks(1);

    let summary = evaluator.run(&mut sinks, None).unwrap();

    assert_eq!(summary.instances_processed, 0);
    assert_eq!(summary.activations, 0);
    assert_eq!(summary.termination, Termination::ScheduleExhausted);
    assert!(sinks[0].records().is_empty());
    assert!(evaluator.classifier().switches().is_empty());
    assert!(evaluator.metrics(0).is_none());
}

#[test]
fn test_instance_ceiling_stops_run() {
    let classifier = ReplayClassifier::new(vec![correct(250), correct(100)]);
    let config = EvalConfig::new(100).with_max_instances(120);
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 2).unwrap();
    let mut sinks = sinks(2);

    let summary = evaluator.run(&mut sinks, None).unwrap();

    assert_eq!(summary.instances_processed, 120);
    assert_eq!(summary.termination, Termination::InstanceCeiling);
    assert_eq!(sinks[0].counts(), vec![100]);
    assert!(evaluator.metrics(1).is_none());
}

#[test]
fn test_classifier_failure_keeps_partial_output() {
    let classifier = ReplayClassifier::new(vec![correct(300)]).fail_train_after(150);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(100), classifier, 1).unwrap();
    let mut sinks = sinks(1);

    let result = evaluator.run(&mut sinks, None);

    assert!(matches!(result, Err(Error::Classifier(_))));
    assert_eq!(sinks[0].counts(), vec![100]);
}

#[test]
fn test_elapsed_time_frozen_while_inactive() {
    // Stream 0 active for [0, 5), stream 1 for [5, 10), stream 0 again after
    let classifier = ReplayClassifier::new(vec![correct(10), correct(5)]);
    let config = EvalConfig::new(5)
        .with_policy(SchedulePolicy::explicit([(0usize, 5u64), (1, 10), (0, 15)]));
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 2)
        .unwrap()
        .with_clock(ManualClock::ticking(Duration::from_secs(1)));
    let mut sinks = sinks(2);

    let summary = evaluator.run(&mut sinks, None).unwrap();

    let stream0: Vec<f64> = sinks[0].records().iter().map(|r| r.elapsed_secs).collect();
    let stream1: Vec<f64> = sinks[1].records().iter().map(|r| r.elapsed_secs).collect();
    assert_eq!(sinks[0].counts(), vec![5, 10]);
    assert_eq!(stream0, vec![1.0, 3.0]);
    assert_eq!(stream1, vec![1.0]);
    assert_relative_eq!(summary.stream(0).unwrap().elapsed_secs, 4.0);
    assert_relative_eq!(summary.stream(1).unwrap().elapsed_secs, 2.0);
    assert_eq!(evaluator.classifier().switches(), &[0, 1, 0]);
}

#[test]
fn test_tree_counts_copied_into_records() {
    let trees = TreeCounts { candidate: 2, transferred: 1, pool: 7 };
    let classifier = ReplayClassifier::new(vec![correct(10)]).with_tree_counts(trees);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(10), classifier, 1).unwrap();
    let mut sinks = sinks(1);
    evaluator.run(&mut sinks, None).unwrap();

    let record = &sinks[0].records()[0];
    assert_eq!(record.candidate_tree_count, 2);
    assert_eq!(record.transferred_tree_count, 1);
    assert_eq!(record.tree_pool_size, 7);
}

#[test]
fn test_drift_interval_emitted_after_onset() {
    let classifier = ReplayClassifier::new(vec![correct(2100)]);
    let config = EvalConfig::new(1000).with_drift_locations(0, vec![1000, 5000]);
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 1).unwrap();
    let mut drift_log = InMemoryDriftLog::new();

    let summary = evaluator.run(&mut sinks(1), Some(&mut drift_log)).unwrap();

    assert_eq!(drift_log.values(), &[0.999]);
    assert_eq!(summary.drift_intervals, 1);
}

#[test]
fn test_drift_position_basis() {
    let scripts = vec![correct(50), correct(1100)];

    let global = EvalConfig::new(100).with_drift_locations(1, vec![0]);
    let mut evaluator =
        PrequentialEvaluator::new(global, ReplayClassifier::new(scripts.clone()), 2).unwrap();
    let mut log = InMemoryDriftLog::new();
    evaluator.run(&mut sinks(2), Some(&mut log)).unwrap();
    // Stream 1 starts at global position 50, so only 950 land in the interval
    assert_eq!(log.values(), &[0.95]);

    let per_stream = EvalConfig::new(100)
        .with_drift_locations(1, vec![0])
        .with_position_basis(PositionBasis::Stream);
    let mut evaluator =
        PrequentialEvaluator::new(per_stream, ReplayClassifier::new(scripts), 2).unwrap();
    let mut log = InMemoryDriftLog::new();
    evaluator.run(&mut sinks(2), Some(&mut log)).unwrap();
    assert_eq!(log.values(), &[0.999]);
}

#[test]
fn test_drift_without_sink_still_counts() {
    let classifier = ReplayClassifier::new(vec![correct(1200)]);
    let config = EvalConfig::new(100).with_drift_locations(0, vec![100]);
    let mut evaluator = PrequentialEvaluator::new(config, classifier, 1).unwrap();
    let summary = evaluator.run(&mut sinks(1), None).unwrap();
    assert_eq!(summary.drift_intervals, 1);
}

#[test]
fn test_sink_count_mismatch_rejected() {
    let classifier = ReplayClassifier::new(vec![correct(10), correct(10)]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(5), classifier, 2).unwrap();
    let result = evaluator.run(&mut sinks(1), None);
    assert!(matches!(result, Err(Error::ConfigError(_))));
}

#[test]
fn test_zero_sample_freq_rejected() {
    let classifier = ReplayClassifier::new(vec![correct(10)]);
    let result = PrequentialEvaluator::new(EvalConfig::new(0), classifier, 1);
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::InvalidSampleFreq(0)))
    ));
}

#[test]
fn test_invalid_drift_locations_rejected() {
    let config = EvalConfig::new(10).with_drift_locations(3, vec![10]);
    assert!(matches!(
        config.validate(2),
        Err(ValidationError::DriftStreamOutOfRange { stream: 3, n_streams: 2 })
    ));

    let config = EvalConfig::new(10).with_drift_locations(0, vec![500, 500]);
    assert!(matches!(
        config.validate(1),
        Err(ValidationError::DriftLocationsNotAscending { stream: 0, onset: 500, previous: 500 })
    ));
}

#[test]
fn test_invalid_schedule_rejected_before_run() {
    let classifier = ReplayClassifier::new(vec![correct(10)]);
    let config = EvalConfig::new(5).with_policy(SchedulePolicy::explicit([(1usize, 5u64)]));
    let result = PrequentialEvaluator::new(config, classifier, 1);
    assert!(matches!(
        result,
        Err(Error::Validation(ValidationError::ScheduleStreamOutOfRange { .. }))
    ));
}

#[test]
fn test_zero_max_instances_rejected() {
    let config = EvalConfig::new(10).with_max_instances(0);
    assert!(matches!(config.validate(1), Err(ValidationError::InvalidMaxInstances(0))));
}

#[test]
fn test_default_config() {
    let config = EvalConfig::default();
    assert_eq!(config.sample_freq, DEFAULT_SAMPLE_FREQ);
    assert_eq!(config.policy, SchedulePolicy::Sequential);
    assert!(!config.tracks_drift());
    assert!(config.with_drift_locations(0, vec![5]).tracks_drift());
}

#[test]
fn test_summary_serializes_termination() {
    let classifier = ReplayClassifier::new(vec![correct(10)]);
    let mut evaluator = PrequentialEvaluator::new(EvalConfig::new(5), classifier, 1).unwrap();
    let summary = evaluator.run(&mut sinks(1), None).unwrap();

    let json = serde_json::to_string(&summary).unwrap();
    assert!(json.contains("\"termination\":\"schedule_exhausted\""));
    assert!(summary.to_string().contains("Instances processed: 10"));
}
