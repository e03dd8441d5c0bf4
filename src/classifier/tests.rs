//! Tests for classifier implementations

use super::*;
use crate::error::Error;
use crate::eval::TreeCounts;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_majority_predicts_most_frequent_label() {
    let file = write_csv("x,class\n0,1\n0,1\n0,0\n0,2\n");
    let mut classifier = MajorityClassClassifier::new();
    classifier.init_data_source(0, file.path()).unwrap();
    classifier.switch_active_stream(0);

    let mut predictions = Vec::new();
    while classifier.next_instance().unwrap() {
        predictions.push(classifier.predict().unwrap());
        classifier.train().unwrap();
    }

    // untrained -> 0, then label 1 dominates
    assert_eq!(predictions, vec![0, 1, 1, 1]);
    assert_eq!(classifier.class_count(0, 0), 1);
    assert_eq!(classifier.class_count(0, 1), 2);
    assert_eq!(classifier.class_count(0, 2), 1);
    assert_eq!(classifier.class_count(0, 3), 0);
}

#[test]
fn test_majority_handles_extreme_labels() {
    let wide = 1usize << 40;
    let max = usize::MAX;
    let file = write_csv(&format!("x,class\n0,{max}\n0,{wide}\n0,{max}\n0,{wide}\n0,{wide}\n"));
    let mut classifier = MajorityClassClassifier::new();
    classifier.init_data_source(0, file.path()).unwrap();
    classifier.switch_active_stream(0);

    let mut predictions = Vec::new();
    while classifier.next_instance().unwrap() {
        predictions.push(classifier.predict().unwrap());
        classifier.train().unwrap();
    }

    // Ties go to the smaller label
    assert_eq!(predictions, vec![0, usize::MAX, wide, usize::MAX, wide]);
    assert_eq!(classifier.class_count(0, usize::MAX), 2);
    assert_eq!(classifier.class_count(0, wide), 3);
}

#[test]
fn test_majority_keeps_streams_separate() {
    let a = write_csv("x,class\n0,3\n0,3\n");
    let b = write_csv("x,class\n0,1\n");
    let mut classifier = MajorityClassClassifier::new();
    classifier.init_data_source(0, a.path()).unwrap();
    classifier.init_data_source(1, b.path()).unwrap();

    classifier.switch_active_stream(0);
    assert!(classifier.next_instance().unwrap());
    classifier.train().unwrap();

    classifier.switch_active_stream(1);
    assert!(classifier.next_instance().unwrap());
    assert_eq!(classifier.predict().unwrap(), 0);
    assert_eq!(classifier.current_label().unwrap(), 1);
    classifier.train().unwrap();
    assert!(!classifier.next_instance().unwrap());

    classifier.switch_active_stream(0);
    assert!(classifier.next_instance().unwrap());
    assert_eq!(classifier.predict().unwrap(), 3);
}

#[test]
fn test_majority_unbound_stream_errors() {
    let mut classifier = MajorityClassClassifier::new();
    classifier.switch_active_stream(4);
    assert!(matches!(classifier.next_instance(), Err(Error::Classifier(_))));
}

#[test]
fn test_majority_invalid_path_fails_init() {
    let mut classifier = MajorityClassClassifier::new();
    let result = classifier.init_data_source(0, Path::new("/nonexistent/0.csv"));
    assert!(matches!(result, Err(Error::DataSource { .. })));
}

#[test]
fn test_majority_introspection_defaults_to_zero() {
    let classifier = MajorityClassClassifier::new();
    assert_eq!(classifier.tree_counts(), TreeCounts::default());
}

#[test]
fn test_replay_follows_script() {
    let mut classifier = ReplayClassifier::new(vec![vec![(1, 0), (1, 1)]]);
    classifier.switch_active_stream(0);

    assert!(classifier.next_instance().unwrap());
    assert_eq!(classifier.current_label().unwrap(), 1);
    assert_eq!(classifier.predict().unwrap(), 0);
    classifier.train().unwrap();

    assert!(classifier.next_instance().unwrap());
    assert_eq!(classifier.predict().unwrap(), 1);
    classifier.train().unwrap();

    assert!(!classifier.next_instance().unwrap());
    assert_eq!(classifier.trained(0), 2);
    assert_eq!(classifier.switches(), &[0]);
}

#[test]
fn test_replay_requires_current_instance() {
    let mut classifier = ReplayClassifier::new(vec![vec![(0, 0)]]);
    classifier.switch_active_stream(0);
    assert!(classifier.predict().is_err());
    assert!(classifier.train().is_err());
}

#[test]
fn test_replay_bind_unknown_stream_fails() {
    let mut classifier = ReplayClassifier::new(vec![vec![]]);
    assert!(classifier.init_data_source(0, Path::new("a.csv")).is_ok());
    assert!(classifier.is_bound(0));
    assert!(classifier.init_data_source(1, Path::new("b.csv")).is_err());
}

#[test]
fn test_replay_tree_counts_and_failure() {
    let trees = TreeCounts { candidate: 2, transferred: 1, pool: 9 };
    let mut classifier =
        ReplayClassifier::new(vec![vec![(0, 0); 3]]).with_tree_counts(trees).fail_train_after(1);
    assert_eq!(classifier.tree_counts(), trees);

    classifier.switch_active_stream(0);
    classifier.next_instance().unwrap();
    classifier.train().unwrap();
    classifier.next_instance().unwrap();
    assert!(matches!(classifier.train(), Err(Error::Classifier(_))));
}
