//! Property-based tests for specification validation

use super::error::ValidationError;
use super::validator::{validate_onsets, validate_spec};
use crate::config::schema::*;
use proptest::prelude::*;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn stream_file() -> NamedTempFile {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "x,class\n1,0\n").unwrap();
    file
}

fn spec_for(file: &NamedTempFile, n_streams: usize, sample_freq: u64) -> EvalSpec {
    let mut spec = EvalSpec::sequential(vec![file.path().to_path_buf(); n_streams]);
    spec.sample_freq = sample_freq;
    spec
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_valid_spec_passes(
        n_streams in 1usize..5,
        sample_freq in 1u64..10_000,
        max_instances in proptest::option::of(1u64..1_000_000),
    ) {
        let file = stream_file();
        let mut spec = spec_for(&file, n_streams, sample_freq);
        spec.max_instances = max_instances;
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_zero_sample_freq_fails(n_streams in 1usize..5) {
        let file = stream_file();
        let spec = spec_for(&file, n_streams, 0);
        prop_assert!(matches!(validate_spec(&spec), Err(ValidationError::InvalidSampleFreq(0))));
    }

    #[test]
    fn prop_sorted_unique_onsets_pass(onsets in proptest::collection::btree_set(0u64..100_000, 0..20)) {
        let onsets: Vec<u64> = onsets.into_iter().collect();
        prop_assert!(validate_onsets(0, &onsets).is_ok());
    }

    #[test]
    fn prop_repeated_onset_fails(
        onsets in proptest::collection::btree_set(0u64..100_000, 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut onsets: Vec<u64> = onsets.into_iter().collect();
        let i = pick.index(onsets.len());
        onsets.insert(i, onsets[i]);
        let rejected = matches!(
            validate_onsets(0, &onsets),
            Err(ValidationError::DriftLocationsNotAscending { .. })
        );
        prop_assert!(rejected);
    }

    #[test]
    fn prop_inline_schedule_in_range_passes(
        n_streams in 1usize..4,
        steps in proptest::collection::vec((0usize..100, 0u64..500), 0..10),
    ) {
        let file = stream_file();
        let mut spec = spec_for(&file, n_streams, 100);
        let mut at = 0u64;
        let entries: Vec<(usize, u64)> = steps
            .into_iter()
            .map(|(stream, gap)| {
                at += gap;
                (stream % n_streams, at)
            })
            .collect();
        spec.schedule = ScheduleSpec {
            policy: PolicyKind::Explicit,
            file: None,
            entries: Some(entries),
        };
        prop_assert!(validate_spec(&spec).is_ok());
    }
}

#[test]
fn test_paths_are_checked_per_stream() {
    let file = stream_file();
    let mut spec = spec_for(&file, 1, 10);
    spec.streams.push(StreamSpec::new(PathBuf::from("/missing.csv")));
    assert!(matches!(validate_spec(&spec), Err(ValidationError::StreamPathNotFound(_))));
}
