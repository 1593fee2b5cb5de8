// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::test_helpers::{RecordedCall, RecordingRoutine, generate_random_samples};
use approx::assert_relative_eq;
use mi_bridge::{BridgeError, GlobalValue, MiBridge, MutualInformation, Sequence};
use ndarray::Array1;
use rstest::*;

#[test_log::test]
fn identical_sequences_forwarded_verbatim() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(0.8125));
    let mi = bridge.st_mi(&[1, 2, 3, 4], &[1, 2, 3, 4]).unwrap();

    assert_eq!(mi, 0.8125);
    assert_eq!(
        bridge.routine().calls(),
        vec![RecordedCall {
            x: vec![1, 2, 3, 4],
            y: vec![1, 2, 3, 4],
            n: 4,
        }]
    );
}

#[test_log::test]
fn degenerate_sequences_still_call_routine() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(0.0));
    let mi = bridge.st_mi(&[1, 1, 1, 1], &[5, 5, 5, 5]).unwrap();

    assert!(mi.is_finite());
    let calls = bridge.routine().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].n, 4);
    assert_eq!(calls[0].x, vec![1, 1, 1, 1]);
    assert_eq!(calls[0].y, vec![5, 5, 5, 5]);
}

#[test_log::test]
fn length_mismatch_rejected_before_call() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(1.0));
    let err = bridge.st_mi(&[1, 2], &[1, 2, 3]).unwrap_err();

    assert!(matches!(
        err,
        BridgeError::LengthMismatch { x_len: 2, y_len: 3 }
    ));
    assert_eq!(bridge.routine().call_count(), 0);
}

#[rstest]
#[case(vec![], vec![], "empty")]
#[case(vec![1], vec![], "mismatch")]
#[case(vec![1, 2], vec![1, i64::from(i32::MAX) + 1], "range_y")]
#[case(vec![i64::from(i32::MIN) - 1], vec![0], "range_x")]
fn invalid_input_never_reaches_routine(
    #[case] x: Vec<i64>,
    #[case] y: Vec<i64>,
    #[case] kind: &str,
) {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(1.0));
    let err = bridge.st_mi(&x, &y).unwrap_err();

    match kind {
        "empty" => assert!(matches!(err, BridgeError::EmptyInput)),
        "mismatch" => assert!(matches!(err, BridgeError::LengthMismatch { .. })),
        "range_y" => assert!(matches!(
            err,
            BridgeError::ValueOutOfRange {
                sequence: Sequence::Y,
                index: 1
            }
        )),
        "range_x" => assert!(matches!(
            err,
            BridgeError::ValueOutOfRange {
                sequence: Sequence::X,
                index: 0
            }
        )),
        other => panic!("unknown case {other}"),
    }
    assert!(!err.is_initialization());
    assert_eq!(bridge.routine().call_count(), 0);
}

#[test]
fn random_samples_marshalled_in_order() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(0.25));

    for (size, seed) in [(1, 1), (17, 2), (1000, 3)] {
        let x = generate_random_samples(size, 2, seed);
        let y = generate_random_samples(size, 5, seed + 100);
        bridge.st_mi(&x, &y).unwrap();

        let last = bridge.routine().calls().pop().unwrap();
        assert_eq!(last.n as usize, size);
        assert_eq!(last.x, x);
        assert_eq!(last.y, y);
    }
    assert_eq!(bridge.routine().call_count(), 3);
}

#[test]
fn repeated_calls_are_identical() {
    let bridge = MiBridge::with_routine(|x: &[i32], y: &[i32], n: i32| {
        let agree = x.iter().zip(y).filter(|(a, b)| a == b).count();
        agree as f32 / n as f32
    });
    let x = generate_random_samples(500, 2, 42);
    let y = generate_random_samples(500, 2, 43);

    let first = bridge.st_mi(&x, &y).unwrap();
    let second = bridge.st_mi(&x, &y).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn inputs_are_not_mutated() {
    // A routine that scribbles over its buffers must not reach the caller's data.
    struct Scribbler;
    impl mi_bridge::MutualInformationRoutine for Scribbler {
        fn invoke(&self, samples: &mut mi_bridge::SamplePair) -> f32 {
            let (x, y, n) = samples.native_args();
            unsafe {
                std::slice::from_raw_parts_mut(x, n as usize).fill(-1);
                std::slice::from_raw_parts_mut(y, n as usize).fill(-1);
            }
            0.5
        }
    }

    let bridge = MiBridge::with_routine(Scribbler);
    let x = vec![0, 1, 0, 1];
    let y = vec![1, 1, 0, 0];
    bridge.st_mi(&x, &y).unwrap();
    assert_eq!(x, vec![0, 1, 0, 1]);
    assert_eq!(y, vec![1, 1, 0, 0]);

    // The estimator hands out a fresh copy on every evaluation
    let est = MutualInformation::new_native(&bridge, &x, &y).unwrap();
    est.global_value();
    assert_eq!(est.samples().x(), &[0, 1, 0, 1]);
}

#[test]
fn ndarray_views_match_slices() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(0.5));
    let x = Array1::from(generate_random_samples(64, 3, 7));
    let y = Array1::from(generate_random_samples(64, 3, 8));

    let from_views = bridge.st_mi_array(x.view(), y.view()).unwrap();
    let from_slices = bridge
        .st_mi(x.as_slice().unwrap(), y.as_slice().unwrap())
        .unwrap();
    assert_relative_eq!(from_views, from_slices);

    let calls = bridge.routine().calls();
    assert_eq!(calls[0], calls[1]);
}

#[test]
fn estimator_reports_errors_at_construction() {
    let bridge = MiBridge::with_routine(RecordingRoutine::returning(0.5));
    let result = MutualInformation::new_native(&bridge, &[1, 2, 3], &[1, 2]);
    assert!(matches!(result, Err(BridgeError::LengthMismatch { .. })));

    let est = MutualInformation::new_native(&bridge, &[1u16, 0], &[0u16, 1]).unwrap();
    assert_eq!(est.global_value(), 0.5);
    assert_eq!(bridge.routine().call_count(), 1);
}
