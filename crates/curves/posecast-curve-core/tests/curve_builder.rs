use posecast_curve_core::{
    build_rotation_curve, build_translation_curve, Axis, ConvertError, Key, PoseTrack,
};
use serde_json::json;

fn times(keys: &[Key]) -> Vec<i64> {
    keys.iter().map(|k| k.time_ms).collect()
}

fn values(keys: &[Key]) -> Vec<f32> {
    keys.iter().map(|k| k.value).collect()
}

fn camera_take(poses: serde_json::Value) -> PoseTrack {
    PoseTrack::from_document(json!({ "camera": { "poses": poses } }))
}

fn pose(ts: i64, p: [f64; 3], r: [f64; 3]) -> serde_json::Value {
    json!({
        "timestamp": ts,
        "position": { "x": p[0], "y": p[1], "z": p[2] },
        "rotation": { "x": r[0], "y": r[1], "z": r[2] },
    })
}

/// it should emit one key per pose per axis, with no coalescing or drops
#[test]
fn one_key_per_pose_per_axis() {
    let track = camera_take(json!([
        pose(0, [1.0, 1.0, 1.0], [0.0, 0.0, 0.0]),
        pose(33, [1.1, 1.0, 0.9], [1.0, 0.5, 0.0]),
        pose(66, [1.2, 1.0, 0.8], [2.0, 1.0, 0.0]),
        pose(99, [1.3, 1.0, 0.7], [3.0, 1.5, 0.0]),
    ]));
    let poses = track.poses("camera");

    let translation = build_translation_curve(poses, 100.0).unwrap();
    let rotation = build_rotation_curve(poses).unwrap();
    for axis in Axis::ALL {
        assert_eq!(translation.axis(axis).len(), 4);
        assert_eq!(rotation.axis(axis).len(), 4);
    }
}

/// it should always emit the first key at relative time zero
#[test]
fn first_relative_time_is_zero() {
    let track = camera_take(json!([
        pose(987654, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        pose(987700, [1.0, 0.0, 0.0], [9.0, 0.0, 0.0]),
    ]));
    let seq = build_translation_curve(track.poses("camera"), 100.0).unwrap();
    for axis in Axis::ALL {
        assert_eq!(seq.axis(axis)[0].time_ms, 0);
    }
}

/// it should take the epoch from index 0 even when the take starts at timestamp 0
#[test]
fn epoch_comes_from_index_zero() {
    let track = camera_take(json!([
        pose(0, [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        pose(100, [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]),
    ]));
    let seq = build_translation_curve(track.poses("camera"), 100.0).unwrap();
    assert_eq!(times(seq.axis(Axis::X)), vec![0, 100]);
}

/// it should scale translation values exactly and pass rotation through identically
#[test]
fn scaling_laws_are_exact() {
    let track = camera_take(json!([
        pose(10, [0.25, -1.5, 3.0], [12.5, -90.0, 359.0]),
    ]));
    let poses = track.poses("camera");

    let translation = build_translation_curve(poses, 100.0).unwrap();
    assert_eq!(values(translation.axis(Axis::X)), vec![25.0]);
    assert_eq!(values(translation.axis(Axis::Y)), vec![-150.0]);
    assert_eq!(values(translation.axis(Axis::Z)), vec![300.0]);

    let rotation = build_rotation_curve(poses).unwrap();
    assert_eq!(values(rotation.axis(Axis::X)), vec![12.5]);
    assert_eq!(values(rotation.axis(Axis::Y)), vec![-90.0]);
    assert_eq!(values(rotation.axis(Axis::Z)), vec![359.0]);
}

/// it should preserve document order for non-monotonic takes, negative times included
#[test]
fn order_preserved_for_non_monotonic_takes() {
    let raw = posecast_test_fixtures::recordings::json("out-of-order").unwrap();
    let track = PoseTrack::parse(&raw).unwrap();

    let seq = build_translation_curve(track.poses("camera"), 100.0).unwrap();
    for axis in Axis::ALL {
        assert_eq!(times(seq.axis(axis)), vec![0, -50, 100]);
    }
    assert_eq!(values(seq.axis(Axis::X)), vec![100.0, 200.0, 300.0]);
}

/// it should keep duplicate timestamps as duplicate key times
#[test]
fn duplicate_timestamps_are_kept() {
    let track = camera_take(json!([
        pose(500, [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        pose(500, [2.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
    ]));
    let seq = build_translation_curve(track.poses("camera"), 1.0).unwrap();
    assert_eq!(times(seq.axis(Axis::X)), vec![0, 0]);
    assert_eq!(values(seq.axis(Axis::X)), vec![1.0, 2.0]);
}

/// it should yield an empty sequence for an empty pose list, not an error
#[test]
fn empty_input_yields_empty_sequence() {
    let track = camera_take(json!([]));
    let seq = build_translation_curve(track.poses("camera"), 100.0).unwrap();
    assert!(seq.is_empty());

    // Unknown segments read as empty histories and behave the same.
    let seq = build_rotation_curve(track.poses("torso")).unwrap();
    assert!(seq.is_empty());
}

/// it should reproduce the two-pose end-to-end scenario with position_scale=100
#[test]
fn end_to_end_two_pose_scenario() {
    let raw = posecast_test_fixtures::recordings::json("simple-take").unwrap();
    let track = PoseTrack::parse(&raw).unwrap();
    let poses = track.poses("camera");

    let translation = build_translation_curve(poses, 100.0).unwrap();
    assert_eq!(
        translation.axis(Axis::X),
        &[
            Key { time_ms: 0, value: 100.0 },
            Key { time_ms: 500, value: 400.0 },
        ]
    );

    let rotation = build_rotation_curve(poses).unwrap();
    assert_eq!(
        rotation.axis(Axis::X),
        &[
            Key { time_ms: 0, value: 10.0 },
            Key { time_ms: 500, value: 40.0 },
        ]
    );
}

/// it should fail a rotation build on a pose without rotation, leaving translation intact
#[test]
fn missing_rotation_fails_without_partial_output() {
    let raw = posecast_test_fixtures::recordings::json("missing-rotation").unwrap();
    let track = PoseTrack::parse(&raw).unwrap();
    let poses = track.poses("camera");

    // The translation channel never visits the rotation field.
    assert!(build_translation_curve(poses, 100.0).is_ok());

    let err = build_rotation_curve(poses).unwrap_err();
    match err {
        ConvertError::MissingField { field, index } => {
            assert_eq!(field, "rotation.x");
            assert_eq!(index, 1);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}

/// it should report a missing timestamp at the epoch pose as index 0
#[test]
fn missing_epoch_timestamp_is_an_error() {
    let track = camera_take(json!([
        { "position": { "x": 1.0, "y": 2.0, "z": 3.0 },
          "rotation": { "x": 0.0, "y": 0.0, "z": 0.0 } }
    ]));
    let err = build_translation_curve(track.poses("camera"), 100.0).unwrap_err();
    match err {
        ConvertError::MissingField { field, index } => {
            assert_eq!(field, "timestamp");
            assert_eq!(index, 0);
        }
        other => panic!("expected MissingField, got {other:?}"),
    }
}
