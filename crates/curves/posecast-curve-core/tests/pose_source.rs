use posecast_curve_core::{build_rotation_curve, ConvertError, PoseTrack};
use serde_json::json;

/// it should reject bytes that are not valid JSON with MalformedInput
#[test]
fn invalid_json_is_malformed_input() {
    let err = PoseTrack::parse("{ not json").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedInput { .. }));
    assert_eq!(err.category(), "parse");
}

/// it should accept any valid JSON document, object-shaped or not
#[test]
fn any_valid_document_parses() {
    let track = PoseTrack::parse("[1, 2, 3]").unwrap();
    assert!(track.is_empty());

    let track = PoseTrack::parse("{\"camera\": {\"poses\": []}}").unwrap();
    assert_eq!(track.len(), 1);
    assert!(track.segment("camera").unwrap().is_empty());
}

/// it should not validate pose fields at parse time (access is lazy)
#[test]
fn broken_poses_only_fail_when_visited() {
    let track = PoseTrack::from_document(json!({
        "camera": { "poses": [ { "timestamp": "not a number" } ] },
        "left": { "poses": [ { "timestamp": 10,
                               "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                               "rotation": { "x": 0.0, "y": 0.0, "z": 0.0 } } ] },
    }));

    // The broken segment parses fine and only errors once a curve visits it.
    assert_eq!(track.poses("camera").len(), 1);
    assert!(build_rotation_curve(track.poses("camera")).is_err());

    // Sibling segments are unaffected.
    assert!(build_rotation_curve(track.poses("left")).is_ok());
}

/// it should iterate fixture recordings from the shared manifest
#[test]
fn fixture_recordings_all_parse() {
    for name in posecast_test_fixtures::recordings::keys() {
        let raw = posecast_test_fixtures::recordings::json(&name).unwrap();
        let track = PoseTrack::parse(&raw).unwrap();
        assert!(!track.is_empty(), "recording '{name}' should hold segments");
    }
}
