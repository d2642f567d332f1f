//! Pose-take input model.
//!
//! A take is one JSON document mapping segment names to ordered pose
//! histories. The document is taken as ground truth: no sorting, no
//! deduplication, no monotonicity checks. Pose fields stay raw JSON until a
//! curve build visits them, so a segment that is never animated need not be
//! well-formed.

use hashbrown::HashMap;
use serde_json::Value;

use crate::curve::Axis;
use crate::error::ConvertError;

/// One timestamped pose sample, kept as its raw JSON object.
///
/// Accessors return `None` for absent or non-numeric fields; the curve
/// builder turns that into [`ConvertError::MissingField`] with the pose
/// index attached.
#[derive(Clone, Debug)]
pub struct RawPose(Value);

impl RawPose {
    /// Capture timestamp in milliseconds. Must be a JSON integer.
    pub fn timestamp(&self) -> Option<i64> {
        self.0.get("timestamp")?.as_i64()
    }

    /// Segment-local position component, in the input's units.
    pub fn position(&self, axis: Axis) -> Option<f64> {
        self.component("position", axis)
    }

    /// Rotation component in degrees.
    pub fn rotation(&self, axis: Axis) -> Option<f64> {
        self.component("rotation", axis)
    }

    fn component(&self, field: &str, axis: Axis) -> Option<f64> {
        self.0.get(field)?.get(axis.key())?.as_f64()
    }
}

/// A named tracked rigid body with its ordered pose history.
#[derive(Clone, Debug)]
pub struct Segment {
    name: String,
    poses: Vec<RawPose>,
}

impl Segment {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Poses in document order. The order is authoritative; it is not
    /// guaranteed to be sorted by timestamp.
    pub fn poses(&self) -> &[RawPose] {
        &self.poses
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

/// The full take: segment name -> ordered pose history. Created once at
/// startup and read-only for the remainder of the run.
#[derive(Clone, Debug, Default)]
pub struct PoseTrack {
    segments: HashMap<String, Segment>,
}

impl PoseTrack {
    /// Parse a raw JSON document into a take.
    ///
    /// Fails only when the bytes are not valid JSON. Any valid document
    /// parses: segments are the top-level object entries carrying a
    /// `"poses"` array, everything else reads as an empty history.
    pub fn parse(raw: &str) -> Result<Self, ConvertError> {
        let doc: Value = serde_json::from_str(raw)?;
        Ok(Self::from_document(doc))
    }

    /// Interpret an already-parsed document. Only the top-level shape is
    /// inspected here; pose fields stay raw until a curve build visits them.
    pub fn from_document(doc: Value) -> Self {
        let mut segments = HashMap::new();
        if let Value::Object(entries) = doc {
            for (name, mut entry) in entries {
                let poses: Vec<RawPose> = match entry.get_mut("poses") {
                    Some(Value::Array(items)) => {
                        std::mem::take(items).into_iter().map(RawPose).collect()
                    }
                    _ => Vec::new(),
                };
                log::debug!("segment '{}': {} poses", name, poses.len());
                segments.insert(name.clone(), Segment { name, poses });
            }
        }
        PoseTrack { segments }
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    /// Ordered poses for `name`; unknown segments read as empty histories.
    pub fn poses(&self, name: &str) -> &[RawPose] {
        self.segments
            .get(name)
            .map(|s| s.poses.as_slice())
            .unwrap_or(&[])
    }

    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.segments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pose(value: Value) -> RawPose {
        RawPose(value)
    }

    #[test]
    fn test_timestamp_requires_an_integer() {
        assert_eq!(pose(json!({"timestamp": 1500})).timestamp(), Some(1500));
        assert_eq!(pose(json!({"timestamp": 1500.5})).timestamp(), None);
        assert_eq!(pose(json!({"timestamp": "1500"})).timestamp(), None);
        assert_eq!(pose(json!({})).timestamp(), None);
    }

    #[test]
    fn test_components_accept_any_json_number() {
        let p = pose(json!({"position": {"x": 1, "y": 2.5, "z": -3}}));
        assert_eq!(p.position(Axis::X), Some(1.0));
        assert_eq!(p.position(Axis::Y), Some(2.5));
        assert_eq!(p.position(Axis::Z), Some(-3.0));
        assert_eq!(p.rotation(Axis::X), None);
    }

    #[test]
    fn test_entries_without_pose_arrays_read_as_empty() {
        let track = PoseTrack::from_document(json!({
            "camera": {"poses": [{"timestamp": 1}]},
            "left": {"poses": "not an array"},
            "right": 42,
        }));
        assert_eq!(track.poses("camera").len(), 1);
        assert!(track.poses("left").is_empty());
        assert!(track.poses("right").is_empty());
        assert!(track.poses("nonexistent").is_empty());
    }
}
