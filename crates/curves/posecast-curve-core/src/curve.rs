//! The pose-to-curve transformation.
//!
//! Each segment's ordered pose history becomes one [`KeyframeSequence`] per
//! channel: three parallel per-axis key lists, one key per source pose, in
//! source order. Times are re-based onto the segment epoch (the timestamp of
//! the pose at index 0) so takes captured against different absolute clocks
//! play back in sync from time zero.

use serde::{Deserialize, Serialize};

use crate::data::RawPose;
use crate::error::ConvertError;

/// Animation axis. Curves fan out over this enumerated set with a generic
/// accessor instead of hand-unrolled per-axis code paths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// JSON object key (and display label) for this axis.
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Animated channel of a segment node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Translation,
    Rotation,
}

impl Channel {
    pub fn label(self) -> &'static str {
        match self {
            Channel::Translation => "translation",
            Channel::Rotation => "rotation",
        }
    }

    /// Source pose field this channel samples.
    fn field(self) -> &'static str {
        match self {
            Channel::Translation => "position",
            Channel::Rotation => "rotation",
        }
    }
}

/// One (time, value) control point on an interpolated curve. Times are
/// milliseconds relative to the segment epoch and may be negative when a
/// later pose in document order carries a smaller timestamp than the first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Key {
    pub time_ms: i64,
    pub value: f32,
}

/// Per-axis key lists for one segment and one channel. Parallel by
/// construction: the builder appends one key per pose to every axis or fails
/// the whole build, so the three lists always share times and length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyframeSequence {
    axes: [Vec<Key>; 3],
}

impl KeyframeSequence {
    pub fn with_capacity(keys_per_axis: usize) -> Self {
        Self {
            axes: [
                Vec::with_capacity(keys_per_axis),
                Vec::with_capacity(keys_per_axis),
                Vec::with_capacity(keys_per_axis),
            ],
        }
    }

    pub fn axis(&self, axis: Axis) -> &[Key] {
        &self.axes[axis.index()]
    }

    pub fn push(&mut self, axis: Axis, key: Key) {
        self.axes[axis.index()].push(key);
    }

    /// Keys per axis list (all three are equal by construction).
    pub fn keys_per_axis(&self) -> usize {
        self.axes[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.axes.iter().all(Vec::is_empty)
    }
}

/// Build the per-axis key lists for one channel of a pose history.
///
/// The pose order is authoritative: keys append in iteration order and are
/// never re-sorted or coalesced, so a non-monotonic take yields
/// non-monotonic (possibly negative) relative times, and duplicate source
/// timestamps yield duplicate key times.
///
/// Fail-fast: the first absent or non-numeric field aborts the whole build;
/// no partially keyed sequence escapes (a partial curve would silently
/// desynchronize the axes).
pub fn build_channel_curve(
    poses: &[RawPose],
    channel: Channel,
    scale: f32,
) -> Result<KeyframeSequence, ConvertError> {
    let mut seq = KeyframeSequence::with_capacity(poses.len());
    let Some(first) = poses.first() else {
        return Ok(seq);
    };
    let epoch = first
        .timestamp()
        .ok_or_else(|| ConvertError::missing("timestamp", 0))?;

    for (index, pose) in poses.iter().enumerate() {
        let timestamp = pose
            .timestamp()
            .ok_or_else(|| ConvertError::missing("timestamp", index))?;
        let time_ms = timestamp - epoch;

        for axis in Axis::ALL {
            let raw = sample(pose, channel, axis).ok_or_else(|| {
                ConvertError::missing(format!("{}.{}", channel.field(), axis.key()), index)
            })?;
            seq.push(
                axis,
                Key {
                    time_ms,
                    value: raw as f32 * scale,
                },
            );
        }
    }
    Ok(seq)
}

/// Translation curve: position components scaled into scene-SDK units.
pub fn build_translation_curve(
    poses: &[RawPose],
    position_scale: f32,
) -> Result<KeyframeSequence, ConvertError> {
    build_channel_curve(poses, Channel::Translation, position_scale)
}

/// Rotation curve: degrees pass through unscaled.
pub fn build_rotation_curve(poses: &[RawPose]) -> Result<KeyframeSequence, ConvertError> {
    build_channel_curve(poses, Channel::Rotation, 1.0)
}

fn sample(pose: &RawPose, channel: Channel, axis: Axis) -> Option<f64> {
    match channel {
        Channel::Translation => pose.position(axis),
        Channel::Rotation => pose.rotation(axis),
    }
}
