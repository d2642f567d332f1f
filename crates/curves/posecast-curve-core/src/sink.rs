//! Curve sink: the boundary between curve construction and the scene SDK.
//!
//! The core never touches scene topology, geometry, or file formats. A scene
//! backend implements [`CurveSink`] and receives finished per-axis key lists
//! addressed by segment and channel, together with the interpolation mode to
//! attach to every key.

use crate::config::ExportConfig;
use crate::curve::{
    build_rotation_curve, build_translation_curve, Axis, Channel, Key, KeyframeSequence,
};
use crate::data::PoseTrack;
use crate::error::ConvertError;

/// Interpolation mode attached to every emitted key. Linear is the only
/// mode this system emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    #[default]
    Linear,
}

/// Addresses one animated channel of one segment in the receiving scene.
#[derive(Clone, Copy, Debug)]
pub struct CurveTarget<'a> {
    pub segment: &'a str,
    pub channel: Channel,
}

/// Receiver for finished axis curves.
///
/// Each call hands over the complete ordered key list for one axis of one
/// channel, so the receiver opens and closes whatever per-curve transaction
/// its SDK requires inside a single scope; there is no begin/end pairing to
/// leave dangling on an error path.
pub trait CurveSink {
    fn write_axis(
        &mut self,
        target: CurveTarget<'_>,
        axis: Axis,
        interp: Interpolation,
        keys: &[Key],
    ) -> Result<(), ConvertError>;
}

/// Build both channel curves for segment `name` and hand every axis list to
/// the sink, fail-fast. A take without the segment emits empty curves (the
/// sink sees zero-key writes and skips them).
pub fn emit_segment(
    sink: &mut dyn CurveSink,
    track: &PoseTrack,
    name: &str,
    config: &ExportConfig,
) -> Result<(), ConvertError> {
    let poses = track.poses(name);

    let translation = build_translation_curve(poses, config.position_scale)?;
    log::debug!(
        "segment '{}': translation, {} poses -> {} keys/axis",
        name,
        poses.len(),
        translation.keys_per_axis()
    );
    write_channel(
        sink,
        CurveTarget {
            segment: name,
            channel: Channel::Translation,
        },
        &translation,
    )?;

    let rotation = build_rotation_curve(poses)?;
    log::debug!(
        "segment '{}': rotation, {} poses -> {} keys/axis",
        name,
        poses.len(),
        rotation.keys_per_axis()
    );
    write_channel(
        sink,
        CurveTarget {
            segment: name,
            channel: Channel::Rotation,
        },
        &rotation,
    )
}

fn write_channel(
    sink: &mut dyn CurveSink,
    target: CurveTarget<'_>,
    seq: &KeyframeSequence,
) -> Result<(), ConvertError> {
    for axis in Axis::ALL {
        sink.write_axis(target, axis, Interpolation::Linear, seq.axis(axis))?;
    }
    Ok(())
}
