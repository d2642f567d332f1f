//! posecast curve core (scene-SDK agnostic)
//!
//! Converts JSON pose takes into per-axis keyframe sequences:
//! - data: the pose-take input model with lazy per-field access
//! - curve: the pose-to-curve transformation (epoch re-basing, scaling)
//! - sink: the boundary trait a scene backend implements to receive keys
//! - config/error: run configuration and the pipeline error taxonomy

pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod sink;

// Re-exports for consumers (scene backends, CLI)
pub use config::ExportConfig;
pub use curve::{
    build_rotation_curve, build_translation_curve, Axis, Channel, Key, KeyframeSequence,
};
pub use data::{PoseTrack, RawPose, Segment};
pub use error::ConvertError;
pub use sink::{emit_segment, CurveSink, CurveTarget, Interpolation};
