//! posecast scene backend: glTF assembly and export.
//!
//! Everything here is plumbing around the `gltf` crate's authoring types:
//! the constant marker/mesh/camera hierarchy of the tracking rig, the
//! curve-sink implementation that packs per-axis key lists into animation
//! samplers, and the GLB / glTF document writers. The pose-to-curve logic
//! itself lives in posecast-curve-core; this crate only receives finished
//! keys.

mod buffer;
mod export;
mod geometry;
mod material;
mod rig;
mod scene;

pub use export::{save_scene, OutputFormat};
pub use rig::TRACKED_SEGMENTS;
pub use scene::{SceneBuilder, SceneDoc};
