//! Run configuration for posecast conversions.

use serde::{Deserialize, Serialize};

/// Configuration for one conversion run.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Scene-SDK internal units per input position unit. Applied to every
    /// translation key; rotation keys are already in the target unit
    /// (degrees) and pass through unscaled.
    pub position_scale: f32,

    /// Name of the animation clip in the output document.
    pub clip_name: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            position_scale: 100.0,
            clip_name: "Stack001".to_string(),
        }
    }
}
