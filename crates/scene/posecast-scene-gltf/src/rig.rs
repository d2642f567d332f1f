//! The fixed tracking rig: which segments are animated and every constant
//! about their subtrees (marker chains, mesh dimensions, default
//! transforms).

use crate::geometry::PyramidSpec;

/// Segment names the driver animates, in scene order.
pub const TRACKED_SEGMENTS: [&str; 3] = ["camera", "left", "right"];

const CAMERA_MESH_HEIGHT: f32 = 20.0;
const CAMERA_MESH_SIDE: f32 = 10.0;
const HAND_MESH_HEIGHT: f32 = 10.0;
const HAND_MESH_SIDE: f32 = 2.0;

pub(crate) struct RigSegment {
    /// JSON segment key in the input take.
    pub segment: &'static str,
    /// Stem of the marker node names ("Camera" -> "CameraPositionAnimation").
    pub stem: &'static str,
    /// Default local rotation (degrees) of the position marker.
    pub marker_rotation_deg: [f32; 3],
    pub mesh_name: &'static str,
    pub mesh_side: f32,
    pub mesh_height: f32,
    pub right_hand: bool,
    pub mesh_translation: [f32; 3],
    pub mesh_rotation_deg: [f32; 3],
    /// The camera segment also carries the scene camera under its rotation
    /// marker.
    pub with_camera: bool,
}

impl RigSegment {
    pub fn pyramid(&self) -> PyramidSpec {
        PyramidSpec {
            side: self.mesh_side,
            height: self.mesh_height,
            right_hand: self.right_hand,
        }
    }
}

pub(crate) const RIG: [RigSegment; 3] = [
    RigSegment {
        segment: "camera",
        stem: "Camera",
        marker_rotation_deg: [0.0, 0.0, 0.0],
        mesh_name: "MeshCamera",
        mesh_side: CAMERA_MESH_SIDE,
        mesh_height: CAMERA_MESH_HEIGHT,
        right_hand: false,
        mesh_translation: [0.0, 0.0, -CAMERA_MESH_HEIGHT],
        mesh_rotation_deg: [90.0, 0.0, 0.0],
        with_camera: true,
    },
    RigSegment {
        segment: "left",
        stem: "Left",
        marker_rotation_deg: [-160.0, 180.0, 90.0],
        mesh_name: "MeshLeft",
        mesh_side: HAND_MESH_SIDE,
        mesh_height: HAND_MESH_HEIGHT,
        right_hand: false,
        mesh_translation: [0.0, 0.0, 0.0],
        mesh_rotation_deg: [-60.0, 0.0, 90.0],
        with_camera: false,
    },
    RigSegment {
        segment: "right",
        stem: "Right",
        marker_rotation_deg: [325.0, -180.0, -90.0],
        mesh_name: "MeshRight",
        mesh_side: HAND_MESH_SIDE,
        mesh_height: HAND_MESH_HEIGHT,
        right_hand: true,
        mesh_translation: [0.0, 0.0, 0.0],
        mesh_rotation_deg: [-60.0, 0.0, 90.0],
        with_camera: false,
    },
];

/// XYZ-order Euler degrees to a unit quaternion, [x, y, z, w].
pub(crate) fn euler_deg_to_quat(deg: [f32; 3]) -> [f32; 4] {
    let q = glam::Quat::from_euler(
        glam::EulerRot::XYZ,
        deg[0].to_radians(),
        deg[1].to_radians(),
        deg[2].to_radians(),
    );
    [q.x, q.y, q.z, q.w]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_euler_is_identity_quat() {
        let q = euler_deg_to_quat([0.0, 0.0, 0.0]);
        assert_eq!(q, [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let q = euler_deg_to_quat([0.0, 90.0, 0.0]);
        let half = std::f32::consts::FRAC_PI_4;
        assert_relative_eq!(q[1], half.sin(), epsilon = 1e-6);
        assert_relative_eq!(q[3], half.cos(), epsilon = 1e-6);
        assert_relative_eq!(q[0], 0.0, epsilon = 1e-6);
        assert_relative_eq!(q[2], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_results_are_unit_quaternions() {
        for deg in [[-160.0, 180.0, 90.0], [325.0, -180.0, -90.0], [12.5, -76.0, 3.0]] {
            let q = euler_deg_to_quat(deg);
            let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
            assert_relative_eq!(norm, 1.0, epsilon = 1e-5);
        }
    }
}
