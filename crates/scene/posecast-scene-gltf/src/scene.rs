//! Scene assembly: the fixed node hierarchy and the animation curve sink.
//!
//! Hierarchy (one subtree per tracked segment):
//!
//! ```text
//! Root
//! ├─ CameraPositionAnimation ─ CameraRotationAnimation ─ { Camera, MeshCamera }
//! ├─ LeftPositionAnimation ── LeftRotationAnimation ──── MeshLeft
//! └─ RightPositionAnimation ─ RightRotationAnimation ─── MeshRight
//! ```
//!
//! Translation curves animate the position markers, rotation curves the
//! rotation markers. The sink buffers per-axis key lists and packs them into
//! samplers when the scene is finished: the three axis lists of a channel
//! are zipped into vec3 translation keys or, for rotation, Euler-degree
//! triples converted to quaternions (XYZ order).

use gltf::json;
use gltf::json::validation::Checked::Valid;
use gltf::json::validation::USize64;
use hashbrown::HashMap;

use posecast_curve_core::{
    Axis, Channel, ConvertError, CurveSink, CurveTarget, ExportConfig, Interpolation, Key,
};

use crate::buffer::{self, BufferBuilder};
use crate::geometry;
use crate::rig::{self, RIG};

/// Assembled document plus its packed binary payload, ready to write.
#[derive(Debug)]
pub struct SceneDoc {
    pub(crate) root: json::Root,
    pub(crate) bin: Vec<u8>,
}

impl SceneDoc {
    pub fn root(&self) -> &json::Root {
        &self.root
    }

    pub fn bin(&self) -> &[u8] {
        &self.bin
    }
}

/// Buffered per-axis key lists for one channel of one segment.
struct ChannelCurves {
    interp: Interpolation,
    axes: [Option<Vec<Key>>; 3],
}

impl Default for ChannelCurves {
    fn default() -> Self {
        Self {
            interp: Interpolation::Linear,
            axes: [None, None, None],
        }
    }
}

/// Builds the constant scene and collects animation curves.
///
/// Owned by the top-level driver and threaded down as an explicit parameter;
/// there are no process-global SDK handles.
pub struct SceneBuilder {
    root: json::Root,
    buffer: BufferBuilder,
    clip_name: String,
    animated_nodes: HashMap<(String, Channel), json::Index<json::Node>>,
    /// Insertion-ordered so the emitted sampler order stays deterministic.
    curves: Vec<((String, Channel), ChannelCurves)>,
}

impl SceneBuilder {
    pub fn new(config: &ExportConfig) -> Self {
        let mut root = json::Root::default();
        root.asset.generator = Some(concat!("posecast ", env!("CARGO_PKG_VERSION")).to_string());

        // Buffer 0 backs all vertex and animation data; its final byte
        // length is patched in by finish().
        root.push(json::Buffer {
            byte_length: USize64(0),
            name: None,
            uri: None,
            extensions: Default::default(),
            extras: Default::default(),
        });

        let mut buffer = BufferBuilder::new();
        let mut animated_nodes = HashMap::new();
        let mut root_children = Vec::with_capacity(RIG.len());

        for seg in &RIG {
            let mesh =
                geometry::push_pyramid_mesh(&mut root, &mut buffer, seg.mesh_name, seg.pyramid());
            let mut mesh_node = empty_node(seg.mesh_name);
            mesh_node.mesh = Some(mesh);
            if seg.mesh_translation != [0.0; 3] {
                mesh_node.translation = Some(seg.mesh_translation);
            }
            mesh_node.rotation = rotation_of(seg.mesh_rotation_deg);
            let mesh_node = root.push(mesh_node);

            let mut rot_children = Vec::with_capacity(2);
            if seg.with_camera {
                rot_children.push(push_camera_node(&mut root));
            }
            rot_children.push(mesh_node);

            let mut rot_node = empty_node(&format!("{}RotationAnimation", seg.stem));
            rot_node.children = Some(rot_children);
            let rot_node = root.push(rot_node);

            let mut pos_node = empty_node(&format!("{}PositionAnimation", seg.stem));
            pos_node.rotation = rotation_of(seg.marker_rotation_deg);
            pos_node.children = Some(vec![rot_node]);
            let pos_node = root.push(pos_node);

            animated_nodes.insert((seg.segment.to_string(), Channel::Translation), pos_node);
            animated_nodes.insert((seg.segment.to_string(), Channel::Rotation), rot_node);
            root_children.push(pos_node);
        }

        let mut root_marker = empty_node("Root");
        root_marker.children = Some(root_children);
        let root_marker = root.push(root_marker);

        let scene = root.push(json::Scene {
            extensions: Default::default(),
            extras: Default::default(),
            name: Some("Scene".to_string()),
            nodes: vec![root_marker],
        });
        root.scene = Some(scene);

        Self {
            root,
            buffer,
            clip_name: config.clip_name.clone(),
            animated_nodes,
            curves: Vec::new(),
        }
    }

    fn curve_slot(&mut self, target: CurveTarget<'_>) -> &mut ChannelCurves {
        let key = (target.segment.to_string(), target.channel);
        let i = match self.curves.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                self.curves.push((key, ChannelCurves::default()));
                self.curves.len() - 1
            }
        };
        &mut self.curves[i].1
    }

    /// Pack every buffered channel into samplers and close the document.
    pub fn finish(mut self) -> Result<SceneDoc, ConvertError> {
        let mut channels = Vec::new();
        let mut samplers = Vec::new();

        let curves = std::mem::take(&mut self.curves);
        for ((segment, channel), slot) in curves {
            let [x, y, z] = slot.axes;
            let (Some(x), Some(y), Some(z)) = (x, y, z) else {
                return Err(ConvertError::export(format!(
                    "segment '{}' {}: incomplete axis set",
                    segment,
                    channel.label()
                )));
            };
            if x.len() != y.len() || x.len() != z.len() {
                return Err(ConvertError::export(format!(
                    "segment '{}' {}: axis key counts differ ({}/{}/{})",
                    segment,
                    channel.label(),
                    x.len(),
                    y.len(),
                    z.len()
                )));
            }
            if x.iter()
                .zip(&y)
                .zip(&z)
                .any(|((kx, ky), kz)| ky.time_ms != kx.time_ms || kz.time_ms != kx.time_ms)
            {
                return Err(ConvertError::export(format!(
                    "segment '{}' {}: axis key times differ",
                    segment,
                    channel.label()
                )));
            }
            if x.is_empty() {
                log::debug!("segment '{}' {}: no keys, channel skipped", segment, channel.label());
                continue;
            }

            let node = self
                .animated_nodes
                .get(&(segment.clone(), channel))
                .copied()
                .ok_or_else(|| {
                    ConvertError::export(format!("segment '{}' has no rig node", segment))
                })?;

            let times: Vec<f32> = x.iter().map(|k| k.time_ms as f32 / 1000.0).collect();
            let mut t_min = f32::INFINITY;
            let mut t_max = f32::NEG_INFINITY;
            for t in &times {
                t_min = t_min.min(*t);
                t_max = t_max.max(*t);
            }
            let input_view = self.buffer.push_f32s(&mut self.root, &times, None);
            let input = buffer::push_f32_accessor(
                &mut self.root,
                input_view,
                json::accessor::Type::Scalar,
                times.len(),
                Some(serde_json::Value::from(vec![t_min])),
                Some(serde_json::Value::from(vec![t_max])),
            );

            let (output, path) = match channel {
                Channel::Translation => {
                    let mut data = Vec::with_capacity(x.len() * 3);
                    for ((kx, ky), kz) in x.iter().zip(&y).zip(&z) {
                        data.extend_from_slice(&[kx.value, ky.value, kz.value]);
                    }
                    let view = self.buffer.push_f32s(&mut self.root, &data, None);
                    let accessor = buffer::push_f32_accessor(
                        &mut self.root,
                        view,
                        json::accessor::Type::Vec3,
                        x.len(),
                        None,
                        None,
                    );
                    (accessor, json::animation::Property::Translation)
                }
                Channel::Rotation => {
                    let mut data = Vec::with_capacity(x.len() * 4);
                    for ((kx, ky), kz) in x.iter().zip(&y).zip(&z) {
                        let quat = rig::euler_deg_to_quat([kx.value, ky.value, kz.value]);
                        data.extend_from_slice(&quat);
                    }
                    let view = self.buffer.push_f32s(&mut self.root, &data, None);
                    let accessor = buffer::push_f32_accessor(
                        &mut self.root,
                        view,
                        json::accessor::Type::Vec4,
                        x.len(),
                        None,
                        None,
                    );
                    (accessor, json::animation::Property::Rotation)
                }
            };

            let sampler = json::Index::new(samplers.len() as u32);
            samplers.push(json::animation::Sampler {
                extensions: Default::default(),
                extras: Default::default(),
                input,
                interpolation: Valid(gltf_interpolation(slot.interp)),
                output,
            });
            channels.push(json::animation::Channel {
                sampler,
                target: json::animation::Target {
                    extensions: Default::default(),
                    extras: Default::default(),
                    node,
                    path: Valid(path),
                },
                extensions: Default::default(),
                extras: Default::default(),
            });
        }

        if channels.is_empty() {
            log::info!("no animation keys in take; writing a static scene");
        } else {
            self.root.push(json::Animation {
                extensions: Default::default(),
                extras: Default::default(),
                channels,
                name: Some(self.clip_name.clone()),
                samplers,
            });
        }

        let bin = self.buffer.into_bytes();
        if let Some(buffer) = self.root.buffers.first_mut() {
            buffer.byte_length = USize64(bin.len() as u64);
        }
        log::debug!(
            "assembled scene: {} nodes, {} bytes of packed data",
            self.root.nodes.len(),
            bin.len()
        );
        Ok(SceneDoc {
            root: self.root,
            bin,
        })
    }
}

impl CurveSink for SceneBuilder {
    fn write_axis(
        &mut self,
        target: CurveTarget<'_>,
        axis: Axis,
        interp: Interpolation,
        keys: &[Key],
    ) -> Result<(), ConvertError> {
        if !self
            .animated_nodes
            .contains_key(&(target.segment.to_string(), target.channel))
        {
            return Err(ConvertError::export(format!(
                "segment '{}' has no rig node",
                target.segment
            )));
        }

        let slot = self.curve_slot(target);
        let cell = &mut slot.axes[axis.index()];
        if cell.is_some() {
            return Err(ConvertError::export(format!(
                "segment '{}' {}: axis {} written twice",
                target.segment,
                target.channel.label(),
                axis.key()
            )));
        }
        *cell = Some(keys.to_vec());
        slot.interp = interp;
        Ok(())
    }
}

fn gltf_interpolation(interp: Interpolation) -> json::animation::Interpolation {
    match interp {
        Interpolation::Linear => json::animation::Interpolation::Linear,
    }
}

fn empty_node(name: &str) -> json::Node {
    json::Node {
        camera: None,
        children: None,
        extensions: Default::default(),
        extras: Default::default(),
        matrix: None,
        mesh: None,
        name: Some(name.to_string()),
        rotation: None,
        scale: None,
        translation: None,
        skin: None,
        weights: None,
    }
}

fn rotation_of(deg: [f32; 3]) -> Option<json::scene::UnitQuaternion> {
    if deg == [0.0, 0.0, 0.0] {
        None
    } else {
        Some(json::scene::UnitQuaternion(rig::euler_deg_to_quat(deg)))
    }
}

fn push_camera_node(root: &mut json::Root) -> json::Index<json::Node> {
    let camera = root.push(json::Camera {
        name: Some("Camera".to_string()),
        orthographic: None,
        perspective: Some(json::camera::Perspective {
            aspect_ratio: Some(16.0 / 9.0),
            yfov: 40.0_f32.to_radians(),
            zfar: Some(10000.0),
            znear: 0.1,
            extensions: Default::default(),
            extras: Default::default(),
        }),
        type_: Valid(json::camera::Type::Perspective),
        extensions: Default::default(),
        extras: Default::default(),
    });

    let mut node = empty_node("Camera");
    node.camera = Some(camera);
    node.rotation = rotation_of([0.0, 90.0, 0.0]);
    node.scale = Some([100.0, 100.0, 100.0]);
    root.push(node)
}
