//! Pyramid marker meshes.
//!
//! Sixteen control points (each base corner duplicated per adjacent face so
//! normals stay flat) over five faces: a quad base and four side triangles.
//! Each face is its own primitive so it binds its own material, the glTF
//! rendering of by-polygon material mapping.

use std::collections::BTreeMap;

use gltf::json;
use gltf::json::validation::Checked::Valid;

use crate::buffer::{self, BufferBuilder};
use crate::material;

pub(crate) struct PyramidSpec {
    pub side: f32,
    pub height: f32,
    /// Apex below the base with normals mirrored through it.
    pub right_hand: bool,
}

struct PyramidData {
    positions: [[f32; 3]; 16],
    normals: [[f32; 3]; 16],
}

/// Control-point indices per face: the base quad (pre-triangulated) and four
/// side triangles.
const FACES: [&[u16]; 5] = [
    &[0, 3, 2, 0, 2, 1],
    &[4, 5, 6],
    &[7, 8, 9],
    &[10, 11, 12],
    &[13, 14, 15],
];

fn tessellate(spec: &PyramidSpec) -> PyramidData {
    let s = spec.side;
    let sign = if spec.right_hand { -1.0 } else { 1.0 };

    let v0 = [-s, 0.0, s];
    let v1 = [s, 0.0, s];
    let v2 = [s, 0.0, -s];
    let v3 = [-s, 0.0, -s];
    let v4 = [0.0, sign * spec.height, 0.0];

    let n0 = [0.0, sign, 0.0];
    let n1 = [0.0, sign * 0.447, 0.894];
    let n2 = [0.894, sign * 0.447, 0.0];
    let n3 = [0.0, sign * 0.447, -0.894];
    let n4 = [-0.894, sign * 0.447, 0.0];

    PyramidData {
        positions: [
            v0, v1, v2, v3, // base
            v0, v1, v4, // front
            v1, v2, v4, // right
            v2, v3, v4, // back
            v3, v0, v4, // left
        ],
        normals: [
            n0, n0, n0, n0, n1, n1, n1, n2, n2, n2, n3, n3, n3, n4, n4, n4,
        ],
    }
}

/// Append one pyramid mesh (vertex data, five materials, five primitives)
/// to the document.
pub(crate) fn push_pyramid_mesh(
    root: &mut json::Root,
    buf: &mut BufferBuilder,
    name: &str,
    spec: PyramidSpec,
) -> json::Index<json::Mesh> {
    let data = tessellate(&spec);

    let mut flat = Vec::with_capacity(data.positions.len() * 3);
    let mut min = [f32::INFINITY; 3];
    let mut max = [f32::NEG_INFINITY; 3];
    for p in &data.positions {
        for i in 0..3 {
            min[i] = min[i].min(p[i]);
            max[i] = max[i].max(p[i]);
        }
        flat.extend_from_slice(p);
    }
    let pos_view = buf.push_f32s(root, &flat, Some(json::buffer::Target::ArrayBuffer));
    let positions = buffer::push_f32_accessor(
        root,
        pos_view,
        json::accessor::Type::Vec3,
        data.positions.len(),
        Some(serde_json::Value::from(min.to_vec())),
        Some(serde_json::Value::from(max.to_vec())),
    );

    let flat_normals: Vec<f32> = data.normals.iter().flatten().copied().collect();
    let norm_view = buf.push_f32s(root, &flat_normals, Some(json::buffer::Target::ArrayBuffer));
    let normals = buffer::push_f32_accessor(
        root,
        norm_view,
        json::accessor::Type::Vec3,
        data.normals.len(),
        None,
        None,
    );

    let materials = material::push_face_materials(root);
    let mut primitives = Vec::with_capacity(FACES.len());
    for (face, material) in FACES.iter().zip(materials) {
        let idx_view = buf.push_u16s(root, face, Some(json::buffer::Target::ElementArrayBuffer));
        let indices = buffer::push_u16_accessor(root, idx_view, face.len());

        let mut attributes = BTreeMap::new();
        attributes.insert(Valid(json::mesh::Semantic::Positions), positions);
        attributes.insert(Valid(json::mesh::Semantic::Normals), normals);

        primitives.push(json::mesh::Primitive {
            attributes,
            extensions: Default::default(),
            extras: Default::default(),
            indices: Some(indices),
            material: Some(material),
            mode: Valid(json::mesh::Mode::Triangles),
            targets: None,
        });
    }

    root.push(json::Mesh {
        extensions: Default::default(),
        extras: Default::default(),
        name: Some(name.to_string()),
        primitives,
        weights: None,
    })
}
