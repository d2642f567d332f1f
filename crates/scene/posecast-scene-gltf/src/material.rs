//! The five per-face marker materials.

use gltf::json;
use gltf::json::validation::Checked::Valid;

pub(crate) const FACE_MATERIAL_COUNT: usize = 5;

/// Diffuse palette over face index 0..5 (blue, green, cyan, red+green,
/// red+blue), the historical marker color formula.
fn face_color(i: usize) -> [f32; 3] {
    [
        if i > 2 { 1.0 } else { 0.0 },
        if i > 0 && i < 4 { 1.0 } else { 0.0 },
        if i % 2 == 1 { 0.0 } else { 1.0 },
    ]
}

/// Append one opaque material per face: black emissive, the per-face
/// diffuse color, half-rough and non-metallic (the closest PBR rendering of
/// the source's shininess-0.5 phong).
pub(crate) fn push_face_materials(root: &mut json::Root) -> Vec<json::Index<json::Material>> {
    (0..FACE_MATERIAL_COUNT)
        .map(|i| {
            let [r, g, b] = face_color(i);
            root.push(json::Material {
                alpha_cutoff: None,
                alpha_mode: Valid(json::material::AlphaMode::Opaque),
                double_sided: false,
                name: Some(format!("material{i}")),
                pbr_metallic_roughness: json::material::PbrMetallicRoughness {
                    base_color_factor: json::material::PbrBaseColorFactor([r, g, b, 1.0]),
                    base_color_texture: None,
                    metallic_factor: json::material::StrengthFactor(0.0),
                    roughness_factor: json::material::StrengthFactor(0.5),
                    metallic_roughness_texture: None,
                    extensions: Default::default(),
                    extras: Default::default(),
                },
                normal_texture: None,
                occlusion_texture: None,
                emissive_texture: None,
                emissive_factor: json::material::EmissiveFactor([0.0, 0.0, 0.0]),
                extensions: Default::default(),
                extras: Default::default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_palette_matches_the_formula() {
        assert_eq!(face_color(0), [0.0, 0.0, 1.0]);
        assert_eq!(face_color(1), [0.0, 1.0, 0.0]);
        assert_eq!(face_color(2), [0.0, 1.0, 1.0]);
        assert_eq!(face_color(3), [1.0, 1.0, 0.0]);
        assert_eq!(face_color(4), [1.0, 0.0, 1.0]);
    }
}
