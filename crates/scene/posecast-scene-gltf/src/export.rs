//! Document writers: binary-packed GLB or human-readable glTF JSON.
//!
//! Both encodings belong to the `gltf` crate; this module only chooses a
//! writer and hands the assembled document over.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use gltf::json;
use posecast_curve_core::ConvertError;

use crate::scene::SceneDoc;

/// Output variant selected by the CLI's trailing format flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single-file binary GLB container (the default).
    Binary,
    /// Pretty-printed `.gltf` JSON with a sibling `.bin` payload.
    Text,
}

pub fn save_scene(doc: SceneDoc, path: &Path, format: OutputFormat) -> Result<(), ConvertError> {
    match format {
        OutputFormat::Binary => save_binary(doc, path),
        OutputFormat::Text => save_text(doc, path),
    }
}

fn align_to_multiple_of_four(n: usize) -> usize {
    (n + 3) & !3
}

fn save_binary(doc: SceneDoc, path: &Path) -> Result<(), ConvertError> {
    let SceneDoc { root, bin } = doc;
    let json_string = json::serialize::to_string(&root)
        .map_err(|e| ConvertError::export(format!("document serialization failed: {e}")))?;

    // 12-byte header plus two chunks, each an 8-byte chunk header and
    // 4-byte-aligned payload. The bin payload is pre-aligned.
    let length = 12 + 8 + align_to_multiple_of_four(json_string.len()) + 8 + bin.len();
    let glb = gltf::binary::Glb {
        header: gltf::binary::Header {
            magic: *b"glTF",
            version: 2,
            length: length as u32,
        },
        json: Cow::Owned(json_string.into_bytes()),
        bin: Some(Cow::Owned(bin)),
    };

    let writer = fs::File::create(path)?;
    glb.to_writer(writer)
        .map_err(|e| ConvertError::export(format!("GLB write failed: {e}")))?;
    log::info!("wrote binary scene to {}", path.display());
    Ok(())
}

fn save_text(doc: SceneDoc, path: &Path) -> Result<(), ConvertError> {
    let SceneDoc { mut root, bin } = doc;

    let bin_path = path.with_extension("bin");
    let bin_name = bin_path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            ConvertError::export(format!("output path '{}' has no file name", path.display()))
        })?;
    if let Some(buffer) = root.buffers.first_mut() {
        buffer.uri = Some(bin_name);
    }

    let json_string = json::serialize::to_string_pretty(&root)
        .map_err(|e| ConvertError::export(format!("document serialization failed: {e}")))?;

    // Payload first; the document referencing it is finalized last.
    fs::write(&bin_path, &bin)?;
    fs::write(path, json_string)?;
    log::info!(
        "wrote text scene to {} (payload {})",
        path.display(),
        bin_path.display()
    );
    Ok(())
}
