//! Packing of vertex and animation data into the document's single buffer.
//!
//! Views and accessors are appended to the `Root` as data lands; the buffer
//! object itself is index 0 and gets its final byte length patched in when
//! the scene is finished.

use gltf::json;
use gltf::json::validation::Checked::Valid;
use gltf::json::validation::USize64;

pub(crate) struct BufferBuilder {
    bytes: Vec<u8>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Pad to the 4-byte alignment accessor component types require.
    fn align(&mut self) {
        while self.bytes.len() % 4 != 0 {
            self.bytes.push(0);
        }
    }

    /// Append little-endian f32 data and expose it as a buffer view.
    pub fn push_f32s(
        &mut self,
        root: &mut json::Root,
        values: &[f32],
        target: Option<json::buffer::Target>,
    ) -> json::Index<json::buffer::View> {
        self.align();
        let byte_offset = self.bytes.len();
        for v in values {
            self.bytes.extend_from_slice(&v.to_le_bytes());
        }
        push_view(root, byte_offset, values.len() * 4, target)
    }

    /// Append little-endian u16 data (indices) and expose it as a view.
    pub fn push_u16s(
        &mut self,
        root: &mut json::Root,
        values: &[u16],
        target: Option<json::buffer::Target>,
    ) -> json::Index<json::buffer::View> {
        self.align();
        let byte_offset = self.bytes.len();
        for v in values {
            self.bytes.extend_from_slice(&v.to_le_bytes());
        }
        push_view(root, byte_offset, values.len() * 2, target)
    }

    pub fn into_bytes(mut self) -> Vec<u8> {
        self.align();
        self.bytes
    }
}

fn push_view(
    root: &mut json::Root,
    byte_offset: usize,
    byte_length: usize,
    target: Option<json::buffer::Target>,
) -> json::Index<json::buffer::View> {
    root.push(json::buffer::View {
        buffer: json::Index::new(0),
        byte_length: USize64(byte_length as u64),
        byte_offset: Some(USize64(byte_offset as u64)),
        byte_stride: None,
        name: None,
        target: target.map(Valid),
        extensions: Default::default(),
        extras: Default::default(),
    })
}

pub(crate) fn push_f32_accessor(
    root: &mut json::Root,
    view: json::Index<json::buffer::View>,
    type_: json::accessor::Type,
    count: usize,
    min: Option<serde_json::Value>,
    max: Option<serde_json::Value>,
) -> json::Index<json::Accessor> {
    root.push(json::Accessor {
        buffer_view: Some(view),
        byte_offset: Some(USize64(0)),
        count: USize64(count as u64),
        component_type: Valid(json::accessor::GenericComponentType(
            json::accessor::ComponentType::F32,
        )),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(type_),
        min,
        max,
        name: None,
        normalized: false,
        sparse: None,
    })
}

pub(crate) fn push_u16_accessor(
    root: &mut json::Root,
    view: json::Index<json::buffer::View>,
    count: usize,
) -> json::Index<json::Accessor> {
    root.push(json::Accessor {
        buffer_view: Some(view),
        byte_offset: Some(USize64(0)),
        count: USize64(count as u64),
        component_type: Valid(json::accessor::GenericComponentType(
            json::accessor::ComponentType::U16,
        )),
        extensions: Default::default(),
        extras: Default::default(),
        type_: Valid(json::accessor::Type::Scalar),
        min: None,
        max: None,
        name: None,
        normalized: false,
        sparse: None,
    })
}
