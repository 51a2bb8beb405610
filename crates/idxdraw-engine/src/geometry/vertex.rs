use bytemuck::{Pod, Zeroable};

/// Shader input location of the position attribute.
pub const POSITION_LOCATION: u32 = 0;

/// One vertex: a homogeneous clip-space position.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 4],
}

impl Vertex {
    /// Byte stride of one vertex in the vertex buffer.
    pub const SIZE: u64 = std::mem::size_of::<Vertex>() as u64;

    const ATTRS: [wgpu::VertexAttribute; 1] =
        wgpu::vertex_attr_array![POSITION_LOCATION => Float32x4];

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { position: [x, y, z, w] }
    }

    /// Layout of the single vertex buffer bound at slot 0.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_four_packed_floats() {
        assert_eq!(Vertex::SIZE, 16);
        assert_eq!(std::mem::align_of::<Vertex>(), 4);
    }

    #[test]
    fn layout_stride_matches_vertex_size() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, Vertex::SIZE);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
    }

    #[test]
    fn layout_declares_single_position_attribute() {
        let layout = Vertex::layout();
        assert_eq!(layout.attributes.len(), 1);

        let attr = layout.attributes[0];
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.shader_location, POSITION_LOCATION);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x4);
        assert_eq!(attr.format.size(), Vertex::SIZE);
    }

    #[test]
    fn bytes_are_native_floats_in_declaration_order() {
        let v = Vertex::new(1.0, 2.0, 3.0, 4.0);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[4..8], &2.0f32.to_ne_bytes());
    }
}
