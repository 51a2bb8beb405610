use crate::geometry::IndexedGeometry;

/// Device-resident vertex + index buffers, written once at startup.
#[derive(Debug)]
pub struct GeometryBuffers {
    pub vertex: wgpu::Buffer,
    pub index: wgpu::Buffer,
    pub index_count: u32,
    pub index_format: wgpu::IndexFormat,
}

impl GeometryBuffers {
    /// Usage flags of the vertex buffer.
    pub const VERTEX_USAGE: wgpu::BufferUsages =
        wgpu::BufferUsages::VERTEX.union(wgpu::BufferUsages::COPY_DST);

    /// Usage flags of the index buffer.
    pub const INDEX_USAGE: wgpu::BufferUsages =
        wgpu::BufferUsages::INDEX.union(wgpu::BufferUsages::COPY_DST);

    /// Allocates both buffers at their exact byte lengths and copies the
    /// geometry into them through the queue.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        geometry: &IndexedGeometry<'_>,
    ) -> Self {
        let vertex = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("idxdraw vertex buffer"),
            size: geometry.vertex_byte_len(),
            usage: Self::VERTEX_USAGE,
            mapped_at_creation: false,
        });

        let index = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("idxdraw index buffer"),
            size: geometry.index_byte_len(),
            usage: Self::INDEX_USAGE,
            mapped_at_creation: false,
        });

        queue.write_buffer(&vertex, 0, geometry.vertex_bytes());
        queue.write_buffer(&index, 0, geometry.index_bytes());

        log::info!(
            "uploaded {} vertices ({} bytes) and {} indices ({} bytes)",
            geometry.vertex_count(),
            geometry.vertex_byte_len(),
            geometry.index_count(),
            geometry.index_byte_len()
        );

        Self {
            vertex,
            index,
            index_count: geometry.index_count(),
            index_format: wgpu::IndexFormat::Uint32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_buffer_is_copy_destination_vertex_role() {
        let usage = GeometryBuffers::VERTEX_USAGE;
        assert!(usage.contains(wgpu::BufferUsages::VERTEX));
        assert!(usage.contains(wgpu::BufferUsages::COPY_DST));
        assert!(!usage.contains(wgpu::BufferUsages::INDEX));
    }

    #[test]
    fn index_buffer_is_copy_destination_index_role() {
        let usage = GeometryBuffers::INDEX_USAGE;
        assert!(usage.contains(wgpu::BufferUsages::INDEX));
        assert!(usage.contains(wgpu::BufferUsages::COPY_DST));
        assert!(!usage.contains(wgpu::BufferUsages::VERTEX));
    }

    #[test]
    fn index_bytes_are_u32_wide() {
        let g = IndexedGeometry::sample();
        assert_eq!(
            g.index_byte_len(),
            g.index_count() as u64 * std::mem::size_of::<u32>() as u64
        );
    }
}
