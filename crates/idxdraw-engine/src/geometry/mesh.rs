use super::{GeometryError, Vertex};

/// Two pairs of side-by-side triangles.
pub const SAMPLE_VERTICES: [Vertex; 6] = [
    Vertex::new(-0.1, 0.5, 0.0, 1.0),
    Vertex::new(-0.5, -0.5, 0.0, 1.0),
    Vertex::new(-0.1, -0.5, 0.0, 1.0),
    Vertex::new(0.1, 0.5, 0.0, 1.0),
    Vertex::new(0.1, -0.5, 0.0, 1.0),
    Vertex::new(0.5, -0.5, 0.0, 1.0),
];

/// Four triangles over `SAMPLE_VERTICES`; the last two bridge the gap between
/// the outer pair by reusing their vertices.
pub const SAMPLE_INDICES: [u32; 12] = [
    0, 1, 2, //
    3, 4, 5, //
    2, 3, 0, //
    2, 4, 3,
];

/// Borrowed, validated triangle-list geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IndexedGeometry<'a> {
    vertices: &'a [Vertex],
    indices: &'a [u32],
}

impl IndexedGeometry<'static> {
    /// The fixed geometry drawn by the sample.
    pub fn sample() -> Self {
        Self {
            vertices: &SAMPLE_VERTICES,
            indices: &SAMPLE_INDICES,
        }
    }
}

impl<'a> IndexedGeometry<'a> {
    pub fn new(vertices: &'a [Vertex], indices: &'a [u32]) -> Result<Self, GeometryError> {
        let geometry = Self { vertices, indices };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Checks the triangle-list invariants:
    /// - non-empty
    /// - vertex and index counts fit in `u32`
    /// - index count is a multiple of 3
    /// - every index addresses an existing vertex
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.vertices.is_empty() || self.indices.is_empty() {
            return Err(GeometryError::Empty);
        }

        check_u32_counts(self.vertices.len(), self.indices.len())?;

        if self.indices.len() % 3 != 0 {
            return Err(GeometryError::IndexCountNotMultipleOfThree {
                len: self.indices.len(),
            });
        }

        let vertex_count = self.vertices.len();
        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertex_count)
        {
            return Err(GeometryError::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        Ok(())
    }

    #[inline]
    pub fn vertices(&self) -> &'a [Vertex] {
        self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &'a [u32] {
        self.indices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices, as consumed by `draw_indexed`. Validation keeps the
    /// count within `u32`.
    #[inline]
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.vertices)
    }

    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// Exact vertex buffer size: `vertex_count * 16`.
    pub fn vertex_byte_len(&self) -> u64 {
        self.vertices.len() as u64 * Vertex::SIZE
    }

    /// Exact index buffer size: `index_count * 4`.
    pub fn index_byte_len(&self) -> u64 {
        self.indices.len() as u64 * std::mem::size_of::<u32>() as u64
    }
}

/// Both counts must fit the `u32` index and draw-range types.
fn check_u32_counts(vertex_count: usize, index_count: usize) -> Result<(), GeometryError> {
    if u32::try_from(vertex_count).is_err() {
        return Err(GeometryError::TooManyVertices { vertex_count });
    }
    if u32::try_from(index_count).is_err() {
        return Err(GeometryError::TooManyIndices { index_count });
    }
    Ok(())
}
